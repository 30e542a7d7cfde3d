//! Trap mechanics

use log::info;

use crate::consts::{DAMAGE_ROLL_MODULO, FATAL_DAMAGE_THRESHOLD};
use crate::gameloop::GameState;

pub const TRAP_SPRUNG_MSG: &str = "Ловушка активирована! Пол стал дрожать...";
pub const TRAP_FATAL_MSG: &str = "Ловушка оказалась смертельной! Вы погибли...";
pub const TRAP_DODGED_MSG: &str = "Вы едва успели увернуться! На этот раз вам повезло.";

/// What a sprung trap did to the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrapOutcome {
    /// One item was knocked out of the inventory
    LostItem(String),
    /// Empty-handed and unlucky
    Killed,
    /// Empty-handed and lucky
    Dodged,
}

/// Spring the trap on the player.
///
/// Costs one item picked by the step counter; an empty-handed player instead
/// rolls against death.
pub fn trigger_trap(state: &mut GameState) -> TrapOutcome {
    state.message(TRAP_SPRUNG_MSG);
    let seed = state.steps_taken;

    if !state.inventory.is_empty() {
        let index = state.rng.draw(seed, state.inventory.len());
        if let Some(lost) = state.remove_from_inventory(index) {
            info!("trap took '{lost}'");
            state.message(format!("В суматохе вы потеряли: {lost}!"));
            return TrapOutcome::LostItem(lost);
        }
    }

    let damage_roll = state.rng.draw(seed, DAMAGE_ROLL_MODULO);
    if damage_roll < FATAL_DAMAGE_THRESHOLD {
        state.message(TRAP_FATAL_MSG);
        state.game_over = true;
        TrapOutcome::Killed
    } else {
        state.message(TRAP_DODGED_MSG);
        TrapOutcome::Dodged
    }
}
