//! Random events after a move

use log::debug;

use super::trap;
use crate::consts::{
    COIN, EVENT_PROBABILITY_MODULO, EVENT_TYPE_FIND_COIN, EVENT_TYPE_HEAR_RUSTLE,
    EVENT_TYPE_TRIGGER_TRAP, EVENT_TYPES_COUNT, SWORD, TORCH, TRAP_ROOM,
};
use crate::gameloop::GameState;
use crate::world::World;

pub const FOUND_COIN_MSG: &str = "Что-то блестит на полу... Вы нашли монетку!";
pub const RUSTLE_MSG: &str = "Вы слышите подозрительный шорох в темноте...";
pub const SCARED_OFF_MSG: &str = "Вы достаете меч и отпугиваете существо!";
pub const PRESSURE_PLATE_MSG: &str = "Вы не видите в темноте и наступаете на нажимную плиту!";

/// Which event a roll picked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomEvent {
    FindCoin,
    HearRustle,
    /// Only bites in the trap room without a torch
    Trap,
}

/// Roll for this step's event, without applying it
pub fn roll_event(state: &mut GameState) -> Option<RandomEvent> {
    let seed = state.steps_taken;
    if !state.rng.one_in(seed, EVENT_PROBABILITY_MODULO) {
        return None;
    }
    match state.rng.draw(seed + 1, EVENT_TYPES_COUNT) {
        EVENT_TYPE_FIND_COIN => Some(RandomEvent::FindCoin),
        EVENT_TYPE_HEAR_RUSTLE => Some(RandomEvent::HearRustle),
        EVENT_TYPE_TRIGGER_TRAP => Some(RandomEvent::Trap),
        _ => None,
    }
}

/// Roll and apply this step's event. Runs once after every successful move.
pub fn random_event(state: &mut GameState, world: &mut World) -> Option<RandomEvent> {
    let event = roll_event(state)?;
    debug!("event {event:?} at step {}", state.steps_taken);

    match event {
        RandomEvent::FindCoin => {
            state.message(FOUND_COIN_MSG);
            // The coin lands on the floor, not in the inventory
            if let Some(room) = world.room_mut(&state.current_room) {
                room.add_item(COIN);
            }
        }
        RandomEvent::HearRustle => {
            state.message(RUSTLE_MSG);
            if state.has_item(SWORD) {
                state.message(SCARED_OFF_MSG);
            }
        }
        RandomEvent::Trap => {
            if state.in_room(TRAP_ROOM) && !state.has_item(TORCH) {
                state.message(PRESSURE_PLATE_MSG);
                trap::trigger_trap(state);
            }
        }
    }
    Some(event)
}
