//! Opening the treasure chest

use log::debug;

use crate::action::ActionResult;
use crate::console::Console;
use crate::consts::{RUSTY_KEY, TREASURE_CHEST, TREASURE_KEY};
use crate::gameloop::{GameState, INTERRUPTED_MSG};
use crate::world::World;

pub const CHEST_GONE_MSG: &str = "Сундук уже открыт или отсутствует.";
pub const KEY_TURNS_MSG: &str = "Вы применяете ключ, и замок щёлкает. Сундук открыт!";
pub const CODE_OPENS_MSG: &str = "Код верный! Замок щёлкает, сундук открывается!";
pub const VICTORY_MSG: &str = "В сундуке сокровище! Вы победили!";
pub const CHEST_LOCKED_MSG: &str = "Сундук заперт. Вы можете попробовать ввести код.";
pub const CONFIRM_PROMPT: &str = "Ввести код? (да/нет): ";
pub const CODE_PROMPT: &str = "Введите код: ";
pub const WRONG_CODE_MSG: &str = "Код неверный. Сундук остается заперт.";
pub const NO_CODE_MSG: &str = "Не удается определить правильный код.";
pub const BACK_AWAY_MSG: &str = "Вы отступаете от сундука.";

/// Whether `name` refers to the chest (`use treasure_chest`)
pub fn is_chest_name(name: &str) -> bool {
    name == TREASURE_CHEST || name == "treasure_chest"
}

fn is_yes(reply: &str) -> bool {
    matches!(reply.trim().to_lowercase().as_str(), "да" | "yes")
}

/// Try to open the chest in the current room.
///
/// Either key opens it outright. Without one the player may type the room
/// puzzle's code; the code is checked even if that puzzle was solved before.
pub fn attempt_open_treasure(
    state: &mut GameState,
    world: &mut World,
    console: &mut dyn Console,
) -> ActionResult {
    let code = match world.room(&state.current_room) {
        Some(room) if room.has_item(TREASURE_CHEST) => {
            room.puzzle.as_ref().map(|p| p.answer.clone())
        }
        _ => return ActionResult::Failed(CHEST_GONE_MSG.to_string()),
    };

    if state.has_item(TREASURE_KEY) || state.has_item(RUSTY_KEY) {
        state.message(KEY_TURNS_MSG);
        return open_chest(state, world);
    }

    state.message(CHEST_LOCKED_MSG);
    let Some(reply) = state.ask(console, CONFIRM_PROMPT) else {
        state.message(INTERRUPTED_MSG);
        return ActionResult::Quit;
    };
    if !is_yes(&reply) {
        return ActionResult::Failed(BACK_AWAY_MSG.to_string());
    }

    let Some(entered) = state.ask(console, CODE_PROMPT) else {
        state.message(INTERRUPTED_MSG);
        return ActionResult::Quit;
    };

    let Some(code) = code else {
        return ActionResult::Failed(NO_CODE_MSG.to_string());
    };

    if entered.trim().to_lowercase() == code.to_lowercase() {
        state.message(CODE_OPENS_MSG);
        open_chest(state, world)
    } else {
        debug!("wrong chest code entered");
        ActionResult::Failed(WRONG_CODE_MSG.to_string())
    }
}

fn open_chest(state: &mut GameState, world: &mut World) -> ActionResult {
    if let Some(room) = world.room_mut(&state.current_room) {
        room.remove_item(TREASURE_CHEST);
    }
    state.message(VICTORY_MSG);
    state.game_over = true;
    ActionResult::Won
}
