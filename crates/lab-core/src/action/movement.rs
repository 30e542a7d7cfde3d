//! Moving between rooms

use log::info;

use crate::action::{ActionResult, event, look};
use crate::consts::{RUSTY_KEY, TREASURE_ROOM};
use crate::gameloop::GameState;
use crate::world::World;

pub const NO_EXIT_MSG: &str = "Нельзя пойти в этом направлении.";
pub const LOCKED_DOOR_MSG: &str = "Дверь заперта. Нужен ключ, чтобы пройти дальше.";
pub const KEY_USED_MSG: &str = "Вы используете найденный ключ, чтобы открыть путь в комнату сокровищ.";

/// Move the player through the exit labelled `direction`.
///
/// A successful move counts one step, describes the new room and then rolls
/// for a random event, in that order.
pub fn move_player(state: &mut GameState, world: &mut World, direction: &str) -> ActionResult {
    let target = match world
        .room(&state.current_room)
        .and_then(|room| room.exit(direction))
    {
        Some(target) => target.to_string(),
        None => return ActionResult::Failed(NO_EXIT_MSG.to_string()),
    };

    if target == TREASURE_ROOM {
        if !state.has_item(RUSTY_KEY) {
            return ActionResult::Failed(LOCKED_DOOR_MSG.to_string());
        }
        state.message(KEY_USED_MSG);
    }

    info!("{} -> {target} ({direction})", state.current_room);
    state.current_room = target;
    state.steps_taken += 1;
    look::describe_current_room(state, world);
    event::random_event(state, world);

    if state.game_over {
        ActionResult::Died("killed by a trap".to_string())
    } else {
        ActionResult::Success
    }
}
