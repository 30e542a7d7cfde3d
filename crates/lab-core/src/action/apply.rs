//! Using items from the inventory

use crate::action::ActionResult;
use crate::consts::{BRONZE_BOX, RUSTY_KEY, SWORD, TORCH};
use crate::gameloop::GameState;

pub const NOT_CARRIED_MSG: &str = "У вас нет такого предмета.";

/// Use `item` from the inventory
pub fn use_item(state: &mut GameState, item: &str) -> ActionResult {
    if !state.has_item(item) {
        return ActionResult::Failed(NOT_CARRIED_MSG.to_string());
    }

    match item {
        TORCH => {
            state.message("Вы зажгли факел. Стало светлее!");
            ActionResult::NoChange
        }
        SWORD => {
            state.message("Вы крепко сжимаете меч в руке. Чувствуете уверенность!");
            ActionResult::NoChange
        }
        BRONZE_BOX => open_bronze_box(state),
        _ => {
            state.message(format!("Вы не знаете, как использовать {item}."));
            ActionResult::NoChange
        }
    }
}

/// The box holds one rusty key; opening it again finds nothing new
fn open_bronze_box(state: &mut GameState) -> ActionResult {
    state.message("Вы открыли бронзовую шкатулку.");
    if state.has_item(RUSTY_KEY) {
        return ActionResult::NoChange;
    }
    state.add_to_inventory(RUSTY_KEY);
    state.message("Внутри вы нашли ржавый ключ!");
    ActionResult::Success
}
