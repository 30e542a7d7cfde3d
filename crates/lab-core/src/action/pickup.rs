//! Picking up items and listing the inventory

use crate::action::ActionResult;
use crate::gameloop::GameState;
use crate::world::World;

pub const NO_SUCH_ITEM_MSG: &str = "Такого предмета здесь нет.";
pub const EMPTY_INVENTORY_MSG: &str = "Инвентарь пуст.";

/// Pick up `item` from the current room
pub fn take_item(state: &mut GameState, world: &mut World, item: &str) -> ActionResult {
    let taken = world
        .room_mut(&state.current_room)
        .is_some_and(|room| room.remove_item(item));

    if !taken {
        return ActionResult::Failed(NO_SUCH_ITEM_MSG.to_string());
    }

    state.add_to_inventory(item);
    state.message(format!("Вы подняли: {item}"));
    ActionResult::Success
}

/// List the items the player carries
pub fn show_inventory(state: &mut GameState) {
    if state.inventory.is_empty() {
        state.message(EMPTY_INVENTORY_MSG);
    } else {
        let listing = format!("Инвентарь: {}", state.inventory.join(", "));
        state.message(listing);
    }
}
