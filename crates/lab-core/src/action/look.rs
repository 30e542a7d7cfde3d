//! Describing the current room

use crate::gameloop::GameState;
use crate::world::{Room, World};

/// Hint printed under a room with an unsolved puzzle
pub const PUZZLE_HINT: &str = "Кажется, здесь есть загадка (используйте команду solve).";

/// Describe the player's room: header, description, items, exits, puzzle hint.
///
/// Read-only apart from the message buffer. An id missing from the table is
/// described as an empty room.
pub fn describe_current_room(state: &mut GameState, world: &World) {
    let placeholder;
    let room = match world.room(&state.current_room) {
        Some(room) => room,
        None => {
            placeholder = Room::placeholder(state.current_room.clone());
            &placeholder
        }
    };
    describe_room(state, room);
}

fn describe_room(state: &mut GameState, room: &Room) {
    state.message(format!("== {} ==", room.id.to_uppercase()));
    state.message(room.description.clone());

    if !room.items.is_empty() {
        state.message(format!("Заметные предметы: {}", room.items.join(", ")));
    }

    if !room.exits.is_empty() {
        let directions: Vec<&str> = room.exits.iter().map(|e| e.direction.as_str()).collect();
        state.message(format!("Выходы: {}", directions.join(", ")));
    }

    if room.active_puzzle().is_some() {
        state.message(PUZZLE_HINT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::EMPTY_ROOM_DESCRIPTION;

    #[test]
    fn test_describe_entrance() {
        let world = World::labyrinth();
        let mut state = GameState::new();
        describe_current_room(&mut state, &world);
        assert_eq!(state.messages[0], "== ENTRANCE ==");
        assert!(state.messages.contains(&"Заметные предметы: torch".to_string()));
        assert!(state.messages.contains(&"Выходы: north, east".to_string()));
        assert!(!state.messages.contains(&PUZZLE_HINT.to_string()));
    }

    #[test]
    fn test_describe_shows_puzzle_hint_until_solved() {
        let mut world = World::labyrinth();
        let mut state = GameState::new();
        state.current_room = "hall".into();
        describe_current_room(&mut state, &world);
        assert!(state.messages.contains(&PUZZLE_HINT.to_string()));

        if let Some(puzzle) = world.room_mut("hall").and_then(|r| r.puzzle.as_mut()) {
            puzzle.solved = true;
        }
        state.clear_messages();
        describe_current_room(&mut state, &world);
        assert!(!state.messages.contains(&PUZZLE_HINT.to_string()));
    }

    #[test]
    fn test_describe_missing_room() {
        let world = World::labyrinth();
        let mut state = GameState::new();
        state.current_room = "nowhere".into();
        describe_current_room(&mut state, &world);
        assert_eq!(
            state.messages,
            vec!["== NOWHERE ==".to_string(), EMPTY_ROOM_DESCRIPTION.to_string()]
        );
    }
}
