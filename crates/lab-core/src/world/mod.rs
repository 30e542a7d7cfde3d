//! Room graph and per-room state
//!
//! Exits are fixed once the world is built. Items and puzzle state are
//! mutated in place by the actions.

mod errors;
mod map;

pub use errors::WorldError;

use hashbrown::HashMap;

use crate::consts::{START_ROOM, TREASURE_ROOM};

/// Shown for a room id that is not in the table
pub const EMPTY_ROOM_DESCRIPTION: &str = "Пустая комната без описания.";

/// Directed, labelled edge to another room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exit {
    pub direction: String,
    pub target: String,
}

/// A question attached to a room.
///
/// `solved` flips once and never resets. The answer stays readable after
/// solving because the chest code check reads it regardless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub question: String,
    pub answer: String,
    pub solved: bool,
}

impl Puzzle {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            solved: false,
        }
    }
}

/// A node of the labyrinth
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Room {
    pub id: String,
    pub description: String,
    /// In display order
    pub exits: Vec<Exit>,
    /// Items lying on the floor, in the order they appeared
    pub items: Vec<String>,
    pub puzzle: Option<Puzzle>,
}

impl Room {
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    /// Stand-in for an id missing from the table
    pub fn placeholder(id: impl Into<String>) -> Self {
        Self::new(id, EMPTY_ROOM_DESCRIPTION)
    }

    pub fn with_exit(mut self, direction: impl Into<String>, target: impl Into<String>) -> Self {
        self.exits.push(Exit {
            direction: direction.into(),
            target: target.into(),
        });
        self
    }

    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.items.push(item.into());
        self
    }

    pub fn with_puzzle(mut self, question: impl Into<String>, answer: impl Into<String>) -> Self {
        self.puzzle = Some(Puzzle::new(question, answer));
        self
    }

    /// Target room of the exit labelled `direction`
    pub fn exit(&self, direction: &str) -> Option<&str> {
        self.exits
            .iter()
            .find(|e| e.direction == direction)
            .map(|e| e.target.as_str())
    }

    pub fn has_item(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }

    /// Remove the first item called `item`. Returns false if there is none.
    pub fn remove_item(&mut self, item: &str) -> bool {
        match self.items.iter().position(|i| i == item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn add_item(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    /// The puzzle, if it exists and is still unsolved
    pub fn active_puzzle(&self) -> Option<&Puzzle> {
        self.puzzle.as_ref().filter(|p| !p.solved)
    }
}

/// The room table
#[derive(Debug, Clone, Default)]
pub struct World {
    rooms: HashMap<String, Room>,
}

impl World {
    /// Create an empty world
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a room, replacing any room with the same id
    pub fn add_room(&mut self, room: Room) -> Option<Room> {
        self.rooms.insert(room.id.clone(), room)
    }

    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.get(id)
    }

    pub fn room_mut(&mut self, id: &str) -> Option<&mut Room> {
        self.rooms.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.rooms.contains_key(id)
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Check that the start and treasure rooms exist and no exit dangles
    pub fn validate(&self) -> Result<(), WorldError> {
        if !self.contains(START_ROOM) {
            return Err(WorldError::MissingStartRoom(START_ROOM.to_string()));
        }
        if !self.contains(TREASURE_ROOM) {
            return Err(WorldError::MissingTreasureRoom(TREASURE_ROOM.to_string()));
        }

        // Sort for a stable error on worlds with several problems
        let mut rooms: Vec<&Room> = self.rooms.values().collect();
        rooms.sort_by(|a, b| a.id.cmp(&b.id));

        for room in rooms {
            if let Some(exit) = room.exits.iter().find(|e| !self.contains(&e.target)) {
                return Err(WorldError::DanglingExit {
                    room: room.id.clone(),
                    direction: exit.direction.clone(),
                    target: exit.target.clone(),
                });
            }
        }
        Ok(())
    }
}
