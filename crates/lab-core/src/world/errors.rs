//! Errors raised while building or checking the room graph

use thiserror::Error;

/// Problems found by [`World::validate`](super::World::validate)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    #[error("exit '{direction}' of room '{room}' leads to unknown room '{target}'")]
    DanglingExit {
        room: String,
        direction: String,
        target: String,
    },

    #[error("start room '{0}' does not exist")]
    MissingStartRoom(String),

    #[error("treasure room '{0}' does not exist")]
    MissingTreasureRoom(String),
}
