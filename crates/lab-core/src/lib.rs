//! lab-core: Core game logic for the labyrinth treasure hunt
//!
//! This crate contains all game logic. Text I/O goes through the
//! [`Console`] trait, so the engine can be driven by a terminal or by a
//! fixed script.

pub mod action;
pub mod console;
pub mod options;
pub mod world;

mod consts;
mod gameloop;
mod rng;

pub use console::{Console, ScriptedConsole};
pub use consts::*;
pub use gameloop::{
    FAREWELL_MSG, GameLoop, GameLoopResult, GameState, INTERRUPTED_MSG, UNKNOWN_COMMAND_MSG,
    WELCOME_MSG,
};
pub use options::{GameOptions, OptionsError};
pub use rng::{GameRng, RngTraceEntry, pseudo_random};
pub use world::{Room, World, WorldError};
