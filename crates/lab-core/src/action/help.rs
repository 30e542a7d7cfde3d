//! Command reference

use strum::IntoEnumIterator;

use super::Verb;
use crate::consts::DIRECTIONS;
use crate::gameloop::GameState;

/// One `(usage, description)` row per command, directions last
pub fn command_table() -> Vec<(String, &'static str)> {
    let mut rows: Vec<(String, &'static str)> = Verb::iter()
        .map(|verb| (verb.usage().to_string(), verb.description()))
        .collect();
    rows.push((DIRECTIONS.join("/"), "короткая команда движения"));
    rows
}

/// List the available commands
pub fn show_help(state: &mut GameState) {
    state.message("Доступные команды:");
    for (usage, description) in command_table() {
        state.message(format!("  {usage:<16} - {description}"));
    }
}
