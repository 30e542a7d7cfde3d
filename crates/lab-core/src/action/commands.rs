//! Turning an input line into a [`Command`]

use super::{Command, Verb};
use crate::consts::DIRECTIONS;

/// Parse one line of player input.
///
/// Case-insensitive. The first word is the verb and the remaining words,
/// joined by single spaces, are the argument. Returns `None` for a blank
/// line.
pub fn parse_command(line: &str) -> Option<Command> {
    let lowered = line.trim().to_lowercase();
    let mut words = lowered.split_whitespace();
    let word = words.next()?;
    let rest: Vec<&str> = words.collect();
    let arg = if rest.is_empty() {
        None
    } else {
        Some(rest.join(" "))
    };

    if DIRECTIONS.contains(&word) {
        return Some(Command::Go(Some(word.to_string())));
    }

    let command = match Verb::from_word(word) {
        Some(Verb::Help) => Command::Help,
        Some(Verb::Look) => Command::Look,
        Some(Verb::Go) => Command::Go(arg),
        Some(Verb::Take) => Command::Take(arg),
        Some(Verb::Inventory) => Command::Inventory,
        Some(Verb::Use) => Command::Use(arg),
        Some(Verb::Solve) => Command::Solve,
        Some(Verb::Quit) => Command::Quit,
        None => Command::Unknown(word.to_string()),
    };
    Some(command)
}
