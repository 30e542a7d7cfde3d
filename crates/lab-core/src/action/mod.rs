//! Player action system
//!
//! Implements player commands and actions.

use strum::{Display, EnumIter, IntoEnumIterator};

pub mod apply;
pub mod commands;
pub mod event;
pub mod help;
pub mod look;
pub mod movement;
pub mod pickup;
pub mod puzzle;
pub mod trap;
pub mod treasure;

/// Command verbs, each with its aliases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Verb {
    Help,
    Look,
    Go,
    Take,
    Inventory,
    Use,
    Solve,
    Quit,
}

impl Verb {
    /// Words that select this verb, full name first
    pub const fn aliases(&self) -> &'static [&'static str] {
        match self {
            Verb::Help => &["help", "h"],
            Verb::Look => &["look", "l"],
            Verb::Go => &["go", "g"],
            Verb::Take => &["take", "t"],
            Verb::Inventory => &["inventory", "i"],
            Verb::Use => &["use", "u"],
            Verb::Solve => &["solve", "s"],
            Verb::Quit => &["quit", "exit", "q"],
        }
    }

    /// Usage line shown by `help`
    pub const fn usage(&self) -> &'static str {
        match self {
            Verb::Help => "help",
            Verb::Look => "look",
            Verb::Go => "go <direction>",
            Verb::Take => "take <item>",
            Verb::Inventory => "inventory",
            Verb::Use => "use <item>",
            Verb::Solve => "solve",
            Verb::Quit => "quit",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Verb::Help => "показать это сообщение",
            Verb::Look => "осмотреть текущую комнату",
            Verb::Go => "перейти в направлении (north/south/east/west)",
            Verb::Take => "поднять предмет",
            Verb::Inventory => "показать инвентарь",
            Verb::Use => "использовать предмет из инвентаря",
            Verb::Solve => "попытаться решить загадку в комнате",
            Verb::Quit => "выйти из игры",
        }
    }

    /// Look up a verb by any of its aliases
    pub fn from_word(word: &str) -> Option<Self> {
        Verb::iter().find(|verb| verb.aliases().contains(&word))
    }
}

/// Player command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Look,
    /// `None` when no direction was given
    Go(Option<String>),
    Take(Option<String>),
    Inventory,
    Use(Option<String>),
    Solve,
    Quit,
    Unknown(String),
}

impl Command {
    /// The verb this command was parsed from, if any
    pub fn verb(&self) -> Option<Verb> {
        match self {
            Command::Help => Some(Verb::Help),
            Command::Look => Some(Verb::Look),
            Command::Go(_) => Some(Verb::Go),
            Command::Take(_) => Some(Verb::Take),
            Command::Inventory => Some(Verb::Inventory),
            Command::Use(_) => Some(Verb::Use),
            Command::Solve => Some(Verb::Solve),
            Command::Quit => Some(Verb::Quit),
            Command::Unknown(_) => None,
        }
    }
}

/// Result of executing a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    /// Action completed and changed the session or the world
    Success,
    /// Nothing changed; any feedback is already in the message buffer
    NoChange,
    /// Action refused with message, nothing changed
    Failed(String),
    /// Player died
    Died(String),
    /// Treasure chest opened
    Won,
    /// Player asked to leave, or input ran out
    Quit,
}
