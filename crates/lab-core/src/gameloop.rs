//! Main game loop

use log::{debug, info};

use crate::action::{
    ActionResult, Command, apply, commands, help, look, movement, pickup, puzzle, treasure,
};
use crate::console::Console;
use crate::consts::{START_ROOM, TREASURE_ROOM};
use crate::options::GameOptions;
use crate::rng::GameRng;
use crate::world::World;

pub const WELCOME_MSG: &str = "Добро пожаловать в Лабиринт сокровищ!";
pub const FAREWELL_MSG: &str = "Спасибо за игру!";
pub const INTERRUPTED_MSG: &str = "Выход из игры.";
pub const UNKNOWN_COMMAND_MSG: &str = "Неизвестная команда. Введите 'help' для списка команд.";

/// Result of a game loop tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameLoopResult {
    /// Continue playing
    Continue,
    /// Player died with message
    PlayerDied(String),
    /// Player quit
    PlayerQuit,
    /// Treasure chest opened
    PlayerWon,
}

/// Per-playthrough state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Item names in pickup order
    pub inventory: Vec<String>,

    pub current_room: String,

    /// Successful room-to-room moves; seeds every event draw
    pub steps_taken: u64,

    /// Terminal once set
    pub game_over: bool,

    /// Event draw source
    pub rng: GameRng,

    /// Messages for the current turn
    pub messages: Vec<String>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh session standing in the entrance
    pub fn new() -> Self {
        Self {
            inventory: Vec::new(),
            current_room: START_ROOM.to_string(),
            steps_taken: 0,
            game_over: false,
            rng: GameRng::new(),
            messages: Vec::new(),
        }
    }

    /// Add a message to display
    pub fn message(&mut self, msg: impl Into<String>) {
        self.messages.push(msg.into());
    }

    /// Clear messages
    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }

    /// Print and clear the pending messages
    pub fn flush(&mut self, console: &mut dyn Console) {
        for msg in self.messages.drain(..) {
            console.print(&msg);
        }
    }

    /// Flush pending messages, then ask a question.
    ///
    /// `None` means the player interrupted input.
    pub fn ask(&mut self, console: &mut dyn Console, prompt: &str) -> Option<String> {
        self.flush(console);
        console.read_line(prompt)
    }

    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.iter().any(|i| i == item)
    }

    pub fn add_to_inventory(&mut self, item: impl Into<String>) {
        self.inventory.push(item.into());
    }

    /// Remove the item at `index` from the inventory
    pub fn remove_from_inventory(&mut self, index: usize) -> Option<String> {
        if index < self.inventory.len() {
            Some(self.inventory.remove(index))
        } else {
            None
        }
    }

    pub fn in_room(&self, room: &str) -> bool {
        self.current_room == room
    }
}

/// Game loop manager
pub struct GameLoop {
    state: GameState,
    world: World,
    /// How the game ended, once it has
    outcome: Option<GameLoopResult>,
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new(GameState::new(), World::labyrinth())
    }
}

impl GameLoop {
    /// Create a new game loop with the given state and world
    pub fn new(state: GameState, world: World) -> Self {
        Self {
            state,
            world,
            outcome: None,
        }
    }

    /// Get reference to game state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Get mutable reference to game state
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// How the game ended, if it has
    pub fn outcome(&self) -> Option<&GameLoopResult> {
        self.outcome.as_ref()
    }

    /// Play until the game is over, reading commands from `console`
    pub fn run(&mut self, console: &mut dyn Console, options: &GameOptions) -> GameLoopResult {
        if options.welcome {
            self.state.message(WELCOME_MSG);
        }
        look::describe_current_room(&mut self.state, &self.world);
        self.state.flush(console);

        loop {
            if self.state.game_over {
                return self.outcome.clone().unwrap_or(GameLoopResult::PlayerQuit);
            }
            let command = match console.read_line(&options.prompt) {
                Some(line) => match commands::parse_command(&line) {
                    Some(command) => command,
                    None => continue,
                },
                None => {
                    self.state.message(INTERRUPTED_MSG);
                    Command::Quit
                }
            };
            let result = self.tick(command, console);
            if result != GameLoopResult::Continue {
                return result;
            }
        }
    }

    /// Execute a single command and print its output
    pub fn tick(&mut self, command: Command, console: &mut dyn Console) -> GameLoopResult {
        if self.state.game_over {
            return self.outcome.clone().unwrap_or(GameLoopResult::PlayerQuit);
        }

        debug!("command {command:?} in '{}'", self.state.current_room);
        let result = self.execute_command(command, console);

        let loop_result = match result {
            ActionResult::Success | ActionResult::NoChange => GameLoopResult::Continue,
            ActionResult::Failed(msg) => {
                self.state.message(msg);
                GameLoopResult::Continue
            }
            ActionResult::Died(reason) => {
                info!("player died after {} steps: {reason}", self.state.steps_taken);
                self.state.game_over = true;
                GameLoopResult::PlayerDied(reason)
            }
            ActionResult::Won => {
                info!("treasure opened after {} steps", self.state.steps_taken);
                self.state.game_over = true;
                GameLoopResult::PlayerWon
            }
            ActionResult::Quit => {
                info!("player quit after {} steps", self.state.steps_taken);
                self.state.message(FAREWELL_MSG);
                self.state.game_over = true;
                GameLoopResult::PlayerQuit
            }
        };

        if loop_result != GameLoopResult::Continue {
            self.outcome = Some(loop_result.clone());
        }
        self.state.flush(console);
        loop_result
    }

    /// Execute a player command
    fn execute_command(&mut self, command: Command, console: &mut dyn Console) -> ActionResult {
        let state = &mut self.state;
        let world = &mut self.world;

        match command {
            Command::Help => {
                help::show_help(state);
                ActionResult::NoChange
            }
            Command::Look => {
                look::describe_current_room(state, world);
                ActionResult::NoChange
            }
            Command::Go(Some(direction)) => movement::move_player(state, world, &direction),
            Command::Go(None) => {
                ActionResult::Failed("Куда идти? Укажите направление.".to_string())
            }
            Command::Take(Some(item)) => pickup::take_item(state, world, &item),
            Command::Take(None) => ActionResult::Failed("Что взять? Укажите предмет.".to_string()),
            Command::Inventory => {
                pickup::show_inventory(state);
                ActionResult::NoChange
            }
            Command::Use(Some(item)) if treasure::is_chest_name(&item) => {
                if state.in_room(TREASURE_ROOM) {
                    treasure::attempt_open_treasure(state, world, console)
                } else {
                    ActionResult::Failed("Здесь нет сундука с сокровищами.".to_string())
                }
            }
            Command::Use(Some(item)) => apply::use_item(state, &item),
            Command::Use(None) => {
                ActionResult::Failed("Что использовать? Укажите предмет.".to_string())
            }
            Command::Solve => {
                if state.in_room(TREASURE_ROOM) {
                    treasure::attempt_open_treasure(state, world, console)
                } else {
                    puzzle::solve_puzzle(state, world, console)
                }
            }
            Command::Quit => ActionResult::Quit,
            Command::Unknown(_) => ActionResult::Failed(UNKNOWN_COMMAND_MSG.to_string()),
        }
    }
}
