//! Game constants

/// Room the player starts in
pub const START_ROOM: &str = "entrance";
/// Room holding the chest; its door needs `RUSTY_KEY`
pub const TREASURE_ROOM: &str = "treasure_room";
/// Room whose floor plates can spring the trap
pub const TRAP_ROOM: &str = "trap_room";

pub const TORCH: &str = "torch";
pub const SWORD: &str = "sword";
pub const BRONZE_BOX: &str = "bronze box";
pub const RUSTY_KEY: &str = "rusty key";
/// Opens the chest without a code
pub const TREASURE_KEY: &str = "treasure key";
/// Paid for the trap room puzzle; a different item from `TREASURE_KEY`
pub const TRAP_PUZZLE_REWARD: &str = "treasure_key";
pub const TREASURE_CHEST: &str = "treasure chest";
pub const COIN: &str = "coin";
pub const GOLD_COIN: &str = "gold coin";

/// An event happens when the draw lands on 0 (1 in 10)
pub const EVENT_PROBABILITY_MODULO: usize = 10;
pub const EVENT_TYPES_COUNT: usize = 3;
pub const EVENT_TYPE_FIND_COIN: usize = 0;
pub const EVENT_TYPE_HEAR_RUSTLE: usize = 1;
pub const EVENT_TYPE_TRIGGER_TRAP: usize = 2;

/// Range of the damage roll when the trap catches an empty-handed player
pub const DAMAGE_ROLL_MODULO: usize = 10;
/// Rolls below this are fatal (3 in 10)
pub const FATAL_DAMAGE_THRESHOLD: usize = 3;

/// Cardinal directions accepted as one-word movement commands
pub const DIRECTIONS: [&str; 4] = ["north", "south", "east", "west"];

/// Default input prompt
pub const DEFAULT_PROMPT: &str = "> ";
