//! Whole-session scenarios driven through the game loop

use lab_core::action::commands::parse_command;
use lab_core::action::movement::LOCKED_DOOR_MSG;
use lab_core::action::puzzle::{CORRECT_MSG, DEFENCE_MSG, NO_PUZZLE_MSG};
use lab_core::action::trap::{TRAP_DODGED_MSG, TRAP_FATAL_MSG, TRAP_SPRUNG_MSG};
use lab_core::action::treasure::VICTORY_MSG;
use lab_core::{
    BRONZE_BOX, FAREWELL_MSG, GOLD_COIN, GameLoop, GameLoopResult, GameOptions, GameState,
    INTERRUPTED_MSG, RUSTY_KEY, START_ROOM, ScriptedConsole, TORCH, TRAP_PUZZLE_REWARD, TRAP_ROOM,
    TREASURE_CHEST, TREASURE_KEY, TREASURE_ROOM, World,
};

// ============================================================================
// Helpers
// ============================================================================

fn new_game() -> GameLoop {
    GameLoop::new(GameState::new(), World::labyrinth())
}

/// Run `lines` as top-level commands; `answers` feed any nested prompts
fn play(game: &mut GameLoop, lines: &[&str], answers: &[&str]) -> (GameLoopResult, ScriptedConsole) {
    let mut console = ScriptedConsole::new(answers.iter().copied());
    let mut result = GameLoopResult::Continue;
    for line in lines {
        if let Some(command) = parse_command(line) {
            result = game.tick(command, &mut console);
        }
    }
    (result, console)
}

fn quiet() -> GameOptions {
    GameOptions {
        welcome: false,
        ..GameOptions::default()
    }
}

// ============================================================================
// Winning
// ============================================================================

#[test]
fn test_locked_door_then_key_then_victory() {
    let mut game = new_game();

    let (_, console) = play(&mut game, &["north", "north"], &[]);
    assert!(console.saw(LOCKED_DOOR_MSG));
    assert_eq!(game.state().current_room, "hall");
    assert_eq!(game.state().steps_taken, 1);

    play(
        &mut game,
        &["west", "north", "take bronze box", "use bronze box"],
        &[],
    );
    assert!(game.state().has_item(RUSTY_KEY));
    assert!(game.state().has_item(BRONZE_BOX));

    play(&mut game, &["south", "east", "north"], &[]);
    assert_eq!(game.state().current_room, TREASURE_ROOM);
    assert_eq!(game.state().steps_taken, 6);

    let (result, console) = play(&mut game, &["use treasure chest"], &[]);
    assert_eq!(result, GameLoopResult::PlayerWon);
    assert!(console.saw(VICTORY_MSG));
    assert!(game.state().game_over);
    assert!(
        !game
            .world()
            .room(TREASURE_ROOM)
            .is_some_and(|r| r.has_item(TREASURE_CHEST))
    );
    assert_eq!(game.outcome(), Some(&GameLoopResult::PlayerWon));
}

#[test]
fn test_solve_in_treasure_room_asks_for_code() {
    let mut game = new_game();
    game.state_mut().current_room = TREASURE_ROOM.into();

    let (result, console) = play(&mut game, &["solve"], &["да", "10"]);
    assert_eq!(result, GameLoopResult::PlayerWon);
    assert!(console.saw("Ввести код?"));
}

// ============================================================================
// Puzzles
// ============================================================================

#[test]
fn test_puzzle_solved_once_with_synonym() {
    let mut game = new_game();
    let (_, console) = play(&mut game, &["north", "solve", "solve", "look"], &["десять"]);

    assert!(console.saw(CORRECT_MSG));
    assert!(console.saw(NO_PUZZLE_MSG));
    let coins = game
        .state()
        .inventory
        .iter()
        .filter(|i| *i == GOLD_COIN)
        .count();
    assert_eq!(coins, 1);
    let hall = game.world().room("hall").expect("hall exists");
    assert!(hall.active_puzzle().is_none());
}

#[test]
fn test_wrong_answer_in_trap_room_springs_trap() {
    let mut game = new_game();
    // Step 1: pseudo_random(1, 10) == 9, the empty-handed player survives
    let (result, console) = play(&mut game, &["east", "solve"], &["не знаю"]);
    assert_eq!(result, GameLoopResult::Continue);
    assert!(console.saw(DEFENCE_MSG));
    assert!(console.saw(TRAP_SPRUNG_MSG));
    assert!(console.saw(TRAP_DODGED_MSG));
    assert!(!game.state().game_over);

    // The puzzle is still there and pays its own reward item
    let (_, console) = play(&mut game, &["solve"], &["шаг шаг шаг"]);
    assert!(console.saw(CORRECT_MSG));
    assert!(game.state().has_item(TRAP_PUZZLE_REWARD));
    assert!(!game.state().has_item(TREASURE_KEY));
}

#[test]
fn test_trap_puzzle_reward_is_carried_but_not_usable() {
    let mut game = new_game();
    let (_, console) = play(
        &mut game,
        &["east", "solve", "inventory", "use treasure_key"],
        &["шаг шаг шаг"],
    );
    assert!(console.saw("Инвентарь: treasure_key"));
    assert!(console.saw("Вы не знаете, как использовать treasure_key."));
}

#[test]
fn test_wrong_answer_elsewhere_is_harmless() {
    let mut game = new_game();
    let (_, console) = play(&mut game, &["north", "solve"], &["11"]);
    assert!(!console.saw(TRAP_SPRUNG_MSG));
    assert!(game.state().inventory.is_empty());
    assert!(game.world().room("hall").is_some_and(|r| r.active_puzzle().is_some()));
}

// ============================================================================
// Traps and events
// ============================================================================

#[test]
fn test_trap_event_kills_empty_handed_player() {
    // Step 61 draws an event (0) of the trap kind (2) and a fatal roll (0)
    let mut game = new_game();
    game.state_mut().steps_taken = 60;

    let (result, console) = play(&mut game, &["east"], &[]);
    assert!(matches!(result, GameLoopResult::PlayerDied(_)));
    assert!(console.saw(TRAP_FATAL_MSG));
    assert!(game.state().game_over);
    assert_eq!(game.state().current_room, TRAP_ROOM);
}

#[test]
fn test_torch_prevents_trap_event() {
    let mut game = new_game();
    game.state_mut().steps_taken = 60;

    let (result, console) = play(&mut game, &["take torch", "east"], &[]);
    assert_eq!(result, GameLoopResult::Continue);
    assert!(!console.saw(TRAP_SPRUNG_MSG));
    assert_eq!(game.state().inventory, vec![TORCH.to_string()]);
}

#[test]
fn test_trap_event_costs_an_item() {
    let mut game = new_game();
    game.state_mut().steps_taken = 60;
    game.state_mut().add_to_inventory("sword");
    game.state_mut().add_to_inventory("coin");

    let (result, _) = play(&mut game, &["east"], &[]);
    assert_eq!(result, GameLoopResult::Continue);
    // pseudo_random(61, 2) == 0
    assert_eq!(game.state().inventory, vec!["coin".to_string()]);
}

#[test]
fn test_rustle_after_second_step() {
    // pseudo_random(2, 10) == 0 and pseudo_random(3, 3) == 1
    let mut game = new_game();
    let (_, console) = play(&mut game, &["north", "west"], &[]);
    assert!(console.saw("шорох"));

    // The room description comes before the event
    let header = console.output.iter().position(|l| l == "== LIBRARY ==");
    let rustle = console.output.iter().position(|l| l.contains("шорох"));
    assert!(header < rustle);
}

// ============================================================================
// Steps and blocked moves
// ============================================================================

#[test]
fn test_blocked_moves_do_not_count() {
    let mut game = new_game();
    play(&mut game, &["west", "go nowhere", "north", "north", "south"], &[]);
    assert_eq!(game.state().current_room, START_ROOM);
    assert_eq!(game.state().steps_taken, 2);
}

// ============================================================================
// Quitting and interruption
// ============================================================================

#[test]
fn test_interrupt_inside_puzzle_prompt_quits() {
    let mut game = new_game();
    let mut console = ScriptedConsole::new(["north", "solve"]);
    let result = game.run(&mut console, &quiet());

    assert_eq!(result, GameLoopResult::PlayerQuit);
    assert!(game.state().game_over);
    let interrupted = console.output.iter().position(|l| l == INTERRUPTED_MSG);
    let farewell = console.output.iter().position(|l| l == FAREWELL_MSG);
    assert!(interrupted.is_some());
    assert!(interrupted < farewell);
    // Only one farewell
    assert_eq!(console.output.iter().filter(|l| *l == FAREWELL_MSG).count(), 1);
}

#[test]
fn test_quit_command_through_run() {
    let mut game = new_game();
    let mut console = ScriptedConsole::new(["look", "q", "north"]);
    let result = game.run(&mut console, &quiet());

    assert_eq!(result, GameLoopResult::PlayerQuit);
    assert!(!console.saw(INTERRUPTED_MSG));
    assert_eq!(console.remaining(), 1);
    assert_eq!(game.state().current_room, START_ROOM);
}

#[test]
fn test_run_to_victory() {
    let mut game = new_game();
    let mut console = ScriptedConsole::new([
        "north", "west", "north", "take sword", "take bronze box", "use bronze box", "i",
        "south", "east", "north", "use treasure_chest", "look",
    ]);
    let result = game.run(&mut console, &GameOptions::default());

    assert_eq!(result, GameLoopResult::PlayerWon);
    assert!(console.saw("Инвентарь: sword, bronze box, rusty key"));
    // "look" after the win is never read
    assert_eq!(console.remaining(), 1);
}
