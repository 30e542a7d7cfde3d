//! Room puzzles

use log::info;

use super::trap::{self, TrapOutcome};
use crate::action::ActionResult;
use crate::console::Console;
use crate::consts::{GOLD_COIN, TRAP_PUZZLE_REWARD, TRAP_ROOM};
use crate::gameloop::{GameState, INTERRUPTED_MSG};
use crate::world::World;

pub const NO_PUZZLE_MSG: &str = "Загадок здесь нет.";
pub const ANSWER_PROMPT: &str = "Ваш ответ: ";
pub const CORRECT_MSG: &str = "Правильно! Загадка решена!";
pub const WRONG_MSG: &str = "Неверно. Попробуйте снова.";
pub const DEFENCE_MSG: &str = "Неправильный ответ активировал защитный механизм!";

/// Canonical answer -> every answer accepted for it
const ALTERNATIVE_ANSWERS: &[(&str, &[&str])] = &[
    ("10", &["10", "десять"]),
    ("шаг шаг шаг", &["шаг шаг шаг"]),
    ("резонанс", &["резонанс", "огонь", "пламя"]),
];

/// Room id -> (reward item, reward message)
const ROOM_REWARDS: &[(&str, (&str, &str))] = &[
    ("hall", (GOLD_COIN, "За решение загадки вы получили монету!")),
    (TRAP_ROOM, (TRAP_PUZZLE_REWARD, "За решение загадки вы получили ключ от сокровищницы!")),
    ("library", ("ancient scroll", "За решение загадки вы получили древний свиток!")),
];

const DEFAULT_REWARD: (&str, &str) = (GOLD_COIN, "За решение загадки вы получили монету!");

/// Whether `reply` solves a puzzle whose canonical answer is `answer`.
///
/// Both sides are compared in lowercase. Answers without a synonym list
/// accept only themselves.
pub fn is_accepted(answer: &str, reply: &str) -> bool {
    let answer = answer.to_lowercase();
    let reply = reply.trim().to_lowercase();
    match ALTERNATIVE_ANSWERS.iter().find(|(canonical, _)| *canonical == answer) {
        Some((_, accepted)) => accepted.contains(&reply.as_str()),
        None => reply == answer,
    }
}

/// Reward for solving the puzzle in `room`
pub fn reward_for(room: &str) -> (&'static str, &'static str) {
    ROOM_REWARDS
        .iter()
        .find(|(id, _)| *id == room)
        .map(|(_, reward)| *reward)
        .unwrap_or(DEFAULT_REWARD)
}

/// Ask the current room's puzzle and check the player's answer.
///
/// A right answer solves it for good and pays the room's reward. A wrong
/// answer in the trap room springs the trap.
pub fn solve_puzzle(
    state: &mut GameState,
    world: &mut World,
    console: &mut dyn Console,
) -> ActionResult {
    let (question, answer) = match world
        .room(&state.current_room)
        .and_then(|room| room.active_puzzle())
    {
        Some(puzzle) => (puzzle.question.clone(), puzzle.answer.clone()),
        None => return ActionResult::Failed(NO_PUZZLE_MSG.to_string()),
    };

    state.message(question);
    let Some(reply) = state.ask(console, ANSWER_PROMPT) else {
        state.message(INTERRUPTED_MSG);
        return ActionResult::Quit;
    };

    if is_accepted(&answer, &reply) {
        state.message(CORRECT_MSG);
        if let Some(puzzle) = world
            .room_mut(&state.current_room)
            .and_then(|room| room.puzzle.as_mut())
        {
            puzzle.solved = true;
        }
        let (item, reward_msg) = reward_for(&state.current_room);
        info!("puzzle in '{}' solved, reward '{item}'", state.current_room);
        state.add_to_inventory(item);
        state.message(reward_msg);
        return ActionResult::Success;
    }

    state.message(WRONG_MSG);
    if !state.in_room(TRAP_ROOM) {
        return ActionResult::NoChange;
    }

    state.message(DEFENCE_MSG);
    match trap::trigger_trap(state) {
        TrapOutcome::Killed => ActionResult::Died("killed by a trap".to_string()),
        TrapOutcome::LostItem(_) => ActionResult::Success,
        TrapOutcome::Dodged => ActionResult::NoChange,
    }
}
