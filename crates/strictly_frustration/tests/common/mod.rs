//! Shared helpers for integration tests.

#![allow(dead_code)]

use strictly_frustration::{BaseRule, Board, FixedSequence, Game, MovementRule, Player, RuleSet};
use tracing_subscriber::{EnvFilter, fmt};

/// Initializes test logging.
///
/// Level precedence: `TEST_LOG`, then `RUST_LOG`, then `"warn"`. Safe to
/// call from every test.
pub fn init_logging() {
    let filter = std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

/// Red starts on square 1.
pub fn red() -> Player {
    Player::new("Red", 1, "R").unwrap()
}

/// Blue starts on square 10.
pub fn blue() -> Player {
    Player::new("Blue", 10, "B").unwrap()
}

/// The small board: 18 ring squares, 3 tail squares, end progress 20.
pub fn small_board() -> Board {
    Board::new(18, 3).unwrap()
}

/// Red and Blue on the small board with the given rule and rolls.
pub fn red_vs_blue(rule: impl MovementRule + 'static, rolls: Vec<u32>) -> Game<FixedSequence> {
    Game::builder()
        .board(small_board())
        .players([red(), blue()])
        .rule(rule)
        .dice(FixedSequence::new(rolls).unwrap())
        .build()
        .unwrap()
}

/// Red and Blue on the small board with basic rules.
pub fn basic_game(rolls: Vec<u32>) -> Game<FixedSequence> {
    red_vs_blue(BaseRule, rolls)
}

/// Red and Blue on the small board with a rule set.
pub fn game_with_rules(rules: RuleSet, rolls: Vec<u32>) -> Game<FixedSequence> {
    red_vs_blue(rules.build(), rolls)
}
