//! Shared fixtures for unit tests.

use crate::board::Board;
use crate::dice::FixedSequence;
use crate::game::Game;
use crate::player::Player;
use crate::rules::RuleSet;

/// Red (home 1) and Blue (home 10) on an 18/3 board with basic rules.
pub(crate) fn two_player_game(rolls: Vec<u32>) -> Game<FixedSequence> {
    two_player_game_with(RuleSet::basic(), rolls)
}

/// Red (home 1) and Blue (home 10) on an 18/3 board.
pub(crate) fn two_player_game_with(rules: RuleSet, rolls: Vec<u32>) -> Game<FixedSequence> {
    Game::new(
        Board::new(18, 3).unwrap(),
        vec![
            Player::new("Red", 1, "R").unwrap(),
            Player::new("Blue", 10, "B").unwrap(),
        ],
        rules.build(),
        FixedSequence::new(rolls).unwrap(),
    )
    .unwrap()
}
