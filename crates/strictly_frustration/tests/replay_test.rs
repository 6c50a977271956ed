//! Tests for recording live games and replaying them exactly.

mod common;

use common::init_logging;
use strictly_frustration::{
    DecoratorOrder, DieKind, GameConfig, GameSave, RuleSet, SetupError, new_game, replay,
};

fn record_and_replay(config: GameConfig, limit: usize) {
    let mut live = new_game(&config).unwrap();
    let played = live.play_to_finish(Some(limit)).unwrap();
    assert_eq!(live.rolls().len(), played);

    let save = GameSave::capture(&config, &live);
    let mut again = replay(&save).unwrap();
    again.play_to_finish(Some(played)).unwrap();

    assert_eq!(again.record(), live.record());
    assert_eq!(again.phase(), live.phase());
    assert_eq!(again.players(), live.players());
}

#[test]
fn test_replay_basic_small_game() {
    init_logging();
    record_and_replay(GameConfig::small().with_seed(Some(1)), 1_000);
}

#[test]
fn test_replay_large_game_with_all_variants() {
    init_logging();
    let config = GameConfig::large()
        .with_seed(Some(2024))
        .with_die(DieKind::Single)
        .with_rules(RuleSet {
            exact_end: true,
            forfeit_on_hit: true,
            order: DecoratorOrder::ForfeitOnHitOutermost,
        });
    record_and_replay(config, 300);
}

#[test]
fn test_save_survives_json() {
    init_logging();
    let config = GameConfig::small().with_seed(Some(5));
    let mut live = new_game(&config).unwrap();
    live.play_to_finish(Some(10)).unwrap();

    let save = GameSave::capture(&config, &live);
    let json = serde_json::to_string(&save).unwrap();
    let restored: GameSave = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, save);

    let mut again = replay(&restored).unwrap();
    again.play_to_finish(Some(live.record().len())).unwrap();
    assert_eq!(again.record(), live.record());
}

#[test]
fn test_replay_without_rolls_fails() {
    init_logging();
    let config = GameConfig::small();
    let live = new_game(&config).unwrap();
    let save = GameSave::capture(&config, &live);
    assert!(matches!(replay(&save), Err(SetupError::NoRolls)));
}
