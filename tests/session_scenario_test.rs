//! End-to-end games driven through the public session API.

use std::time::Duration;

use burger_stacker::game::{
    Color, GameOverReport, MatchOutcome, Phase, RoundGenerator, Session, GAME_DURATION,
    MAX_STACK_LEN,
};
use burger_stacker::store::{self, HighScoreStore, JsonFileStore, MemoryStore};

fn assert_valid_target(session: &Session) {
    let target = session.target();
    assert!((1..=MAX_STACK_LEN).contains(&target.len()));
    assert!(target.layers().iter().all(|c| Color::ALL.contains(c)));
}

/// Copy the current target into the player stack and submit it.
fn play_perfect_round(session: &mut Session) -> u32 {
    let layers = session.target().layers().to_vec();
    for color in layers {
        session.submit_color(color);
    }
    match session.submit_attempt() {
        Some(MatchOutcome::Matched { points }) => points,
        other => panic!("expected a match, got {other:?}"),
    }
}

/// A color different from `color`.
fn other(color: Color) -> Color {
    if color == Color::Red {
        Color::Green
    } else {
        Color::Red
    }
}

#[test]
fn test_full_game_then_reset() {
    let mut session = Session::new(RoundGenerator::from_seed(2024), GAME_DURATION, 0);
    assert_eq!(session.phase(), Phase::Playing);
    assert_eq!(session.score(), 0);
    assert_eq!(session.remaining(), Duration::from_secs(60));
    assert_valid_target(&session);

    // One frame at a time, 60 fps for 60 seconds
    let mut report = None;
    for _ in 0..3600 {
        if let Some(r) = session.tick(Duration::from_secs_f64(1.0 / 60.0)) {
            report = Some(r);
        }
    }
    // Whatever float drift remains is flushed by one more tick
    if report.is_none() {
        report = session.tick(Duration::from_millis(1));
    }

    assert_eq!(
        report,
        Some(GameOverReport {
            final_score: 0,
            new_high_score: false
        })
    );
    assert_eq!(session.remaining(), Duration::ZERO);
    assert_eq!(session.phase(), Phase::GameOver);

    session.reset();
    assert_eq!(session.phase(), Phase::Playing);
    assert_eq!(session.score(), 0);
    assert_eq!(session.remaining(), Duration::from_secs(60));
    assert!(session.player().is_empty());
    assert_valid_target(&session);
}

#[test]
fn test_mismatch_keeps_target() {
    let mut session = Session::new(RoundGenerator::from_seed(5), GAME_DURATION, 0);
    let target = session.target().clone();

    // Same height, wrong bottom layer
    let mut attempt = target.layers().to_vec();
    attempt[0] = other(attempt[0]);
    for color in attempt {
        session.submit_color(color);
    }

    assert_eq!(session.submit_attempt(), Some(MatchOutcome::Mismatched));
    assert_eq!(session.target(), &target);
    assert_eq!(session.score(), 0);
    assert!(session.player().is_empty());
}

#[test]
fn test_score_accumulates_across_rounds() {
    let mut session = Session::new(RoundGenerator::from_seed(8), GAME_DURATION, 0);
    let mut expected = 0;
    for _ in 0..10 {
        let height = session.target().len() as u32;
        assert_eq!(play_perfect_round(&mut session), height);
        expected += height;
        assert_valid_target(&session);
    }
    assert_eq!(session.score(), expected);
}

#[test]
fn test_high_score_carries_across_games() {
    let mut store = MemoryStore::new(2);
    let mut session = Session::new(
        RoundGenerator::from_seed(13),
        Duration::from_secs(10),
        store::load_or_zero(&store),
    );

    // First game beats the stored score
    let mut score = 0;
    while score <= 2 {
        score += play_perfect_round(&mut session);
    }
    let report = session.tick(Duration::from_secs(10)).unwrap();
    assert!(report.new_high_score);
    store.save(report.final_score).unwrap();
    assert_eq!(session.high_score(), score);

    // Second game scores nothing; the high score stays
    session.reset();
    let report = session.tick(Duration::from_secs(10)).unwrap();
    assert!(!report.new_high_score);
    assert_eq!(session.high_score(), score);
    assert_eq!(store.load().unwrap(), score);
    assert_eq!(store.saves(), 1);
}

#[test]
fn test_high_score_survives_restart_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("high_score.json");

    let mut store = JsonFileStore::new(&path);
    let mut session = Session::new(
        RoundGenerator::from_seed(21),
        GAME_DURATION,
        store::load_or_zero(&store),
    );
    let points = play_perfect_round(&mut session);
    let report = session.tick(GAME_DURATION).unwrap();
    assert!(report.new_high_score);
    store::save_or_warn(&mut store, report.final_score);

    let reopened = JsonFileStore::new(&path);
    assert_eq!(store::load_or_zero(&reopened), points);
}

#[test]
fn test_corrupt_high_score_file_starts_from_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("high_score.json");
    std::fs::write(&path, "{\"high_score\": \"lots\"}").unwrap();

    let store = JsonFileStore::new(&path);
    assert_eq!(store::load_or_zero(&store), 0);
}
