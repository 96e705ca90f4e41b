//! End-to-end tests to verify that a practice session behaves as the student expects.

use anyhow::Result;
use chord_trainer::{
    DifficultyTier, Instrument, PracticeOptions, PracticeSession, SessionError,
    data::PracticeOptionsBuilder, generate,
    practice_session::TickOutcome,
};
use rand::{SeedableRng, rngs::StdRng};
use std::collections::HashSet;

/// Verifies that a session run from JSON options draws only chords from the tier's pool.
#[test]
fn session_from_json() -> Result<()> {
    let options = PracticeOptions::from_json(
        r#"{"difficulty": "advanced", "time_per_chord": 5, "instrument": "piano", "seed": 11}"#,
    )?;
    assert_eq!(options.instrument, Instrument::Piano);

    let mut session = PracticeSession::seeded(options)?;
    let pool: HashSet<String> = generate(DifficultyTier::Advanced)?
        .into_iter()
        .map(|chord| chord.name)
        .collect();
    for _ in 0..50 {
        assert!(pool.contains(&session.current_chord().name));
        session.skip();
    }
    assert_eq!(session.total(), 51);
    assert_eq!(session.score(), 0);
    Ok(())
}

/// Simulates a student who gets every other chord right while letting the rest time out.
#[test]
fn simulated_practice() -> Result<()> {
    let options = PracticeOptionsBuilder::default()
        .difficulty(DifficultyTier::Beginner)
        .time_per_chord(2)
        .build()?;
    let mut session = PracticeSession::new(options, StdRng::seed_from_u64(2024))?;

    for round in 0..10 {
        if round % 2 == 0 {
            session.mark_correct();
        } else {
            assert_eq!(session.tick(), TickOutcome::Counting(1));
            assert_eq!(session.tick(), TickOutcome::Counting(0));
            assert_eq!(session.tick(), TickOutcome::Advanced);
        }
        assert!(session.score() <= session.total());
    }
    assert_eq!(session.score(), 5);
    assert_eq!(session.total(), 11);
    Ok(())
}

/// Verifies that a session can be driven with a custom pool.
#[test]
fn custom_pool() -> Result<()> {
    let pool = vec![chord_trainer::build_chord_str("E", "7#9", 3, 0)?];
    let mut session = PracticeSession::with_pool(
        PracticeOptions::default(),
        pool,
        StdRng::seed_from_u64(0),
    )?;
    assert_eq!(session.current_chord().name, "E7#9");
    assert_eq!(session.skip().name, "E7#9");

    let events = session.strum();
    assert_eq!(events.len(), 5);
    assert_eq!(events[0].pitch, "D3");
    Ok(())
}

/// Verifies that a session cannot start without chords.
#[test]
fn empty_pool() {
    let result = PracticeSession::with_pool(
        PracticeOptions::default(),
        vec![],
        StdRng::seed_from_u64(0),
    );
    assert!(matches!(
        result,
        Err(SessionError::EmptyPool(DifficultyTier::Beginner))
    ));
}
