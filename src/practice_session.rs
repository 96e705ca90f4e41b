//! Drives a practice session over the chord pool of a difficulty tier.
//!
//! The session shows one chord at a time, drawn uniformly at random from the pool. The student has
//! a fixed number of seconds per chord. They can mark the chord as played correctly, skip it, ask
//! to see its notes, or strum it to compare it with what they played. When the countdown runs out
//! the session moves to the next chord on its own.
//!
//! The session owns its random number generator, so tests and replays can inject a seeded one.

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;

use crate::{
    curriculum,
    data::{Chord, PracticeOptions, music::notes::Note},
    error::SessionError,
    playback::{self, StrumEvent},
};

/// The result of advancing the countdown by one second.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The countdown is still running, with the given number of seconds left.
    Counting(u32),

    /// The countdown had already run out and the session moved to the next chord.
    Advanced,
}

/// A practice session over a pool of chords.
pub struct PracticeSession<R: Rng> {
    /// The options with which the session was started.
    options: PracticeOptions,

    /// The chords from which the current chord is drawn.
    pool: Vec<Chord>,

    /// The generator used to draw chords from the pool.
    rng: R,

    /// The index in the pool of the chord being practiced.
    current: usize,

    /// The number of chords the student marked as played correctly.
    score: u32,

    /// The number of chords presented to the student, including the current one.
    total: u32,

    /// The number of seconds left to play the current chord.
    time_remaining: u32,

    /// Whether the notes of the current chord are shown.
    show_notes: bool,
}

impl PracticeSession<StdRng> {
    /// Starts a session whose generator is seeded from the options, or from the operating system if
    /// the options have no seed.
    pub fn seeded(options: PracticeOptions) -> Result<Self, SessionError> {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(options, rng)
    }
}

impl<R: Rng> PracticeSession<R> {
    /// Starts a session with the pool of the tier named in the options and draws the first chord.
    pub fn new(options: PracticeOptions, rng: R) -> Result<Self, SessionError> {
        options.validate()?;
        let pool = curriculum::generate(options.difficulty)?;
        Self::with_pool(options, pool, rng)
    }

    /// Starts a session with the given pool instead of the pool of the tier in the options.
    pub fn with_pool(
        options: PracticeOptions,
        pool: Vec<Chord>,
        rng: R,
    ) -> Result<Self, SessionError> {
        options.validate()?;
        if pool.is_empty() {
            return Err(SessionError::EmptyPool(options.difficulty));
        }

        let mut session = PracticeSession {
            time_remaining: options.time_per_chord,
            options,
            pool,
            rng,
            current: 0,
            score: 0,
            total: 0,
            show_notes: false,
        };
        session.next_chord();
        Ok(session)
    }

    /// Returns the chord being practiced.
    #[must_use]
    pub fn current_chord(&self) -> &Chord {
        &self.pool[self.current]
    }

    /// Returns the pool from which chords are drawn.
    #[must_use]
    pub fn pool(&self) -> &[Chord] {
        &self.pool
    }

    /// Draws the next chord from the pool and restarts the countdown.
    pub fn next_chord(&mut self) -> &Chord {
        self.current = self.rng.random_range(0..self.pool.len());
        self.time_remaining = self.options.time_per_chord;
        self.total += 1;
        debug!(
            chord = %self.pool[self.current].name,
            total = self.total,
            "presenting chord"
        );
        self.current_chord()
    }

    /// Records the current chord as played correctly and moves to the next one.
    pub fn mark_correct(&mut self) -> &Chord {
        self.score += 1;
        self.next_chord()
    }

    /// Moves to the next chord without changing the score.
    pub fn skip(&mut self) -> &Chord {
        self.next_chord()
    }

    /// Advances the countdown by one second. Once the countdown has reached zero, the next tick
    /// moves to the next chord.
    pub fn tick(&mut self) -> TickOutcome {
        if self.time_remaining > 0 {
            self.time_remaining -= 1;
            TickOutcome::Counting(self.time_remaining)
        } else {
            self.next_chord();
            TickOutcome::Advanced
        }
    }

    /// Toggles whether the notes of the current chord are shown and returns the new state.
    pub fn toggle_notes(&mut self) -> bool {
        self.show_notes = !self.show_notes;
        self.show_notes
    }

    /// Returns the notes of the current chord in formula order if they are being shown.
    #[must_use]
    pub fn shown_notes(&self) -> Option<Vec<Note>> {
        self.show_notes.then(|| self.current_chord().note_names())
    }

    /// Returns the strum of the current chord using the timing in the options.
    #[must_use]
    pub fn strum(&self) -> Vec<StrumEvent> {
        playback::strum(
            self.current_chord(),
            self.options.strum_stagger,
            self.options.sustain,
        )
    }

    /// Returns the number of chords marked as played correctly.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns the number of chords presented so far, including the current one.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Returns the number of seconds left to play the current chord.
    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    /// Returns the fraction of the time per chord that is left, between zero and one.
    #[must_use]
    pub fn progress(&self) -> f64 {
        f64::from(self.time_remaining) / f64::from(self.options.time_per_chord)
    }

    /// Returns the options with which the session was started.
    #[must_use]
    pub fn options(&self) -> &PracticeOptions {
        &self.options
    }

    /// Clears the score, hides the notes, and starts over with a new chord from the same pool.
    pub fn reset(&mut self) {
        self.score = 0;
        self.total = 0;
        self.show_notes = false;
        self.next_chord();
    }
}
