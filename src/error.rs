//! Contains the errors returned by the chord engine and the practice session.

use thiserror::Error;

use crate::data::DifficultyTier;

/// An error returned when resolving notes, frequencies, or chords.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum TheoryError {
    #[error("invalid pitch class {0}")]
    InvalidPitchClass(String),

    #[error("octave index {0} is outside the range 0..=5")]
    InvalidOctaveIndex(u8),

    #[error("unknown chord quality {0}")]
    UnknownChordQuality(String),
}

/// An error returned when reading or validating the practice options.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum OptionsError {
    #[error("cannot parse practice options: {0}")]
    Parse(#[source] anyhow::Error),

    #[error("invalid practice options: {0}")]
    Invalid(String),
}

/// An error returned when dealing with a practice session.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum SessionError {
    #[error("cannot build chord for the practice pool: {0}")]
    BuildChord(#[from] TheoryError),

    #[error("the chord pool for difficulty {0} is empty")]
    EmptyPool(DifficultyTier),

    #[error("cannot start a session: {0}")]
    InvalidOptions(#[from] OptionsError),
}
