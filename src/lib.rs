//! A chord engine and practice driver for learning chords by ear and by notes.
//!
//! Given a root, a chord quality, an octave, and an inversion, the engine spells the notes of the
//! chord, computes their equal-tempered frequencies, and orders them both the way they are named
//! (root, third, fifth, ...) and the way they sound (lowest to highest). On top of the engine, a
//! fixed curriculum of five difficulty tiers produces the pool of chords a student practices, from
//! the open chords every guitarist learns first to altered dominants and extended jazz voicings.
//!
//! A practice session draws chords from the pool at random, keeps the score, runs the countdown
//! for each chord, and computes the strum schedule an audio layer should follow to play it.
//!
//! All the music theory is pure computation over constant tables. Nothing is persisted and no
//! function blocks, so every part of the engine can be used from any thread.

pub mod chord_builder;
pub mod chord_namer;
pub mod curriculum;
pub mod data;
pub mod error;
pub mod playback;
pub mod practice_session;

pub use chord_builder::{build_chord, build_chord_str, build_slash_chord, build_slash_chord_str};
pub use chord_namer::{format_chord_name, format_chord_name_str};
pub use curriculum::{generate, generate_by_name};
pub use data::{Chord, DifficultyTier, Instrument, PitchedNote, PracticeOptions};
pub use error::{OptionsError, SessionError, TheoryError};
pub use practice_session::PracticeSession;
