//! Defines the basic data structures used to describe chords, the difficulty tiers of the
//! curriculum, the instruments used for playback, and the options that control a practice session.

pub mod music;

use anyhow::{Context, Result};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::io::Read;
use strum::{Display, EnumIter, EnumString};

use crate::{data::music::notes::Note, error::OptionsError};

/// A note sounding at a concrete octave.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct PitchedNote {
    /// The spelling of the note, for example `Bb`.
    pub name: Note,

    /// The octave index in which the note sounds. Between 0 and 5, or 6 for a note of the highest
    /// octave raised by an inversion.
    pub octave: u8,

    /// The frequency of the note in Hz. Always equal to the value of the pitch table for the pitch
    /// class of `name` at `octave`.
    pub frequency: f64,
}

impl PitchedNote {
    /// Returns the label used to request the note from a sampler, for example `C3` or `Bb3`.
    #[must_use]
    pub fn pitch(&self) -> String {
        format!("{}{}", self.name, self.octave)
    }
}

/// A chord built from a root, a quality, an octave, and an inversion.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Chord {
    /// The chord symbol shown to the student, for example `Cmaj7` or `Am/C`.
    pub name: String,

    /// The notes of the chord in the order of the quality's formula (root, third, fifth, ...).
    /// This order is used to show the notes of the chord and is never changed by an inversion.
    pub formula_notes: Vec<PitchedNote>,

    /// The same notes sorted from the lowest to the highest frequency. This is the order in which
    /// the notes are played.
    pub voicing: Vec<PitchedNote>,
}

impl Chord {
    /// Returns the names of the notes in formula order.
    #[must_use]
    pub fn note_names(&self) -> Vec<Note> {
        self.formula_notes.iter().map(|note| note.name).collect()
    }

    /// Returns the pitch labels of the notes in voicing order.
    #[must_use]
    pub fn pitches(&self) -> Vec<String> {
        self.voicing.iter().map(PitchedNote::pitch).collect()
    }

    /// Returns the lowest note of the voicing.
    #[must_use]
    pub fn bass(&self) -> Option<&PitchedNote> {
        self.voicing.first()
    }
}

/// The skill tiers of the curriculum. Each tier has a fixed recipe of roots and chord qualities.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
    Serialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum DifficultyTier {
    #[default]
    Beginner,
    Novice,
    Intermediate,
    Advanced,
    Jazz,
}

impl DifficultyTier {
    /// Returns the name of the tier shown to the student.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            DifficultyTier::Beginner => "Beginner",
            DifficultyTier::Novice => "Novice",
            DifficultyTier::Intermediate => "Intermediate",
            DifficultyTier::Advanced => "Advanced",
            DifficultyTier::Jazz => "Jazz",
        }
    }

    /// Returns a short description of the chords included in the tier.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            DifficultyTier::Beginner => "Standard Open Chords",
            DifficultyTier::Novice => "All Triads & Dom 7ths",
            DifficultyTier::Intermediate => "Inversions & 7th chords",
            DifficultyTier::Advanced => "Diminished, 9ths, alterations",
            DifficultyTier::Jazz => "Complex extensions & voicings",
        }
    }
}

/// The instruments whose samples can be used to play the chords.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
    Serialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum Instrument {
    #[default]
    Acoustic,
    ElectricClean,
    Piano,
}

/// The shortest time in seconds the student can be given to play a chord.
pub const MIN_TIME_PER_CHORD: u32 = 1;

/// The longest time in seconds the student can be given to play a chord.
pub const MAX_TIME_PER_CHORD: u32 = 45;

/// The options used to start a practice session.
#[derive(Builder, Clone, Debug, PartialEq, Deserialize, Serialize)]
#[builder(default)]
#[serde(default, deny_unknown_fields)]
pub struct PracticeOptions {
    /// The tier from which the chords are drawn.
    pub difficulty: DifficultyTier,

    /// The number of seconds the student has to play each chord.
    pub time_per_chord: u32,

    /// The instrument used to play the chords.
    pub instrument: Instrument,

    /// The delay in seconds between the onsets of successive notes of a strum.
    pub strum_stagger: f64,

    /// The number of seconds each note of a strum is held.
    pub sustain: f64,

    /// The seed of the random number generator used to draw chords. A session without a seed is
    /// seeded from the operating system.
    pub seed: Option<u64>,
}

impl Default for PracticeOptions {
    /// Returns the default practice options.
    fn default() -> Self {
        PracticeOptions {
            difficulty: DifficultyTier::default(),
            time_per_chord: 10,
            instrument: Instrument::default(),
            strum_stagger: 0.05,
            sustain: 2.0,
            seed: None,
        }
    }
}

impl PracticeOptions {
    /// Helper function to deserialize the options from a reader.
    fn from_reader_helper<R: Read>(reader: R) -> Result<PracticeOptions> {
        serde_json::from_reader(reader).context("cannot deserialize practice options from JSON")
    }

    /// Reads the options from a reader containing a JSON object and validates them. Missing fields
    /// take their default values.
    pub fn from_reader<R: Read>(reader: R) -> Result<PracticeOptions, OptionsError> {
        let options = Self::from_reader_helper(reader).map_err(OptionsError::Parse)?;
        options.validate()?;
        Ok(options)
    }

    /// Reads the options from a JSON string and validates them.
    pub fn from_json(json: &str) -> Result<PracticeOptions, OptionsError> {
        Self::from_reader(json.as_bytes())
    }

    /// Checks that the options describe a session that can be run.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !(MIN_TIME_PER_CHORD..=MAX_TIME_PER_CHORD).contains(&self.time_per_chord) {
            return Err(OptionsError::Invalid(format!(
                "time per chord must be between {MIN_TIME_PER_CHORD} and {MAX_TIME_PER_CHORD} \
                 seconds, got {}",
                self.time_per_chord
            )));
        }
        if !(self.strum_stagger >= 0.0 && self.strum_stagger.is_finite()) {
            return Err(OptionsError::Invalid(format!(
                "strum stagger must be a non-negative number of seconds, got {}",
                self.strum_stagger
            )));
        }
        if !(self.sustain > 0.0 && self.sustain.is_finite()) {
            return Err(OptionsError::Invalid(format!(
                "sustain must be a positive number of seconds, got {}",
                self.sustain
            )));
        }
        Ok(())
    }
}
