//! Describes how a chord is played back: which samples the instruments load and when each note of
//! a strum starts.
//!
//! Nothing in this module produces sound. It computes the schedule a sampler should follow, so the
//! audio layer only has to trigger each event at its onset.

use serde::Serialize;

use crate::data::{Chord, Instrument};

/// The default delay in seconds between the onsets of successive notes of a strum.
pub const DEFAULT_STRUM_STAGGER: f64 = 0.05;

/// The default number of seconds each note of a strum is held.
pub const DEFAULT_SUSTAIN: f64 = 2.0;

/// The pitches for which every instrument has a recorded sample, along with the name of the file
/// containing it. The sampler interpolates all other pitches from the nearest anchor.
const SAMPLE_ANCHORS: [(&str, &str); 12] = [
    ("A2", "A2.mp3"),
    ("C3", "C3.mp3"),
    ("D#3", "Eb3.mp3"),
    ("F#3", "Gb3.mp3"),
    ("A3", "A3.mp3"),
    ("C4", "C4.mp3"),
    ("D#4", "Eb4.mp3"),
    ("F#4", "Gb4.mp3"),
    ("A4", "A4.mp3"),
    ("C5", "C5.mp3"),
    ("D#5", "Eb5.mp3"),
    ("F#5", "Gb5.mp3"),
];

impl Instrument {
    /// Returns the name of the instrument shown to the student.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Instrument::Acoustic => "Acoustic Guitar",
            Instrument::ElectricClean => "Electric Guitar",
            Instrument::Piano => "Piano",
        }
    }

    /// Returns the URL of the directory containing the samples of the instrument.
    #[must_use]
    pub fn base_url(self) -> &'static str {
        match self {
            Instrument::Acoustic => {
                "https://gleitz.github.io/midi-js-soundfonts/FluidR3_GM/acoustic_guitar_nylon-mp3/"
            }
            Instrument::ElectricClean => {
                "https://gleitz.github.io/midi-js-soundfonts/FluidR3_GM/electric_guitar_clean-mp3/"
            }
            Instrument::Piano => {
                "https://gleitz.github.io/midi-js-soundfonts/FluidR3_GM/acoustic_grand_piano-mp3/"
            }
        }
    }

    /// Returns the pairs of pitch labels and file names of the samples the instrument loads.
    #[must_use]
    pub fn samples(self) -> &'static [(&'static str, &'static str)] {
        &SAMPLE_ANCHORS
    }

    /// Returns the full URL of the sample recorded at the given pitch, if there is one.
    #[must_use]
    pub fn sample_url(self, pitch: &str) -> Option<String> {
        self.samples()
            .iter()
            .find(|(anchor, _)| *anchor == pitch)
            .map(|(_, file)| format!("{}{}", self.base_url(), file))
    }
}

/// A single note of a strum.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StrumEvent {
    /// The pitch label of the note, for example `E3`.
    pub pitch: String,

    /// The time in seconds from the start of the strum at which the note starts.
    pub onset: f64,

    /// The number of seconds the note is held.
    pub duration: f64,
}

/// Returns the events that strum the chord from its lowest to its highest note.
#[must_use]
pub fn strum(chord: &Chord, stagger: f64, sustain: f64) -> Vec<StrumEvent> {
    chord
        .voicing
        .iter()
        .enumerate()
        .map(|(index, note)| StrumEvent {
            pitch: note.pitch(),
            onset: index as f64 * stagger,
            duration: sustain,
        })
        .collect()
}

/// Returns the number of seconds after which a strum of the chord is considered finished.
#[must_use]
pub fn strum_length(chord: &Chord, stagger: f64, sustain: f64) -> f64 {
    sustain + stagger * chord.voicing.len() as f64
}
