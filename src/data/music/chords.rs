//! Defines the chord qualities the engine knows how to build.
//!
//! Each quality carries its formula, the semitone offsets of its tones above the root in the order
//! they are named, and the suffix appended to the root in a chord symbol. Keeping both on the same
//! enum means a quality can never have a formula without a name or vice versa.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::TheoryError;

/// A chord quality, identified by the string shown in parentheses in the variant docs.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
    Serialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum ChordQuality {
    /// Major triad (`major`).
    #[strum(serialize = "major")]
    #[serde(rename = "major")]
    Major,

    /// Minor triad (`minor`).
    #[strum(serialize = "minor")]
    #[serde(rename = "minor")]
    Minor,

    /// Diminished triad (`diminished`).
    #[strum(serialize = "diminished")]
    #[serde(rename = "diminished")]
    Diminished,

    /// Augmented triad (`augmented`).
    #[strum(serialize = "augmented")]
    #[serde(rename = "augmented")]
    Augmented,

    /// Suspended second (`sus2`).
    #[strum(serialize = "sus2")]
    #[serde(rename = "sus2")]
    Sus2,

    /// Suspended fourth (`sus4`).
    #[strum(serialize = "sus4")]
    #[serde(rename = "sus4")]
    Sus4,

    /// Major seventh (`maj7`).
    #[strum(serialize = "maj7")]
    #[serde(rename = "maj7")]
    Major7,

    /// Minor seventh (`min7`).
    #[strum(serialize = "min7")]
    #[serde(rename = "min7")]
    Minor7,

    /// Dominant seventh (`7`).
    #[strum(serialize = "7")]
    #[serde(rename = "7")]
    Dominant7,

    /// Half-diminished seventh (`min7b5`).
    #[strum(serialize = "min7b5")]
    #[serde(rename = "min7b5")]
    HalfDiminished7,

    /// Diminished seventh (`dim7`).
    #[strum(serialize = "dim7")]
    #[serde(rename = "dim7")]
    Diminished7,

    /// Major seventh with a raised fifth (`maj7#5`).
    #[strum(serialize = "maj7#5")]
    #[serde(rename = "maj7#5")]
    Major7Sharp5,

    /// Major ninth (`maj9`).
    #[strum(serialize = "maj9")]
    #[serde(rename = "maj9")]
    Major9,

    /// Minor ninth (`min9`).
    #[strum(serialize = "min9")]
    #[serde(rename = "min9")]
    Minor9,

    /// Dominant ninth (`9`).
    #[strum(serialize = "9")]
    #[serde(rename = "9")]
    Dominant9,

    /// Dominant seventh with a raised ninth (`7#9`).
    #[strum(serialize = "7#9")]
    #[serde(rename = "7#9")]
    Dominant7Sharp9,

    /// Dominant seventh with a lowered ninth (`7b9`).
    #[strum(serialize = "7b9")]
    #[serde(rename = "7b9")]
    Dominant7Flat9,

    /// Major triad with an added ninth (`add9`).
    #[strum(serialize = "add9")]
    #[serde(rename = "add9")]
    Add9,

    /// Dominant eleventh (`11`).
    #[strum(serialize = "11")]
    #[serde(rename = "11")]
    Dominant11,

    /// Minor eleventh (`min11`).
    #[strum(serialize = "min11")]
    #[serde(rename = "min11")]
    Minor11,

    /// Major seventh with a raised eleventh (`maj7#11`).
    #[strum(serialize = "maj7#11")]
    #[serde(rename = "maj7#11")]
    Major7Sharp11,

    /// Dominant thirteenth (`13`).
    #[strum(serialize = "13")]
    #[serde(rename = "13")]
    Dominant13,

    /// Major thirteenth (`maj13`).
    #[strum(serialize = "maj13")]
    #[serde(rename = "maj13")]
    Major13,

    /// Altered dominant (`7alt`).
    #[strum(serialize = "7alt")]
    #[serde(rename = "7alt")]
    Altered,

    /// Dominant seventh with a raised fifth (`7#5`).
    #[strum(serialize = "7#5")]
    #[serde(rename = "7#5")]
    Dominant7Sharp5,

    /// Dominant seventh with a lowered fifth (`7b5`).
    #[strum(serialize = "7b5")]
    #[serde(rename = "7b5")]
    Dominant7Flat5,

    /// Dominant seventh with a raised ninth and a raised fifth (`7#9#5`).
    #[strum(serialize = "7#9#5")]
    #[serde(rename = "7#9#5")]
    Dominant7Sharp9Sharp5,
}

impl ChordQuality {
    /// Returns the identifier of the quality, for example `min7b5`.
    #[must_use]
    pub fn id(self) -> &'static str {
        self.into()
    }

    /// Returns the semitone offsets of the chord tones above the root. The first offset is always
    /// zero and the offsets never decrease.
    #[must_use]
    pub fn formula(self) -> &'static [u8] {
        match self {
            // Triads.
            ChordQuality::Major => &[0, 4, 7],
            ChordQuality::Minor => &[0, 3, 7],
            ChordQuality::Diminished => &[0, 3, 6],
            ChordQuality::Augmented => &[0, 4, 8],
            ChordQuality::Sus2 => &[0, 2, 7],
            ChordQuality::Sus4 => &[0, 5, 7],

            // Seventh chords.
            ChordQuality::Major7 => &[0, 4, 7, 11],
            ChordQuality::Minor7 => &[0, 3, 7, 10],
            ChordQuality::Dominant7 => &[0, 4, 7, 10],
            ChordQuality::HalfDiminished7 => &[0, 3, 6, 10],
            ChordQuality::Diminished7 => &[0, 3, 6, 9],
            ChordQuality::Major7Sharp5 => &[0, 4, 8, 11],

            // Extended chords.
            ChordQuality::Major9 => &[0, 4, 7, 11, 14],
            ChordQuality::Minor9 => &[0, 3, 7, 10, 14],
            ChordQuality::Dominant9 => &[0, 4, 7, 10, 14],
            ChordQuality::Dominant7Sharp9 => &[0, 4, 7, 10, 15],
            ChordQuality::Dominant7Flat9 => &[0, 4, 7, 10, 13],
            ChordQuality::Add9 => &[0, 4, 7, 14],
            ChordQuality::Dominant11 => &[0, 4, 7, 10, 14, 17],
            ChordQuality::Minor11 => &[0, 3, 7, 10, 14, 17],
            ChordQuality::Major7Sharp11 => &[0, 4, 7, 11, 18],
            ChordQuality::Dominant13 => &[0, 4, 7, 10, 14, 21],
            ChordQuality::Major13 => &[0, 4, 7, 11, 14, 21],

            // Altered chords.
            ChordQuality::Altered => &[0, 4, 10, 13, 15],
            ChordQuality::Dominant7Sharp5 => &[0, 4, 8, 10],
            ChordQuality::Dominant7Flat5 => &[0, 4, 6, 10],
            ChordQuality::Dominant7Sharp9Sharp5 => &[0, 4, 8, 10, 15],
        }
    }

    /// Returns the suffix appended to the root in the chord symbol. Major chords have no suffix.
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            ChordQuality::Major => "",
            ChordQuality::Minor => "m",
            ChordQuality::Diminished => "dim",
            ChordQuality::Augmented => "aug",
            ChordQuality::Minor7 => "m7",
            ChordQuality::HalfDiminished7 => "m7b5",
            ChordQuality::Minor9 => "m9",
            ChordQuality::Minor11 => "m11",
            other => other.id(),
        }
    }

    /// Returns whether the identifier of the quality names a minor, diminished, or half-diminished
    /// sound. The match is made on the identifier text (`min`, `dim`, or `m7`).
    #[must_use]
    pub fn is_minor_family(self) -> bool {
        let id = self.id();
        id.contains("min") || id.contains("dim") || id.contains("m7")
    }

    /// Parses a quality from its identifier.
    pub fn from_id(id: &str) -> Result<ChordQuality, TheoryError> {
        ChordQuality::from_str(id).map_err(|_| TheoryError::UnknownChordQuality(id.to_string()))
    }
}
