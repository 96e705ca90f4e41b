//! Defines the notes, accidentals, and pitch classes used to spell and build chords.

use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};
use strum::EnumIter;

use crate::error::TheoryError;

/// Defines the names of the natural notes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum NaturalNote {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl NaturalNote {
    /// Returns the pitch class index of the natural note, counting semitones up from C.
    fn semitone(self) -> u8 {
        match self {
            NaturalNote::C => 0,
            NaturalNote::D => 2,
            NaturalNote::E => 4,
            NaturalNote::F => 5,
            NaturalNote::G => 7,
            NaturalNote::A => 9,
            NaturalNote::B => 11,
        }
    }
}

impl Display for NaturalNote {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            NaturalNote::A => write!(f, "A"),
            NaturalNote::B => write!(f, "B"),
            NaturalNote::C => write!(f, "C"),
            NaturalNote::D => write!(f, "D"),
            NaturalNote::E => write!(f, "E"),
            NaturalNote::F => write!(f, "F"),
            NaturalNote::G => write!(f, "G"),
        }
    }
}

/// Defines the pitch accidentals that can be applied to a note.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Accidental {
    Natural,
    Flat,
    Sharp,
}

impl Display for Accidental {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Accidental::Natural => Ok(()),
            Accidental::Flat => write!(f, "b"),
            Accidental::Sharp => write!(f, "#"),
        }
    }
}

/// Defines the union of a natural note and an accidental that describes how a note is spelled.
/// Two spellings can name the same pitch class, for example `C#` and `Db`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct Note(pub NaturalNote, pub Accidental);

#[allow(missing_docs)]
impl Note {
    pub const A: Note = Note(NaturalNote::A, Accidental::Natural);
    pub const A_FLAT: Note = Note(NaturalNote::A, Accidental::Flat);
    pub const A_SHARP: Note = Note(NaturalNote::A, Accidental::Sharp);
    pub const B: Note = Note(NaturalNote::B, Accidental::Natural);
    pub const B_FLAT: Note = Note(NaturalNote::B, Accidental::Flat);
    pub const B_SHARP: Note = Note(NaturalNote::B, Accidental::Sharp);
    pub const C: Note = Note(NaturalNote::C, Accidental::Natural);
    pub const C_FLAT: Note = Note(NaturalNote::C, Accidental::Flat);
    pub const C_SHARP: Note = Note(NaturalNote::C, Accidental::Sharp);
    pub const D: Note = Note(NaturalNote::D, Accidental::Natural);
    pub const D_FLAT: Note = Note(NaturalNote::D, Accidental::Flat);
    pub const D_SHARP: Note = Note(NaturalNote::D, Accidental::Sharp);
    pub const E: Note = Note(NaturalNote::E, Accidental::Natural);
    pub const E_FLAT: Note = Note(NaturalNote::E, Accidental::Flat);
    pub const E_SHARP: Note = Note(NaturalNote::E, Accidental::Sharp);
    pub const F: Note = Note(NaturalNote::F, Accidental::Natural);
    pub const F_FLAT: Note = Note(NaturalNote::F, Accidental::Flat);
    pub const F_SHARP: Note = Note(NaturalNote::F, Accidental::Sharp);
    pub const G: Note = Note(NaturalNote::G, Accidental::Natural);
    pub const G_FLAT: Note = Note(NaturalNote::G, Accidental::Flat);
    pub const G_SHARP: Note = Note(NaturalNote::G, Accidental::Sharp);

    /// Returns the pitch class named by this spelling. Enharmonic aliases such as `Db`, `Cb`, or
    /// `E#` are normalized to the class of their canonical sharp spelling.
    #[must_use]
    pub fn pitch_class(&self) -> PitchClass {
        let semitone = match self.1 {
            Accidental::Natural => self.0.semitone(),
            Accidental::Flat => self.0.semitone() + 11,
            Accidental::Sharp => self.0.semitone() + 1,
        };
        PitchClass::from_index(semitone)
    }

    /// Returns a representation of the note using the Unicode sharp and flat signs.
    #[must_use]
    pub fn to_unicode_string(&self) -> String {
        let accidental = match self.1 {
            Accidental::Natural => "",
            Accidental::Flat => "♭",
            Accidental::Sharp => "♯",
        };
        format!("{}{}", self.0, accidental)
    }
}

impl Display for Note {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}{}", self.0, self.1)
    }
}

impl FromStr for Note {
    type Err = TheoryError;

    /// Parses a note written as a natural note followed by an optional accidental. Both the ASCII
    /// (`C#`, `Db`) and the Unicode (`C♯`, `D♭`) forms are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TheoryError::InvalidPitchClass(s.to_string());
        let mut chars = s.trim().chars();
        let natural = match chars.next().ok_or_else(invalid)? {
            'A' => NaturalNote::A,
            'B' => NaturalNote::B,
            'C' => NaturalNote::C,
            'D' => NaturalNote::D,
            'E' => NaturalNote::E,
            'F' => NaturalNote::F,
            'G' => NaturalNote::G,
            _ => return Err(invalid()),
        };
        let accidental = match chars.next() {
            None => Accidental::Natural,
            Some('b' | '♭') => Accidental::Flat,
            Some('#' | '♯') => Accidental::Sharp,
            Some(_) => return Err(invalid()),
        };
        if chars.next().is_some() {
            return Err(invalid());
        }
        Ok(Note(natural, accidental))
    }
}

impl TryFrom<String> for Note {
    type Error = TheoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Note> for String {
    fn from(note: Note) -> Self {
        note.to_string()
    }
}

/// One of the twelve equivalence classes of notes, independent of octave and spelling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter)]
#[allow(missing_docs)]
pub enum PitchClass {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl PitchClass {
    /// Returns the pitch class at the given index of the chromatic circle starting at C. Indices
    /// wrap around every twelve semitones.
    #[must_use]
    pub fn from_index(index: u8) -> PitchClass {
        match index % 12 {
            0 => PitchClass::C,
            1 => PitchClass::CSharp,
            2 => PitchClass::D,
            3 => PitchClass::DSharp,
            4 => PitchClass::E,
            5 => PitchClass::F,
            6 => PitchClass::FSharp,
            7 => PitchClass::G,
            8 => PitchClass::GSharp,
            9 => PitchClass::A,
            10 => PitchClass::ASharp,
            _ => PitchClass::B,
        }
    }

    /// Returns the index of the pitch class in the chromatic circle starting at C.
    #[must_use]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Returns the canonical spelling of the pitch class, which uses sharps.
    #[must_use]
    pub fn sharp_spelling(self) -> Note {
        match self {
            PitchClass::C => Note::C,
            PitchClass::CSharp => Note::C_SHARP,
            PitchClass::D => Note::D,
            PitchClass::DSharp => Note::D_SHARP,
            PitchClass::E => Note::E,
            PitchClass::F => Note::F,
            PitchClass::FSharp => Note::F_SHARP,
            PitchClass::G => Note::G,
            PitchClass::GSharp => Note::G_SHARP,
            PitchClass::A => Note::A,
            PitchClass::ASharp => Note::A_SHARP,
            PitchClass::B => Note::B,
        }
    }

    /// Returns the spelling of the pitch class that uses flats. Natural notes are spelled the same
    /// way in both tables.
    #[must_use]
    pub fn flat_spelling(self) -> Note {
        match self {
            PitchClass::CSharp => Note::D_FLAT,
            PitchClass::DSharp => Note::E_FLAT,
            PitchClass::FSharp => Note::G_FLAT,
            PitchClass::GSharp => Note::A_FLAT,
            PitchClass::ASharp => Note::B_FLAT,
            natural => natural.sharp_spelling(),
        }
    }
}

impl Display for PitchClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.sharp_spelling())
    }
}

#[cfg(test)]
mod test {
    use anyhow::Result;
    use strum::IntoEnumIterator;

    use super::*;

    /// Verifies converting a note to a string.
    #[test]
    fn to_string() {
        assert_eq!(NaturalNote::A.to_string(), "A");
        assert_eq!(NaturalNote::G.to_string(), "G");
        assert_eq!(Note::A.to_string(), "A");
        assert_eq!(Note::A_FLAT.to_string(), "Ab");
        assert_eq!(Note::A_SHARP.to_string(), "A#");
    }

    /// Verifies converting a note to a string with Unicode accidentals.
    #[test]
    fn to_unicode_string() {
        assert_eq!(Note::A.to_unicode_string(), "A");
        assert_eq!(Note::B_FLAT.to_unicode_string(), "B♭");
        assert_eq!(Note::F_SHARP.to_unicode_string(), "F♯");
    }

    /// Verifies parsing notes in both ASCII and Unicode forms.
    #[test]
    fn parse_note() -> Result<()> {
        assert_eq!("C".parse::<Note>()?, Note::C);
        assert_eq!("Db".parse::<Note>()?, Note::D_FLAT);
        assert_eq!("F#".parse::<Note>()?, Note::F_SHARP);
        assert_eq!("E♭".parse::<Note>()?, Note::E_FLAT);
        assert_eq!("G♯".parse::<Note>()?, Note::G_SHARP);
        Ok(())
    }

    /// Verifies that malformed note names are rejected.
    #[test]
    fn parse_invalid_note() {
        for name in ["", "H", "c", "C##", "Dx", "Bbb"] {
            assert_eq!(
                name.parse::<Note>(),
                Err(TheoryError::InvalidPitchClass(name.to_string()))
            );
        }
    }

    /// Verifies that enharmonic aliases normalize to the canonical pitch class.
    #[test]
    fn alias_normalization() {
        assert_eq!(Note::D_FLAT.pitch_class(), PitchClass::CSharp);
        assert_eq!(Note::E_FLAT.pitch_class(), PitchClass::DSharp);
        assert_eq!(Note::G_FLAT.pitch_class(), PitchClass::FSharp);
        assert_eq!(Note::A_FLAT.pitch_class(), PitchClass::GSharp);
        assert_eq!(Note::B_FLAT.pitch_class(), PitchClass::ASharp);
        assert_eq!(Note::C_FLAT.pitch_class(), PitchClass::B);
        assert_eq!(Note::F_FLAT.pitch_class(), PitchClass::E);
        assert_eq!(Note::E_SHARP.pitch_class(), PitchClass::F);
        assert_eq!(Note::B_SHARP.pitch_class(), PitchClass::C);
    }

    /// Verifies that both spellings of every pitch class map back to the same class.
    #[test]
    fn spellings_round_trip() {
        for pitch_class in PitchClass::iter() {
            assert_eq!(pitch_class.sharp_spelling().pitch_class(), pitch_class);
            assert_eq!(pitch_class.flat_spelling().pitch_class(), pitch_class);
            assert_eq!(PitchClass::from_index(pitch_class.index()), pitch_class);
        }
    }

    /// Verifies that notes serialize as their ASCII name.
    #[test]
    fn serialize_note() -> Result<()> {
        assert_eq!(serde_json::to_string(&Note::B_FLAT)?, "\"Bb\"");
        assert_eq!(serde_json::from_str::<Note>("\"C#\"")?, Note::C_SHARP);
        assert!(serde_json::from_str::<Note>("\"X\"").is_err());
        Ok(())
    }
}
