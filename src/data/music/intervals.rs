//! Resolves the note found a number of semitones above a root.

use crate::{
    data::music::notes::{Note, PitchClass},
    error::TheoryError,
};

/// Selects whether black-key pitch classes are spelled with sharps or flats. The choice changes
/// only the name of a note, never its pitch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Spelling {
    #[default]
    Sharps,
    Flats,
}

impl Spelling {
    /// Returns the spelling of the pitch class under this choice.
    #[must_use]
    pub fn spell(self, pitch_class: PitchClass) -> Note {
        match self {
            Spelling::Sharps => pitch_class.sharp_spelling(),
            Spelling::Flats => pitch_class.flat_spelling(),
        }
    }
}

impl From<bool> for Spelling {
    fn from(prefer_flats: bool) -> Self {
        if prefer_flats {
            Spelling::Flats
        } else {
            Spelling::Sharps
        }
    }
}

/// Returns the note found the given number of semitones above the root. The offset may span
/// several octaves; only the resulting pitch class is returned.
#[must_use]
pub fn note_at_interval(root: Note, semitones: u8, spelling: Spelling) -> Note {
    let root_index = root.pitch_class().index();
    let target = (u16::from(root_index) + u16::from(semitones)) % 12;
    spelling.spell(PitchClass::from_index(target as u8))
}

/// Same as [note_at_interval], but takes the root by name.
pub fn note_at_interval_str(
    root: &str,
    semitones: u8,
    prefer_flats: bool,
) -> Result<Note, TheoryError> {
    Ok(note_at_interval(root.parse()?, semitones, prefer_flats.into()))
}

#[cfg(test)]
mod test {
    use anyhow::Result;

    use super::*;

    /// Verifies resolving notes within and beyond one octave.
    #[test]
    fn resolve_intervals() {
        assert_eq!(note_at_interval(Note::C, 0, Spelling::Sharps), Note::C);
        assert_eq!(note_at_interval(Note::C, 4, Spelling::Sharps), Note::E);
        assert_eq!(note_at_interval(Note::C, 10, Spelling::Sharps), Note::A_SHARP);
        assert_eq!(note_at_interval(Note::C, 10, Spelling::Flats), Note::B_FLAT);
        assert_eq!(note_at_interval(Note::A, 3, Spelling::Sharps), Note::C);
        assert_eq!(note_at_interval(Note::C, 21, Spelling::Sharps), Note::A);
        assert_eq!(note_at_interval(Note::G, 18, Spelling::Sharps), Note::C_SHARP);
        assert_eq!(note_at_interval(Note::B, 255, Spelling::Flats), Note::D);
    }

    /// Verifies that aliased roots resolve exactly like their canonical spelling.
    #[test]
    fn enharmonic_roots() -> Result<()> {
        for semitones in 0..=24 {
            for prefer_flats in [false, true] {
                assert_eq!(
                    note_at_interval_str("Db", semitones, prefer_flats)?,
                    note_at_interval_str("C#", semitones, prefer_flats)?
                );
                assert_eq!(
                    note_at_interval_str("Cb", semitones, prefer_flats)?,
                    note_at_interval_str("B", semitones, prefer_flats)?
                );
                assert_eq!(
                    note_at_interval_str("E#", semitones, prefer_flats)?,
                    note_at_interval_str("F", semitones, prefer_flats)?
                );
            }
        }
        Ok(())
    }

    /// Verifies that the spelling choice only changes the name of the note.
    #[test]
    fn spelling_keeps_pitch() {
        for semitones in 0..12 {
            let sharp = note_at_interval(Note::E_FLAT, semitones, Spelling::Sharps);
            let flat = note_at_interval(Note::E_FLAT, semitones, Spelling::Flats);
            assert_eq!(sharp.pitch_class(), flat.pitch_class());
        }
    }

    /// Verifies that an unknown root is rejected.
    #[test]
    fn invalid_root() {
        assert_eq!(
            note_at_interval_str("X", 4, false),
            Err(TheoryError::InvalidPitchClass("X".to_string()))
        );
    }
}
