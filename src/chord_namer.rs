//! Formats chord symbols from a root and a quality.

use crate::{
    data::music::{chords::ChordQuality, notes::Note},
    error::TheoryError,
};

/// Returns the chord symbol for the root and quality, for example `F#m7` or `Cmaj7#11`.
#[must_use]
pub fn format_chord_name(root: Note, quality: ChordQuality) -> String {
    format!("{}{}", root, quality.suffix())
}

/// Same as [format_chord_name], but takes the root and the quality by name. The root is kept as
/// spelled by the caller.
pub fn format_chord_name_str(root: &str, quality: &str) -> Result<String, TheoryError> {
    let root: Note = root.parse()?;
    let quality = ChordQuality::from_id(quality)?;
    Ok(format_chord_name(root, quality))
}

#[cfg(test)]
mod test {
    use anyhow::Result;

    use super::*;

    /// Verifies formatting chord symbols.
    #[test]
    fn format_names() -> Result<()> {
        assert_eq!(format_chord_name_str("C", "major")?, "C");
        assert_eq!(format_chord_name_str("Ab", "major")?, "Ab");
        assert_eq!(format_chord_name_str("F", "min7")?, "Fm7");
        assert_eq!(format_chord_name_str("B", "min7b5")?, "Bm7b5");
        assert_eq!(format_chord_name_str("Db", "maj7#11")?, "Dbmaj7#11");
        assert_eq!(format_chord_name_str("E", "7alt")?, "E7alt");
        assert_eq!(format_chord_name(Note::G, ChordQuality::Augmented), "Gaug");
        Ok(())
    }

    /// Verifies that unknown qualities are rejected instead of producing a partial symbol.
    #[test]
    fn unknown_quality() {
        assert_eq!(
            format_chord_name_str("C", "undefined"),
            Err(TheoryError::UnknownChordQuality("undefined".to_string()))
        );
        assert_eq!(
            format_chord_name_str("Q", "major"),
            Err(TheoryError::InvalidPitchClass("Q".to_string()))
        );
    }
}
