//! Walks the flat side of the circle of fifths to find the keys whose chords are spelled with flats.

use crate::data::music::notes::Note;

impl Note {
    /// Returns the note obtained by moving counter-clockwise through the circle of fifths, that is,
    /// the key with one more flat. Returns `None` past C♭ and for keys on the sharp side.
    #[must_use]
    pub fn counter_clockwise(&self) -> Option<Note> {
        match *self {
            Note::C => Some(Note::F),
            Note::F => Some(Note::B_FLAT),
            Note::B_FLAT => Some(Note::E_FLAT),
            Note::E_FLAT => Some(Note::A_FLAT),
            Note::A_FLAT => Some(Note::D_FLAT),
            Note::D_FLAT => Some(Note::G_FLAT),
            Note::G_FLAT => Some(Note::C_FLAT),
            _ => None,
        }
    }

    /// Returns the keys with at least one flat in their signature, in order of increasing flats.
    #[must_use]
    pub fn flat_keys() -> Vec<Note> {
        std::iter::successors(Note::C.counter_clockwise(), Note::counter_clockwise).collect()
    }

    /// Returns whether this note names a key with at least one flat in its signature.
    #[must_use]
    pub fn is_flat_key(&self) -> bool {
        matches!(
            *self,
            Note::F
                | Note::B_FLAT
                | Note::E_FLAT
                | Note::A_FLAT
                | Note::D_FLAT
                | Note::G_FLAT
                | Note::C_FLAT
        )
    }
}
