//! Builds concrete chords from a root, a quality, an octave, and an inversion.
//!
//! The notes of a chord are kept in two orders. The formula order (root, third, fifth, ...) is
//! what the student is shown and is never changed. The voicing order sorts the notes from the
//! lowest to the highest frequency and is what gets played. An inversion raises the first notes of
//! the formula by one octave, which changes which note sounds lowest but not which notes are
//! present.

use crate::{
    chord_namer::format_chord_name,
    data::{
        Chord, PitchedNote,
        music::{
            chords::ChordQuality,
            intervals::{Spelling, note_at_interval},
            notes::Note,
            pitch_table,
        },
    },
    error::TheoryError,
};

/// The octave index at which chords are built unless another one is requested.
pub const DEFAULT_OCTAVE: u8 = 3;

/// Roots without an accidental whose minor and diminished chords read better with flat thirds and
/// fifths.
const MINOR_FLAT_ROOTS: [Note; 3] = [Note::C, Note::G, Note::D];

/// Decides whether the notes of a chord are spelled with sharps or flats.
///
/// Flats are used for roots on the flat side of the circle of fifths (F, B♭, E♭, A♭, D♭, G♭, C♭).
/// They are also used for minor, diminished, and half-diminished chords on C, G, and D, so that for
/// example C minor is spelled C, E♭, G instead of C, D♯, G.
#[must_use]
pub fn spelling_for(root: Note, quality: ChordQuality) -> Spelling {
    if root.is_flat_key() || (MINOR_FLAT_ROOTS.contains(&root) && quality.is_minor_family()) {
        Spelling::Flats
    } else {
        Spelling::Sharps
    }
}

/// Returns the note with the given spelling at the given octave.
fn pitched_note(name: Note, octave: u8) -> Result<PitchedNote, TheoryError> {
    Ok(PitchedNote {
        name,
        octave,
        frequency: pitch_table::frequency(name.pitch_class(), octave)?,
    })
}

/// Builds the chord with the given root and quality whose root sounds at `base_octave`.
///
/// The first `inversion` notes in formula order are raised one octave by doubling their frequency.
/// Counts larger than the number of notes raise every note. Fails if the root or an extension falls
/// outside the octave range of the pitch table. An inversion never fails, even when it raises a
/// note above that range.
pub fn build_chord(
    root: Note,
    quality: ChordQuality,
    base_octave: u8,
    inversion: usize,
) -> Result<Chord, TheoryError> {
    let spelling = spelling_for(root, quality);

    let mut formula_notes = quality
        .formula()
        .iter()
        .map(|&offset| {
            let name = note_at_interval(root, offset, spelling);
            let octave = base_octave.saturating_add(offset / 12);
            pitched_note(name, octave)
        })
        .collect::<Result<Vec<_>, _>>()?;

    for note in formula_notes.iter_mut().take(inversion) {
        note.octave = note.octave.saturating_add(1);
        note.frequency *= 2.0;
    }

    let mut voicing = formula_notes.clone();
    voicing.sort_by(|a, b| a.frequency.total_cmp(&b.frequency));

    Ok(Chord {
        name: format_chord_name(root, quality),
        formula_notes,
        voicing,
    })
}

/// Same as [build_chord], but takes the root and the quality by name.
pub fn build_chord_str(
    root: &str,
    quality: &str,
    base_octave: u8,
    inversion: usize,
) -> Result<Chord, TheoryError> {
    let root: Note = root.parse()?;
    let quality = ChordQuality::from_id(quality)?;
    build_chord(root, quality, base_octave, inversion)
}

/// Builds an inverted chord at the default octave and names it after its lowest note, for example
/// `C/E` or `Cmaj7/G`.
///
/// The bass is read from the voicing after the inversion is applied. Raising note `k` of the
/// formula does not always leave note `k + 1` as the lowest, so the bass cannot be derived from
/// the inversion count alone.
pub fn build_slash_chord(
    root: Note,
    quality: ChordQuality,
    inversion: usize,
) -> Result<Chord, TheoryError> {
    let mut chord = build_chord(root, quality, DEFAULT_OCTAVE, inversion)?;
    if let Some(bass) = chord.bass() {
        chord.name = format!("{}/{}", chord.name, bass.name);
    }
    Ok(chord)
}

/// Same as [build_slash_chord], but takes the root and the quality by name.
pub fn build_slash_chord_str(
    root: &str,
    quality: &str,
    inversion: usize,
) -> Result<Chord, TheoryError> {
    let root: Note = root.parse()?;
    let quality = ChordQuality::from_id(quality)?;
    build_slash_chord(root, quality, inversion)
}
