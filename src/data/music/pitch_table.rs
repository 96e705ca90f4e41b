//! Defines the equal-tempered frequency of every pitch class in the supported octave range.
//!
//! Octave indices start at C, so `C3` sits below `A3`. The table is anchored at `A3` = 440 Hz and
//! every octave step doubles the frequency.

use crate::{
    data::music::notes::{Note, PitchClass},
    error::TheoryError,
};

/// The frequency of `A` at octave index 3, in Hz.
pub const CONCERT_A: f64 = 440.0;

/// The octave index at which `A` sounds at [CONCERT_A].
pub const CONCERT_A_OCTAVE: u8 = 3;

/// The highest valid octave index. The lowest is zero.
pub const MAX_OCTAVE: u8 = 5;

/// Returns the frequency of the pitch class at octave index [CONCERT_A_OCTAVE].
fn reference_frequency(pitch_class: PitchClass) -> f64 {
    let offset = f64::from(pitch_class.index()) - f64::from(PitchClass::A.index());
    CONCERT_A * 2.0_f64.powf(offset / 12.0)
}

/// Returns the frequency in Hz of the pitch class at the given octave index.
///
/// Moving up one octave multiplies the frequency by an exact power of two, so the value at
/// `octave + 1` is always exactly double the value at `octave`.
pub fn frequency(pitch_class: PitchClass, octave: u8) -> Result<f64, TheoryError> {
    if octave > MAX_OCTAVE {
        return Err(TheoryError::InvalidOctaveIndex(octave));
    }
    let octave_shift = i32::from(octave) - i32::from(CONCERT_A_OCTAVE);
    Ok(reference_frequency(pitch_class) * 2.0_f64.powi(octave_shift))
}

/// Returns the frequency in Hz of the note with the given name at the given octave index. Flat and
/// other enharmonic spellings are normalized before the lookup.
pub fn frequency_of(name: &str, octave: u8) -> Result<f64, TheoryError> {
    let note: Note = name.parse()?;
    frequency(note.pitch_class(), octave)
}
