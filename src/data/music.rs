//! Contains types and functions for spelling notes and building chords.

pub mod chords;
pub mod circle_fifths;
pub mod intervals;
pub mod notes;
pub mod pitch_table;
