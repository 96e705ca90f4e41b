//! Generates the pool of chords practiced at each difficulty tier.
//!
//! The beginner tier only contains the open major and minor chords. Every other tier goes through
//! all twelve roots and builds the same list of chords for each of them, so the pool has twelve
//! times as many chords as the tier has recipes.

use std::str::FromStr;
use tracing::{debug, warn};

use crate::{
    chord_builder::{DEFAULT_OCTAVE, build_chord, build_slash_chord},
    data::{
        Chord, DifficultyTier,
        music::{chords::ChordQuality, notes::Note},
    },
    error::TheoryError,
};

/// The roots used by every tier past the beginner tier, naturals first.
pub const ALL_ROOTS: [Note; 12] = [
    Note::C,
    Note::D,
    Note::E,
    Note::F,
    Note::G,
    Note::A,
    Note::B,
    Note::D_FLAT,
    Note::E_FLAT,
    Note::G_FLAT,
    Note::A_FLAT,
    Note::B_FLAT,
];

/// The roots of the open major chords of the beginner tier, in the order of the CAGED system.
const OPEN_MAJOR_ROOTS: [Note; 5] = [Note::C, Note::A, Note::G, Note::E, Note::D];

/// The roots of the open minor chords of the beginner tier.
const OPEN_MINOR_ROOTS: [Note; 3] = [Note::A, Note::E, Note::D];

/// Describes one chord to build on a root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChordRecipe {
    /// The chord in root position, named by its symbol.
    RootPosition(ChordQuality),

    /// The chord with the given number of inversions, named after its bass note.
    Slash(ChordQuality, usize),
}

impl ChordRecipe {
    /// Builds the chord described by the recipe on the given root.
    pub fn build(self, root: Note) -> Result<Chord, TheoryError> {
        match self {
            ChordRecipe::RootPosition(quality) => build_chord(root, quality, DEFAULT_OCTAVE, 0),
            ChordRecipe::Slash(quality, inversion) => build_slash_chord(root, quality, inversion),
        }
    }
}

const NOVICE: &[ChordRecipe] = &[
    ChordRecipe::RootPosition(ChordQuality::Major),
    ChordRecipe::RootPosition(ChordQuality::Minor),
    ChordRecipe::RootPosition(ChordQuality::Dominant7),
];

const INTERMEDIATE: &[ChordRecipe] = &[
    ChordRecipe::RootPosition(ChordQuality::Major),
    ChordRecipe::RootPosition(ChordQuality::Minor),
    ChordRecipe::Slash(ChordQuality::Major, 1),
    ChordRecipe::Slash(ChordQuality::Minor, 1),
    ChordRecipe::RootPosition(ChordQuality::Major7),
    ChordRecipe::RootPosition(ChordQuality::Minor7),
    ChordRecipe::RootPosition(ChordQuality::Dominant7),
    ChordRecipe::Slash(ChordQuality::Major7, 1),
    ChordRecipe::Slash(ChordQuality::Major7, 2),
    ChordRecipe::Slash(ChordQuality::Dominant7, 3),
];

const ADVANCED: &[ChordRecipe] = &[
    ChordRecipe::RootPosition(ChordQuality::Diminished),
    ChordRecipe::RootPosition(ChordQuality::Augmented),
    ChordRecipe::RootPosition(ChordQuality::HalfDiminished7),
    ChordRecipe::RootPosition(ChordQuality::Diminished7),
    ChordRecipe::RootPosition(ChordQuality::Major9),
    ChordRecipe::RootPosition(ChordQuality::Dominant9),
    ChordRecipe::RootPosition(ChordQuality::Dominant7Sharp9),
];

const JAZZ: &[ChordRecipe] = &[
    ChordRecipe::RootPosition(ChordQuality::Major7Sharp11),
    ChordRecipe::RootPosition(ChordQuality::Altered),
    ChordRecipe::RootPosition(ChordQuality::Dominant13),
    ChordRecipe::RootPosition(ChordQuality::Major13),
    ChordRecipe::RootPosition(ChordQuality::Minor11),
    ChordRecipe::RootPosition(ChordQuality::Dominant7Sharp9Sharp5),
    ChordRecipe::RootPosition(ChordQuality::Dominant7Flat9),
    ChordRecipe::RootPosition(ChordQuality::Major7Sharp5),
];

/// Returns the ordered list of roots and recipes realized for the tier.
#[must_use]
pub fn plan(tier: DifficultyTier) -> Vec<(Note, ChordRecipe)> {
    let recipes = match tier {
        DifficultyTier::Beginner => {
            let major = OPEN_MAJOR_ROOTS
                .iter()
                .map(|&root| (root, ChordRecipe::RootPosition(ChordQuality::Major)));
            let minor = OPEN_MINOR_ROOTS
                .iter()
                .map(|&root| (root, ChordRecipe::RootPosition(ChordQuality::Minor)));
            return major.chain(minor).collect();
        }
        DifficultyTier::Novice => NOVICE,
        DifficultyTier::Intermediate => INTERMEDIATE,
        DifficultyTier::Advanced => ADVANCED,
        DifficultyTier::Jazz => JAZZ,
    };

    ALL_ROOTS
        .iter()
        .flat_map(|&root| recipes.iter().map(move |&recipe| (root, recipe)))
        .collect()
}

/// Builds the pool of chords for the tier, in the order given by [plan].
pub fn generate(tier: DifficultyTier) -> Result<Vec<Chord>, TheoryError> {
    let chords = plan(tier)
        .into_iter()
        .map(|(root, recipe)| recipe.build(root))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(%tier, count = chords.len(), "generated chord pool");
    Ok(chords)
}

/// Builds the pool of chords for the tier with the given name. An unknown name produces an empty
/// pool rather than an error.
pub fn generate_by_name(name: &str) -> Result<Vec<Chord>, TheoryError> {
    match DifficultyTier::from_str(name) {
        Ok(tier) => generate(tier),
        Err(_) => {
            warn!(name, "unknown difficulty tier, returning an empty chord pool");
            Ok(Vec::new())
        }
    }
}

#[cfg(test)]
mod test {
    use anyhow::Result;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    fn chord_names(chords: &[Chord]) -> Vec<String> {
        chords.iter().map(|chord| chord.name.clone()).collect()
    }

    /// Verifies the open chords of the beginner tier.
    #[test]
    fn beginner() -> Result<()> {
        let chords = generate(DifficultyTier::Beginner)?;
        assert_eq!(
            chord_names(&chords),
            vec!["C", "A", "G", "E", "D", "Am", "Em", "Dm"]
        );
        Ok(())
    }

    /// Verifies the size of the pool of every tier.
    #[test]
    fn pool_sizes() -> Result<()> {
        assert_eq!(generate(DifficultyTier::Beginner)?.len(), 8);
        assert_eq!(generate(DifficultyTier::Novice)?.len(), 36);
        assert_eq!(generate(DifficultyTier::Intermediate)?.len(), 120);
        assert_eq!(generate(DifficultyTier::Advanced)?.len(), 84);
        assert_eq!(generate(DifficultyTier::Jazz)?.len(), 96);
        Ok(())
    }

    /// Verifies that roots are iterated in the outer loop and recipes in the inner loop.
    #[test]
    fn novice_order() -> Result<()> {
        let names = chord_names(&generate(DifficultyTier::Novice)?);
        assert_eq!(names[..6].to_vec(), vec!["C", "Cm", "C7", "D", "Dm", "D7"]);
        assert_eq!(names[33..].to_vec(), vec!["Bb", "Bbm", "Bb7"]);
        Ok(())
    }

    /// Verifies the chords built for one root of the intermediate tier.
    #[test]
    fn intermediate_root() -> Result<()> {
        let names = chord_names(&generate(DifficultyTier::Intermediate)?);
        assert_eq!(
            names[..10].to_vec(),
            vec![
                "C", "Cm", "C/E", "Cm/Eb", "Cmaj7", "Cm7", "C7", "Cmaj7/E", "Cmaj7/G", "C7/A#"
            ]
        );
        Ok(())
    }

    /// Verifies the chords built for one root of the jazz tier.
    #[test]
    fn jazz_root() -> Result<()> {
        let names = chord_names(&generate(DifficultyTier::Jazz)?);
        assert_eq!(
            names[..8].to_vec(),
            vec!["Cmaj7#11", "C7alt", "C13", "Cmaj13", "Cm11", "C7#9#5", "C7b9", "Cmaj7#5"]
        );
        Ok(())
    }

    /// Verifies that every chord in every pool satisfies the chord invariants.
    #[test]
    fn pools_are_consistent() -> Result<()> {
        for tier in DifficultyTier::iter() {
            for chord in generate(tier)? {
                assert_eq!(chord.formula_notes.len(), chord.voicing.len());
                assert!(!chord.voicing.is_empty());
                assert!(
                    chord
                        .voicing
                        .windows(2)
                        .all(|pair| pair[0].frequency <= pair[1].frequency)
                );
            }
        }
        Ok(())
    }

    /// Verifies that tiers can be requested by name and that unknown names yield no chords.
    #[test]
    fn by_name() -> Result<()> {
        assert_eq!(generate_by_name("jazz")?.len(), 96);
        assert!(generate_by_name("nonsense-tier")?.is_empty());
        assert!(generate_by_name("")?.is_empty());
        Ok(())
    }
}
