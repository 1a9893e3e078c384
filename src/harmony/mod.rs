//! # Harmony Module
//!
//! Derive the chord palettes a key offers.
//!
//! ## Purpose
//! Given a key root and a chord-type preference (triads or sevenths),
//! this module produces the three palettes the rest of the engine (and
//! the UI behind it) works from:
//! 1. **Diatonic chords** - the seven scale-degree chords of the major
//!    key, with roman numerals and functional labels
//! 2. **Modal interchange** - the same degrees harmonized from seven
//!    parallel parent scales, flagging which chords are genuinely
//!    borrowed (differ from the parallel major)
//! 3. **Secondary dominants** - the dominant-functioning chords that
//!    target each non-dominant degree, paired with their tritone
//!    substitutions
//!
//! ## Sub-modules
//! - `diatonic` - scale-degree chords, functions, roman numerals
//! - `interchange` - parallel-scale harmonization and borrowed flags
//! - `dominants` - secondary dominants and tritone substitutions
//!
//! ## Key Types
//! - [`DiatonicChordInfo`] - degree, numeral, chord, function
//! - [`InterchangeGroup`] - one parent scale's harmonization
//! - [`DominantPairInfo`] - a secondary dominant and its tritone sub
//!
//! Every derivation is a pure function of (key root, chord type):
//! calling one twice with the same inputs yields structurally identical
//! output.

mod diatonic;
mod dominants;
mod interchange;

#[cfg(test)]
mod tests;

pub use diatonic::{
    degree_function, diatonic_chords, ChordFunction, ChordType, DiatonicChordInfo,
};
pub use dominants::{secondary_dominants, DominantPairInfo};
pub use interchange::{
    interchange_groups, InterchangeChordInfo, InterchangeGroup, INTERCHANGE_SOURCES,
};
