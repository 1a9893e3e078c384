//! Diatonic harmonization of a major key.

use serde::{Deserialize, Serialize};

use crate::chord::{Chord, ChordQuality};
use crate::error::TheoryError;
use crate::pitch::{note_name_to_pitch_class, spelling_for_key, transpose, Note};
use crate::scale::ScaleType;

/// Whether the palettes are built from triads or seventh chords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChordType {
    Triad,
    Seventh,
}

/// Harmonic function of a scale degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChordFunction {
    Tonic,
    Subdominant,
    Dominant,
}

/// Fixed degree-to-function map: 1, 3, 6 are tonic; 2, 4 subdominant;
/// 5, 7 dominant. `degree` is 1-based.
pub fn degree_function(degree: u8) -> ChordFunction {
    match degree {
        1 | 3 | 6 => ChordFunction::Tonic,
        2 | 4 => ChordFunction::Subdominant,
        _ => ChordFunction::Dominant,
    }
}

// Degree quality tables for the major scale: I ii iii IV V vi vii° and
// IM7 iim7 iiim7 IVM7 V7 vim7 viim7(b5).
const TRIAD_QUALITIES: [ChordQuality; 7] = [
    ChordQuality::Major,
    ChordQuality::Minor,
    ChordQuality::Minor,
    ChordQuality::Major,
    ChordQuality::Major,
    ChordQuality::Minor,
    ChordQuality::Diminished,
];
const SEVENTH_QUALITIES: [ChordQuality; 7] = [
    ChordQuality::Major7,
    ChordQuality::Minor7,
    ChordQuality::Minor7,
    ChordQuality::Major7,
    ChordQuality::Dominant7,
    ChordQuality::Minor7,
    ChordQuality::Minor7b5,
];

pub(crate) const TRIAD_NUMERALS: [&str; 7] = ["I", "ii", "iii", "IV", "V", "vi", "vii°"];
const SEVENTH_NUMERALS: [&str; 7] = [
    "IM7", "iim7", "iiim7", "IVM7", "V7", "vim7", "viim7(b5)",
];

/// One scale-degree chord of a harmonized key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiatonicChordInfo {
    pub degree: u8,
    pub roman_numeral: String,
    pub chord: Chord,
    pub function: ChordFunction,
}

/// Harmonize a major key into its seven scale-degree chords,
/// degree-ascending.
pub fn diatonic_chords(
    key_root: &str,
    chord_type: ChordType,
) -> Result<Vec<DiatonicChordInfo>, TheoryError> {
    let key_pc = note_name_to_pitch_class(key_root)?;
    let spelling = spelling_for_key(key_root);
    let pattern = ScaleType::Major.intervals();
    let (qualities, numerals) = match chord_type {
        ChordType::Triad => (&TRIAD_QUALITIES, &TRIAD_NUMERALS),
        ChordType::Seventh => (&SEVENTH_QUALITIES, &SEVENTH_NUMERALS),
    };

    let mut out = Vec::with_capacity(7);
    for (i, &step) in pattern.iter().enumerate() {
        let degree = (i + 1) as u8;
        let root = Note::from_pitch_class(transpose(key_pc, step as i8), spelling);
        let chord = Chord::with_spelling(&root.name, qualities[i], spelling)?;
        out.push(DiatonicChordInfo {
            degree,
            roman_numeral: numerals[i].to_string(),
            chord,
            function: degree_function(degree),
        });
    }
    Ok(out)
}
