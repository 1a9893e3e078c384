//! Secondary dominants and their tritone substitutions.

use serde::Serialize;

use crate::chord::{Chord, ChordQuality};
use crate::error::TheoryError;
use crate::harmony::diatonic::{degree_function, ChordFunction, TRIAD_NUMERALS};
use crate::pitch::{
    note_name_to_pitch_class, spelling_for_key, transpose, Note, NoteSpelling,
};
use crate::scale::ScaleType;

const PERFECT_FIFTH: i8 = 7;
const TRITONE: i8 = 6;

/// A dominant-functioning pair targeting one diatonic degree: the
/// secondary dominant (V7/x, a fifth above the target) and its tritone
/// substitution (subV7/x, a tritone from the secondary dominant's root,
/// sharing the same resolution target).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DominantPairInfo {
    pub target_degree: u8,
    pub target_numeral: String,
    pub secondary: Chord,
    pub secondary_label: String,
    pub tritone_sub: Chord,
    pub sub_label: String,
}

/// Derive the secondary dominant and tritone substitution for every
/// diatonic degree whose function is not already dominant (degrees
/// 1, 2, 3, 4 and 6). Both chords are dominant sevenths; substitution
/// roots are flat-spelled, sitting a flat second above their target.
pub fn secondary_dominants(key_root: &str) -> Result<Vec<DominantPairInfo>, TheoryError> {
    let key_pc = note_name_to_pitch_class(key_root)?;
    let spelling = spelling_for_key(key_root);
    let pattern = ScaleType::Major.intervals();

    let mut out = Vec::new();
    for degree in 1..=7u8 {
        if degree_function(degree) == ChordFunction::Dominant {
            continue;
        }
        let i = (degree - 1) as usize;
        let target_pc = transpose(key_pc, pattern[i] as i8);
        let target_numeral = TRIAD_NUMERALS[i].to_string();

        let secondary_root = Note::from_pitch_class(transpose(target_pc, PERFECT_FIFTH), spelling);
        let secondary =
            Chord::with_spelling(&secondary_root.name, ChordQuality::Dominant7, spelling)?;

        let sub_root = Note::from_pitch_class(
            transpose(secondary_root.pitch_class, TRITONE),
            NoteSpelling::Flats,
        );
        let tritone_sub =
            Chord::with_spelling(&sub_root.name, ChordQuality::Dominant7, NoteSpelling::Flats)?;

        out.push(DominantPairInfo {
            target_degree: degree,
            secondary_label: format!("V7/{}", target_numeral),
            sub_label: format!("subV7/{}", target_numeral),
            target_numeral,
            secondary,
            tritone_sub,
        });
    }
    Ok(out)
}
