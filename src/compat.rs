//! # Scale Compatibility Matcher
//!
//! Determine which scales are consistent with a selected chord.
//!
//! ## Policy
//! Candidates come from a curated per-source table, not a brute-force
//! sweep of every scale type — sweeping would surface matches with no
//! music-theoretic relevance to the chord's context:
//! - A **diatonic** chord at degree d offers the church mode of the
//!   parent major scale at that degree, rooted on the chord root
//!   (ii -> dorian, V -> mixolydian, ...), plus the pentatonic of
//!   matching color.
//! - A **secondary dominant** or **tritone substitution** offers
//!   mixolydian on the chord root.
//! - A **modal interchange** chord offers the originating mode at its
//!   degree when the parent is a rotation of the diatonic set; the
//!   harmonic and melodic minor parents (whose modes fall outside the
//!   engine's scale enumeration) offer the parent scale itself, rooted
//!   on the key tonic.
//!
//! A candidate survives only if its full pitch-class set is a superset
//! of the chord's pitch-class set. Characteristic and avoid notes are
//! annotated from the scale library's fixed per-type tables.

use serde::{Deserialize, Serialize};

use crate::chord::ChordQuality;
use crate::error::TheoryError;
use crate::pitch::{note_name_to_pitch_class, transpose, Note};
use crate::scale::{scale_pitch_classes, spelling_for_scale, ScaleType};

/// Where a selected chord came from, deciding which scales are curated
/// for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChordSource {
    Diatonic,
    SecondaryDominant,
    TritoneSubstitution,
    Interchange(ScaleType),
}

/// A scale compatible with a selected chord, with the tones worth
/// highlighting over it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableScaleInfo {
    pub scale_type: ScaleType,
    pub root: Note,
    pub display_name: String,
    pub characteristic_notes: Vec<Note>,
    pub avoid_notes: Vec<Note>,
}

/// Church modes of the major scale by degree: ionian through locrian.
const MAJOR_DEGREE_MODES: [ScaleType; 7] = [
    ScaleType::Major,
    ScaleType::Dorian,
    ScaleType::Phrygian,
    ScaleType::Lydian,
    ScaleType::Mixolydian,
    ScaleType::NaturalMinor,
    ScaleType::Locrian,
];

/// How many degrees a church mode is rotated from ionian; `None` for
/// scales outside the diatonic rotation family.
fn church_mode_rotation(scale: ScaleType) -> Option<usize> {
    match scale {
        ScaleType::Major => Some(0),
        ScaleType::Dorian => Some(1),
        ScaleType::Phrygian => Some(2),
        ScaleType::Lydian => Some(3),
        ScaleType::Mixolydian => Some(4),
        ScaleType::NaturalMinor => Some(5),
        ScaleType::Locrian => Some(6),
        ScaleType::HarmonicMinor
        | ScaleType::MelodicMinor
        | ScaleType::MajorPentatonic
        | ScaleType::MinorPentatonic => None,
    }
}

/// Find the scales compatible with a selected chord.
///
/// `degree` is the chord's 1-based scale degree within its source;
/// `source` is the palette it was picked from. Returned scales carry
/// their own root so callers can rebuild the note sequence.
pub fn available_scales(
    key_root: &str,
    degree: u8,
    chord_root: &str,
    quality: ChordQuality,
    source: ChordSource,
) -> Result<Vec<AvailableScaleInfo>, TheoryError> {
    let chord_root_pc = note_name_to_pitch_class(chord_root)?;
    // Resolved up front so an invalid key fails even when no candidate
    // ends up rooted on it.
    note_name_to_pitch_class(key_root)?;

    let degree_idx = (degree as usize).saturating_sub(1) % 7;
    let chord_pcs: Vec<u8> = quality
        .intervals()
        .iter()
        .map(|&step| transpose(chord_root_pc, step as i8))
        .collect();

    // (scale, rooted on the chord or on the key tonic)
    let mut candidates: Vec<(ScaleType, &str)> = Vec::new();
    match source {
        ChordSource::Diatonic => {
            candidates.push((MAJOR_DEGREE_MODES[degree_idx], chord_root));
            candidates.push((ScaleType::MajorPentatonic, chord_root));
            candidates.push((ScaleType::MinorPentatonic, chord_root));
        }
        ChordSource::SecondaryDominant | ChordSource::TritoneSubstitution => {
            candidates.push((ScaleType::Mixolydian, chord_root));
        }
        ChordSource::Interchange(parent) => match church_mode_rotation(parent) {
            Some(rotation) => {
                candidates.push((MAJOR_DEGREE_MODES[(rotation + degree_idx) % 7], chord_root));
                candidates.push((ScaleType::MajorPentatonic, chord_root));
                candidates.push((ScaleType::MinorPentatonic, chord_root));
            }
            None => candidates.push((parent, key_root)),
        },
    }

    let mut out = Vec::new();
    for (scale_type, root_name) in candidates {
        let root_pc = note_name_to_pitch_class(root_name)?;
        let scale_pcs = scale_pitch_classes(root_pc, scale_type);
        if !chord_pcs.iter().all(|pc| scale_pcs.contains(pc)) {
            continue;
        }

        let spelling = spelling_for_scale(root_name, scale_type);
        let root = Note::from_pitch_class(root_pc, spelling);
        let display_name = format!("{} {}", root.name, scale_type.display_name());
        out.push(AvailableScaleInfo {
            scale_type,
            display_name,
            characteristic_notes: offsets_to_notes(
                root_pc,
                scale_type.characteristic_offsets(),
                spelling,
            ),
            avoid_notes: offsets_to_notes(root_pc, scale_type.avoid_offsets(), spelling),
            root,
        });
    }
    Ok(out)
}

fn offsets_to_notes(root_pc: u8, offsets: &[u8], spelling: crate::pitch::NoteSpelling) -> Vec<Note> {
    offsets
        .iter()
        .map(|&step| Note::from_pitch_class(transpose(root_pc, step as i8), spelling))
        .collect()
}
