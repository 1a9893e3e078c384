//! Modal interchange: harmonize the parallel parent scales and flag the
//! genuinely borrowed chords.

use serde::Serialize;

use crate::chord::{Chord, ChordQuality};
use crate::error::TheoryError;
use crate::harmony::diatonic::{degree_function, diatonic_chords, ChordFunction, ChordType};
use crate::harmony::DiatonicChordInfo;
use crate::pitch::{note_name_to_pitch_class, transpose, Note};
use crate::scale::{spelling_for_scale, ScaleType};

/// Parent scales harmonized against the same tonic, in display order.
pub const INTERCHANGE_SOURCES: [ScaleType; 7] = [
    ScaleType::NaturalMinor,
    ScaleType::HarmonicMinor,
    ScaleType::MelodicMinor,
    ScaleType::Dorian,
    ScaleType::Phrygian,
    ScaleType::Lydian,
    ScaleType::Mixolydian,
];

const BASE_NUMERALS: [&str; 7] = ["I", "II", "III", "IV", "V", "VI", "VII"];

/// A scale-degree chord of a parallel parent scale.
///
/// `is_available` is true iff the chord differs from the parallel-major
/// diatonic chord at the same degree (root or quality). Degrees identical
/// to the parallel major are still returned so the UI can render them
/// dimmed, never filtered out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterchangeChordInfo {
    pub degree: u8,
    pub roman_numeral: String,
    pub chord: Chord,
    pub function: ChordFunction,
    pub is_available: bool,
}

/// One parent scale's harmonization of the key tonic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterchangeGroup {
    pub source: ScaleType,
    pub display_name: String,
    pub chords: Vec<InterchangeChordInfo>,
}

/// Harmonize every interchange source scale from the key tonic, grouped
/// by source scale in [`INTERCHANGE_SOURCES`] order.
pub fn interchange_groups(
    key_root: &str,
    chord_type: ChordType,
) -> Result<Vec<InterchangeGroup>, TheoryError> {
    let key_pc = note_name_to_pitch_class(key_root)?;
    let diatonic = diatonic_chords(key_root, chord_type)?;

    INTERCHANGE_SOURCES
        .iter()
        .map(|&source| harmonize_source(key_root, key_pc, source, chord_type, &diatonic))
        .collect()
}

fn harmonize_source(
    key_root: &str,
    key_pc: u8,
    source: ScaleType,
    chord_type: ChordType,
    diatonic: &[DiatonicChordInfo],
) -> Result<InterchangeGroup, TheoryError> {
    let spelling = spelling_for_scale(key_root, source);
    let pattern = source.intervals();

    let mut chords = Vec::with_capacity(pattern.len());
    for (i, &offset) in pattern.iter().enumerate() {
        let degree = (i + 1) as u8;
        let quality = match stacked_quality(pattern, i, chord_type) {
            Some(q) => q,
            // A stacking with no registered quality produces no chord at
            // this degree; does not occur for the listed parent scales.
            None => continue,
        };
        let root = Note::from_pitch_class(transpose(key_pc, offset as i8), spelling);
        let chord = Chord::with_spelling(&root.name, quality, spelling)?;

        let parallel = &diatonic[i];
        let is_available = parallel.chord.root.pitch_class != chord.root.pitch_class
            || parallel.chord.quality != chord.quality;

        chords.push(InterchangeChordInfo {
            degree,
            roman_numeral: borrowed_numeral(i, offset, quality, chord_type),
            chord,
            function: degree_function(degree),
            is_available,
        });
    }

    Ok(InterchangeGroup {
        source,
        display_name: source.display_name().to_string(),
        chords,
    })
}

/// Quality of the chord stacked in thirds on one degree of a seven-note
/// pattern: scale steps d, d+2, d+4 (and d+6 for sevenths), reduced
/// relative to the degree root.
fn stacked_quality(pattern: &[u8], degree_idx: usize, chord_type: ChordType) -> Option<ChordQuality> {
    let n = pattern.len();
    let count = match chord_type {
        ChordType::Triad => 3,
        ChordType::Seventh => 4,
    };
    let root_offset = pattern[degree_idx];
    let mut relative = Vec::with_capacity(count);
    for k in 0..count {
        let offset = pattern[(degree_idx + 2 * k) % n];
        relative.push((offset + 24 - root_offset) % 12);
    }
    ChordQuality::from_intervals(&relative)
}

/// Roman numeral relative to the parallel major: lowered roots take a
/// `b` prefix, raised roots `#`, minor-flavored chords read lowercase.
fn borrowed_numeral(
    degree_idx: usize,
    offset: u8,
    quality: ChordQuality,
    chord_type: ChordType,
) -> String {
    let major_offset = ScaleType::Major.intervals()[degree_idx];
    let prefix = if offset < major_offset {
        "b"
    } else if offset > major_offset {
        "#"
    } else {
        ""
    };
    let base = BASE_NUMERALS[degree_idx];
    let body = if quality.is_minor_flavored() {
        base.to_lowercase()
    } else {
        base.to_string()
    };
    let suffix = match chord_type {
        ChordType::Triad => match quality {
            ChordQuality::Diminished => "°",
            ChordQuality::Augmented => "+",
            _ => "",
        },
        ChordType::Seventh => match quality {
            ChordQuality::Major7 => "M7",
            ChordQuality::Minor7 => "m7",
            ChordQuality::Dominant7 => "7",
            ChordQuality::Minor7b5 => "m7(b5)",
            ChordQuality::Diminished7 => "°7",
            ChordQuality::MinorMajor7 => "mM7",
            ChordQuality::AugmentedMajor7 => "M7(#5)",
            _ => quality.suffix(),
        },
    };
    format!("{}{}{}", prefix, body, suffix)
}
