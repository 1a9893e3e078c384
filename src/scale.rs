//! # Scale Library
//!
//! Named scale interval patterns and note derivation.
//!
//! Each [`ScaleType`] maps to a fixed ascending semitone pattern from its
//! root, expressed as a static table so the mapping is total over the
//! enumeration. The per-type characteristic-note and avoid-note tables
//! live here too: a characteristic note is a scale tone that defines the
//! mode's color (the raised 4th of lydian), an avoid note is a scale
//! tone that clashes with the chord underneath (the 4th over a major
//! chord) and is conventionally skipped in improvisation.

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::pitch::{note_name_to_pitch_class, transpose, Note, NoteSpelling};

/// Closed enumeration of the scales the engine knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScaleType {
    Major,
    NaturalMinor,
    HarmonicMinor,
    MelodicMinor,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Locrian,
    MajorPentatonic,
    MinorPentatonic,
}

impl ScaleType {
    /// Ascending semitone offsets from the scale root.
    pub fn intervals(&self) -> &'static [u8] {
        match self {
            ScaleType::Major => &[0, 2, 4, 5, 7, 9, 11],
            ScaleType::NaturalMinor => &[0, 2, 3, 5, 7, 8, 10],
            ScaleType::HarmonicMinor => &[0, 2, 3, 5, 7, 8, 11],
            ScaleType::MelodicMinor => &[0, 2, 3, 5, 7, 9, 11],
            ScaleType::Dorian => &[0, 2, 3, 5, 7, 9, 10],
            ScaleType::Phrygian => &[0, 1, 3, 5, 7, 8, 10],
            ScaleType::Lydian => &[0, 2, 4, 6, 7, 9, 11],
            ScaleType::Mixolydian => &[0, 2, 4, 5, 7, 9, 10],
            ScaleType::Locrian => &[0, 1, 3, 5, 6, 8, 10],
            ScaleType::MajorPentatonic => &[0, 2, 4, 7, 9],
            ScaleType::MinorPentatonic => &[0, 3, 5, 7, 10],
        }
    }

    /// Human-readable scale name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ScaleType::Major => "Major",
            ScaleType::NaturalMinor => "Natural Minor",
            ScaleType::HarmonicMinor => "Harmonic Minor",
            ScaleType::MelodicMinor => "Melodic Minor",
            ScaleType::Dorian => "Dorian",
            ScaleType::Phrygian => "Phrygian",
            ScaleType::Lydian => "Lydian",
            ScaleType::Mixolydian => "Mixolydian",
            ScaleType::Locrian => "Locrian",
            ScaleType::MajorPentatonic => "Major Pentatonic",
            ScaleType::MinorPentatonic => "Minor Pentatonic",
        }
    }

    /// Semitone offsets of the tones that give this scale its color.
    pub fn characteristic_offsets(&self) -> &'static [u8] {
        match self {
            ScaleType::Major => &[],
            ScaleType::NaturalMinor => &[8],  // b6
            ScaleType::HarmonicMinor => &[11], // raised 7th
            ScaleType::MelodicMinor => &[11],  // raised 7th over a minor third
            ScaleType::Dorian => &[9],         // major 6th
            ScaleType::Phrygian => &[1],       // b2
            ScaleType::Lydian => &[6],         // raised 4th
            ScaleType::Mixolydian => &[10],    // b7
            ScaleType::Locrian => &[6],        // b5
            ScaleType::MajorPentatonic => &[],
            ScaleType::MinorPentatonic => &[],
        }
    }

    /// Semitone offsets of the tones conventionally avoided over the
    /// chord this scale is played against.
    pub fn avoid_offsets(&self) -> &'static [u8] {
        match self {
            ScaleType::Major => &[5],      // 4th against the major third
            ScaleType::NaturalMinor => &[],
            ScaleType::HarmonicMinor => &[],
            ScaleType::MelodicMinor => &[],
            ScaleType::Dorian => &[],
            ScaleType::Phrygian => &[8],   // b6 against the fifth
            ScaleType::Lydian => &[],
            ScaleType::Mixolydian => &[5], // 4th against the major third
            ScaleType::Locrian => &[1],    // b2 against the root
            ScaleType::MajorPentatonic => &[],
            ScaleType::MinorPentatonic => &[],
        }
    }
}

/// Pitch classes of a scale built on `root_pc`, root first, ascending.
pub fn scale_pitch_classes(root_pc: u8, scale: ScaleType) -> Vec<u8> {
    scale
        .intervals()
        .iter()
        .map(|&step| transpose(root_pc, step as i8))
        .collect()
}

/// Notes of a scale built on a named root, spelled from the given table.
pub fn scale_notes_with_spelling(
    root_name: &str,
    scale: ScaleType,
    spelling: NoteSpelling,
) -> Result<Vec<Note>, TheoryError> {
    let root_pc = note_name_to_pitch_class(root_name)?;
    Ok(scale_pitch_classes(root_pc, scale)
        .into_iter()
        .map(|pc| Note::from_pitch_class(pc, spelling))
        .collect())
}

/// Notes of a scale built on a named root, spelled per the root's own
/// accidental preference.
pub fn scale_notes(root_name: &str, scale: ScaleType) -> Result<Vec<Note>, TheoryError> {
    scale_notes_with_spelling(root_name, scale, spelling_for_scale(root_name, scale))
}

/// Ascending MIDI note numbers for one octave of the scale, rooted in
/// the C3 register (48-59) used for accompaniment playback.
pub fn midi_notes(root_name: &str, scale: ScaleType) -> Result<Vec<u8>, TheoryError> {
    let root_pc = note_name_to_pitch_class(root_name)?;
    let root_midi = 48 + root_pc;
    Ok(scale
        .intervals()
        .iter()
        .map(|&step| root_midi + step)
        .collect())
}

/// Spelling preference when a scale is built in a key context.
///
/// A sharp-named root keeps sharps and a flat-named root keeps flats,
/// whatever the scale. Otherwise the major-type scales keep the sharp
/// default while the lowered-degree scales (the minors and the flat-side
/// modes) spell with flats, which is how their borrowed tones are
/// conventionally written.
pub fn spelling_for_scale(key_root: &str, scale: ScaleType) -> NoteSpelling {
    let trimmed = key_root.trim();
    if trimmed.contains('#') {
        return NoteSpelling::Sharps;
    }
    if trimmed.contains('b') || trimmed == "F" {
        return NoteSpelling::Flats;
    }
    match scale {
        ScaleType::Major | ScaleType::Lydian | ScaleType::MajorPentatonic => NoteSpelling::Sharps,
        _ => NoteSpelling::Flats,
    }
}
