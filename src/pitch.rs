//! # Pitch Model
//!
//! Pitch-class arithmetic and note naming.
//!
//! A pitch class is an octave-independent note identity, 0-11 semitones
//! from C. Every function here keeps pitch classes reduced modulo 12.
//! Display names come from one of two fixed tables (sharp or flat
//! spelling); which table applies is a property of the musical context,
//! not of the pitch class itself: C# and Db are the same pitch.

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;

/// Sharp spellings for the 12 pitch classes, indexed by pitch class.
pub const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat spellings for the 12 pitch classes, indexed by pitch class.
pub const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Which name table renders a derived pitch class.
///
/// Keys conventionally spelled with flats (F, Bb, Eb, Ab, Db, Gb) render
/// flat names; everything else defaults to sharps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteSpelling {
    #[default]
    Sharps,
    Flats,
}

/// A note: a pitch class plus the name it is displayed under.
///
/// Two notes are pitch-equal iff their pitch classes are equal; the
/// display name may differ (C# vs Db). Structural equality (`==`)
/// compares both fields; use [`Note::same_pitch`] for pitch equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub pitch_class: u8,
    pub name: String,
}

impl Note {
    /// Build a note from a pitch class, naming it from the given table.
    pub fn from_pitch_class(pitch_class: u8, spelling: NoteSpelling) -> Self {
        let pc = (pitch_class % 12) as usize;
        let name = match spelling {
            NoteSpelling::Sharps => SHARP_NAMES[pc],
            NoteSpelling::Flats => FLAT_NAMES[pc],
        };
        Self {
            pitch_class: pc as u8,
            name: name.to_string(),
        }
    }

    /// Parse a note name, keeping the caller's spelling as the display name.
    pub fn from_name(name: &str) -> Result<Self, TheoryError> {
        let pitch_class = note_name_to_pitch_class(name)?;
        Ok(Self {
            pitch_class,
            name: name.trim().to_string(),
        })
    }

    /// Pitch equality, ignoring spelling.
    pub fn same_pitch(&self, other: &Note) -> bool {
        self.pitch_class == other.pitch_class
    }
}

/// Parse a note name ("C", "F#", "Bb") into a pitch class (0-11).
///
/// Sharp and flat spellings of the same pitch map identically
/// ("C#" and "Db" both give 1). Unrecognized input is
/// `TheoryError::InvalidNoteName`.
pub fn note_name_to_pitch_class(name: &str) -> Result<u8, TheoryError> {
    let trimmed = name.trim();
    let mut chars = trimmed.chars();

    let letter = chars.next().ok_or_else(|| TheoryError::InvalidNoteName {
        name: name.to_string(),
    })?;
    let base: i8 = match letter {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => {
            return Err(TheoryError::InvalidNoteName {
                name: name.to_string(),
            })
        }
    };

    let accidental: i8 = match chars.next() {
        None => 0,
        Some('#') => 1,
        Some('b') => -1,
        Some(_) => {
            return Err(TheoryError::InvalidNoteName {
                name: name.to_string(),
            })
        }
    };

    // A single accidental at most: anything after it is malformed.
    if chars.next().is_some() {
        return Err(TheoryError::InvalidNoteName {
            name: name.to_string(),
        });
    }

    Ok(transpose(base.rem_euclid(12) as u8, accidental))
}

/// Transpose a pitch class by a (possibly negative) number of semitones.
///
/// ```
/// use fretwise::pitch::transpose;
///
/// assert_eq!(transpose(0, 7), 7);   // C up a fifth -> G
/// assert_eq!(transpose(0, -1), 11); // C down a semitone -> B
/// assert_eq!(transpose(9, 6), 3);   // A up a tritone -> Eb
/// ```
pub fn transpose(pitch_class: u8, semitones: i8) -> u8 {
    (pitch_class as i16 + semitones as i16).rem_euclid(12) as u8
}

/// Spelling preference for a key, judged from how its root is written.
///
/// A root written with a flat (and the key of F) spells derived notes
/// with flats; everything else spells sharps.
pub fn spelling_for_key(key_root: &str) -> NoteSpelling {
    let trimmed = key_root.trim();
    if trimmed.contains('#') {
        NoteSpelling::Sharps
    } else if trimmed.contains('b') || trimmed == "F" {
        NoteSpelling::Flats
    } else {
        NoteSpelling::Sharps
    }
}
