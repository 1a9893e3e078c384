//! # Chord Model
//!
//! Builds a chord from a root and a quality: quality -> fixed interval
//! set -> notes -> display symbol.
//!
//! ## Supported Qualities
//! - **Triads**: major, minor, diminished, augmented, sus2, sus4
//! - **Sevenths**: major 7th, minor 7th, dominant 7th, half-diminished
//!   (m7b5), diminished 7th, minor-major 7th, augmented-major 7th
//!
//! Every quality maps to a fixed ascending semitone set from the root
//! (major = 0,4,7; dominant 7th = 0,4,7,10; ...) and to a fixed symbol
//! suffix (minor -> "m", half-diminished -> "m7(b5)", dominant -> "7").
//! Both mappings are static tables, total over the enumeration.
//!
//! Chord symbols can also be read back: [`parse_chord_symbol`] maps
//! "Dm7" to its root and quality so collaborators can round-trip the
//! labels the engine prints.

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::pitch::{spelling_for_key, transpose, Note, NoteSpelling};

/// Closed enumeration of chord qualities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
    Augmented,
    Sus2,
    Sus4,
    Major7,
    Minor7,
    Dominant7,
    Minor7b5,
    Diminished7,
    MinorMajor7,
    AugmentedMajor7,
}

impl ChordQuality {
    /// Ascending semitone offsets from the chord root.
    pub fn intervals(&self) -> &'static [u8] {
        match self {
            ChordQuality::Major => &[0, 4, 7],
            ChordQuality::Minor => &[0, 3, 7],
            ChordQuality::Diminished => &[0, 3, 6],
            ChordQuality::Augmented => &[0, 4, 8],
            ChordQuality::Sus2 => &[0, 2, 7],
            ChordQuality::Sus4 => &[0, 5, 7],
            ChordQuality::Major7 => &[0, 4, 7, 11],
            ChordQuality::Minor7 => &[0, 3, 7, 10],
            ChordQuality::Dominant7 => &[0, 4, 7, 10],
            ChordQuality::Minor7b5 => &[0, 3, 6, 10],
            ChordQuality::Diminished7 => &[0, 3, 6, 9],
            ChordQuality::MinorMajor7 => &[0, 3, 7, 11],
            ChordQuality::AugmentedMajor7 => &[0, 4, 8, 11],
        }
    }

    /// Symbol suffix appended to the root name ("Dm7" = "D" + "m7").
    pub fn suffix(&self) -> &'static str {
        match self {
            ChordQuality::Major => "",
            ChordQuality::Minor => "m",
            ChordQuality::Diminished => "dim",
            ChordQuality::Augmented => "aug",
            ChordQuality::Sus2 => "sus2",
            ChordQuality::Sus4 => "sus4",
            ChordQuality::Major7 => "M7",
            ChordQuality::Minor7 => "m7",
            ChordQuality::Dominant7 => "7",
            ChordQuality::Minor7b5 => "m7(b5)",
            ChordQuality::Diminished7 => "dim7",
            ChordQuality::MinorMajor7 => "mM7",
            ChordQuality::AugmentedMajor7 => "M7(#5)",
        }
    }

    /// Whether the quality reads as minor in a roman numeral (lowercase).
    pub fn is_minor_flavored(&self) -> bool {
        matches!(
            self,
            ChordQuality::Minor
                | ChordQuality::Diminished
                | ChordQuality::Minor7
                | ChordQuality::Minor7b5
                | ChordQuality::Diminished7
                | ChordQuality::MinorMajor7
        )
    }

    /// Reverse lookup from an ascending root-relative interval set, used
    /// when harmonizing a scale by stacked thirds.
    pub fn from_intervals(intervals: &[u8]) -> Option<ChordQuality> {
        match intervals {
            [0, 4, 7] => Some(ChordQuality::Major),
            [0, 3, 7] => Some(ChordQuality::Minor),
            [0, 3, 6] => Some(ChordQuality::Diminished),
            [0, 4, 8] => Some(ChordQuality::Augmented),
            [0, 2, 7] => Some(ChordQuality::Sus2),
            [0, 5, 7] => Some(ChordQuality::Sus4),
            [0, 4, 7, 11] => Some(ChordQuality::Major7),
            [0, 3, 7, 10] => Some(ChordQuality::Minor7),
            [0, 4, 7, 10] => Some(ChordQuality::Dominant7),
            [0, 3, 6, 10] => Some(ChordQuality::Minor7b5),
            [0, 3, 6, 9] => Some(ChordQuality::Diminished7),
            [0, 3, 7, 11] => Some(ChordQuality::MinorMajor7),
            [0, 4, 8, 11] => Some(ChordQuality::AugmentedMajor7),
            _ => None,
        }
    }
}

/// A chord: root, quality, spelled notes, and display symbol.
///
/// Notes are root-first in ascending interval order, not registered to
/// any octave. The note count always equals the quality's interval
/// count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chord {
    pub root: Note,
    pub quality: ChordQuality,
    pub notes: Vec<Note>,
    pub symbol: String,
}

impl Chord {
    /// Build a chord on a named root, spelling derived notes per the
    /// root's own accidental preference ("Bb" spells flats, "C#" sharps).
    pub fn new(root_name: &str, quality: ChordQuality) -> Result<Chord, TheoryError> {
        Self::with_spelling(root_name, quality, spelling_for_key(root_name))
    }

    /// Build a chord with an explicit spelling context, used when the
    /// surrounding key decides the accidentals rather than the root.
    pub fn with_spelling(
        root_name: &str,
        quality: ChordQuality,
        spelling: NoteSpelling,
    ) -> Result<Chord, TheoryError> {
        let root = Note::from_name(root_name)?;
        let notes: Vec<Note> = quality
            .intervals()
            .iter()
            .map(|&step| {
                if step == 0 {
                    root.clone()
                } else {
                    Note::from_pitch_class(transpose(root.pitch_class, step as i8), spelling)
                }
            })
            .collect();
        let symbol = format!("{}{}", root.name, quality.suffix());
        Ok(Chord {
            root,
            quality,
            notes,
            symbol,
        })
    }

    /// The chord's pitch classes, root first.
    pub fn pitch_classes(&self) -> Vec<u8> {
        self.notes.iter().map(|n| n.pitch_class).collect()
    }

    /// Whether a pitch class belongs to the chord.
    pub fn contains_pitch_class(&self, pitch_class: u8) -> bool {
        self.notes.iter().any(|n| n.pitch_class == pitch_class % 12)
    }

    /// MIDI note numbers voiced in the C3 octave (48-59 root register),
    /// the register used for accompaniment playback.
    ///
    /// ```
    /// use fretwise::{Chord, ChordQuality};
    ///
    /// // C major: C3, E3, G3
    /// let c = Chord::new("C", ChordQuality::Major).unwrap();
    /// assert_eq!(c.midi_notes(), vec![48, 52, 55]);
    ///
    /// // G7: G3, B3, D4, F4
    /// let g7 = Chord::new("G", ChordQuality::Dominant7).unwrap();
    /// assert_eq!(g7.midi_notes(), vec![55, 59, 62, 65]);
    /// ```
    pub fn midi_notes(&self) -> Vec<u8> {
        let root_midi = 48 + self.root.pitch_class;
        self.quality
            .intervals()
            .iter()
            .map(|&step| root_midi + step)
            .collect()
    }
}

/// Parse a chord symbol ("C", "Dm7", "Bbm7(b5)") into root and quality.
///
/// Accepts the engine's own suffixes plus the common aliases ("maj7",
/// "min", "-7", "°"). Returns `None` for an unrecognized root or suffix.
///
/// ```
/// use fretwise::{parse_chord_symbol, ChordQuality};
///
/// let (root, quality) = parse_chord_symbol("Dm7").unwrap();
/// assert_eq!(root.name, "D");
/// assert_eq!(quality, ChordQuality::Minor7);
///
/// assert!(parse_chord_symbol("Hm").is_none());
/// ```
pub fn parse_chord_symbol(symbol: &str) -> Option<(Note, ChordQuality)> {
    let trimmed = symbol.trim();
    let mut chars = trimmed.char_indices();
    let (_, first) = chars.next()?;
    let mut root_end = first.len_utf8();
    if let Some((idx, second)) = chars.next() {
        if second == '#' || second == 'b' {
            root_end = idx + second.len_utf8();
        }
    }
    let (root_name, suffix) = trimmed.split_at(root_end);
    let root = Note::from_name(root_name).ok()?;

    let quality = match suffix {
        "" | "maj" | "M" => ChordQuality::Major,
        "m" | "min" | "-" => ChordQuality::Minor,
        "7" => ChordQuality::Dominant7,
        "M7" | "maj7" => ChordQuality::Major7,
        "m7" | "min7" | "-7" => ChordQuality::Minor7,
        "dim" | "°" => ChordQuality::Diminished,
        "dim7" | "°7" => ChordQuality::Diminished7,
        "aug" | "+" => ChordQuality::Augmented,
        "sus2" => ChordQuality::Sus2,
        "sus4" => ChordQuality::Sus4,
        "m7(b5)" | "m7b5" => ChordQuality::Minor7b5,
        "mM7" | "mmaj7" => ChordQuality::MinorMajor7,
        "M7(#5)" | "maj7#5" => ChordQuality::AugmentedMajor7,
        _ => return None,
    };
    Some((root, quality))
}
