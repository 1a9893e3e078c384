//! # Fretboard Voicing Search
//!
//! Enumerate playable 6-string fingerings of a chord.
//!
//! ## Algorithm
//! Strings are numbered 1 (high E) to 6 (low E), standard tuning. For
//! each candidate root string (6, 5, 4) every fret sounding the chord
//! root within the bound becomes an anchor. Strings below the anchor
//! string are muted so the root stays in the bass; each remaining
//! string takes the lowest fret inside the four-fret window starting at
//! the anchor that sounds a chord tone, falling back to the open string
//! when it already sounds a chord tone, and is muted otherwise. An
//! assignment survives only if at least three strings sound — anything
//! thinner is not practically playable as a chord.
//!
//! ## Barre Detection
//! A voicing carries a barre when two or more strings share its lowest
//! non-open fret and every string between the outermost of them sounds
//! at that fret or above: a single finger can lie across the whole
//! span. Open or muted strings inside the span break the barre.
//!
//! ## Unsupported Shapes
//! Qualities with no registered playable shape (the diminished and
//! augmented families) return an empty result. That is a declared
//! limitation of the shape registry, not an error.
//!
//! ## Ordering
//! Voicings come back ordered by ascending anchor fret, then root
//! string descending (6 before 5 before 4); duplicates with identical
//! fret sequences collapse to one.

use serde::Serialize;

use crate::chord::ChordQuality;
use crate::error::TheoryError;
use crate::pitch::{note_name_to_pitch_class, transpose};

/// Open-string pitch classes, indexed by string number - 1:
/// E4 B3 G3 D3 A2 E2.
const OPEN_STRING_PCS: [u8; 6] = [4, 11, 7, 2, 9, 4];

/// Root strings searched, bass-first.
const ROOT_STRINGS: [u8; 3] = [6, 5, 4];

/// Frets reachable above the anchor by a relaxed hand.
const FRET_WINDOW: u8 = 3;

/// Fret bound for the curated common-voicing subset.
const COMMON_MAX_FRET: u8 = 5;

/// Fewest sounded strings accepted as a playable chord.
const MIN_SOUNDED_STRINGS: usize = 3;

/// A single-finger bar across adjacent strings at one fret.
/// `from_string` is the lower-pitched end (higher string number).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarreInfo {
    pub fret: u8,
    pub from_string: u8,
    pub to_string: u8,
}

/// One sounded string/fret cell of a voicing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StringFret {
    pub string: u8,
    pub fret: u8,
}

/// One playable fingering of a chord.
///
/// `frets[0]` is string 6 (low E) through `frets[5]` = string 1, the
/// order chord boxes are written in ("x32010"); `None` is a muted
/// string, `Some(0)` an open one. Every sounded fret maps to a pitch
/// class in the chord's note set, and the root string sounds the chord
/// root at the anchor fret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordVoicing {
    pub frets: [Option<u8>; 6],
    pub root_string: u8,
    pub anchor_fret: u8,
    pub barre: Option<BarreInfo>,
    pub positions: Vec<StringFret>,
}

impl ChordQuality {
    /// Whether the voicing engine has a playable shape registered for
    /// this quality.
    pub fn has_playable_shape(&self) -> bool {
        match self {
            ChordQuality::Major
            | ChordQuality::Minor
            | ChordQuality::Sus2
            | ChordQuality::Sus4
            | ChordQuality::Major7
            | ChordQuality::Minor7
            | ChordQuality::Dominant7 => true,
            ChordQuality::Diminished
            | ChordQuality::Augmented
            | ChordQuality::Minor7b5
            | ChordQuality::Diminished7
            | ChordQuality::MinorMajor7
            | ChordQuality::AugmentedMajor7 => false,
        }
    }
}

/// Search for playable fingerings of a chord up to `max_fret`.
///
/// Returns an empty vec for qualities with no registered shape.
pub fn find_chord_positions(
    root_name: &str,
    quality: ChordQuality,
    max_fret: u8,
) -> Result<Vec<ChordVoicing>, TheoryError> {
    let root_pc = note_name_to_pitch_class(root_name)?;
    if !quality.has_playable_shape() {
        return Ok(Vec::new());
    }

    let chord_pcs: Vec<u8> = quality
        .intervals()
        .iter()
        .map(|&step| transpose(root_pc, step as i8))
        .collect();

    let mut voicings = Vec::new();
    for &root_string in &ROOT_STRINGS {
        let open = open_pitch_class(root_string);
        for anchor in 0..=max_fret {
            if transpose(open, anchor as i8) != root_pc {
                continue;
            }
            if let Some(voicing) = build_voicing(root_string, anchor, max_fret, &chord_pcs) {
                voicings.push(voicing);
            }
        }
    }

    voicings.sort_by(|a, b| {
        a.anchor_fret
            .cmp(&b.anchor_fret)
            .then(b.root_string.cmp(&a.root_string))
    });
    voicings.dedup_by(|a, b| a.frets == b.frets);
    Ok(voicings)
}

/// The curated common subset: the same search capped at fret 5, where
/// the familiar open and first-position shapes live.
pub fn common_voicings(
    root_name: &str,
    quality: ChordQuality,
) -> Result<Vec<ChordVoicing>, TheoryError> {
    find_chord_positions(root_name, quality, COMMON_MAX_FRET)
}

pub(crate) fn open_pitch_class(string: u8) -> u8 {
    OPEN_STRING_PCS[(string - 1) as usize]
}

/// Assemble the one deterministic assignment for a root-string anchor,
/// or nothing when too few strings sound.
fn build_voicing(
    root_string: u8,
    anchor: u8,
    max_fret: u8,
    chord_pcs: &[u8],
) -> Option<ChordVoicing> {
    let mut frets: [Option<u8>; 6] = [None; 6];

    for string in (1..=root_string).rev() {
        let fret = if string == root_string {
            Some(anchor)
        } else {
            choose_fret(open_pitch_class(string), anchor, max_fret, chord_pcs)
        };
        // frets[] reads low-to-high: string 6 lands at index 0
        frets[(6 - string) as usize] = fret;
    }

    let positions: Vec<StringFret> = (1..=6u8)
        .rev()
        .filter_map(|string| {
            frets[(6 - string) as usize].map(|fret| StringFret { string, fret })
        })
        .collect();
    if positions.len() < MIN_SOUNDED_STRINGS {
        return None;
    }

    Some(ChordVoicing {
        barre: detect_barre(&frets),
        frets,
        root_string,
        anchor_fret: anchor,
        positions,
    })
}

/// Pick the fret a string plays: the lowest chord tone inside the
/// anchor window, else the open string if it already sounds a chord
/// tone, else muted.
fn choose_fret(open: u8, anchor: u8, max_fret: u8, chord_pcs: &[u8]) -> Option<u8> {
    let high = anchor.saturating_add(FRET_WINDOW).min(max_fret);
    for fret in anchor..=high {
        if chord_pcs.contains(&transpose(open, fret as i8)) {
            return Some(fret);
        }
    }
    if chord_pcs.contains(&open) {
        return Some(0);
    }
    None
}

/// Find the single-finger bar in a fret assignment, if any.
fn detect_barre(frets: &[Option<u8>; 6]) -> Option<BarreInfo> {
    let barre_fret = frets
        .iter()
        .filter_map(|f| *f)
        .filter(|&f| f > 0)
        .min()?;

    let at_fret: Vec<u8> = (1..=6u8)
        .filter(|&string| frets[(6 - string) as usize] == Some(barre_fret))
        .collect();
    if at_fret.len() < 2 {
        return None;
    }

    // Span from the lowest-pitched to the highest-pitched string at the
    // barre fret; everything in between must be fretted at or above it.
    let from_string = *at_fret.iter().max()?;
    let to_string = *at_fret.iter().min()?;
    for string in to_string + 1..from_string {
        match frets[(6 - string) as usize] {
            Some(fret) if fret >= barre_fret => {}
            _ => return None,
        }
    }

    Some(BarreInfo {
        fret: barre_fret,
        from_string,
        to_string,
    })
}
