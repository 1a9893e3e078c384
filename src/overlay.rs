//! # Overlay Position Projector
//!
//! Merge chord-tone and scale-tone roles onto an instrument surface.
//!
//! A cell (string/fret on the fretboard, key on the keyboard) can be
//! reachable as the chord root, as another chord tone, and as a scale
//! tone at once. Each cell's candidates are reduced by fixed priority —
//! chord root over chord tone over scale — and the winning role keeps
//! its own characteristic/avoid flags; flags are never merged across
//! roles, so a chord tone that happens to be a scale's avoid note shows
//! no avoid marking.
//!
//! Display options filter and annotate the projection: hiding avoid
//! notes drops scale-role avoid cells entirely (chord roles always
//! stay), hiding characteristic notes clears the characteristic flag.

use serde::{Deserialize, Serialize};

use crate::chord::Chord;
use crate::error::TheoryError;
use crate::pitch::{transpose, Note};
use crate::scale::{scale_notes_with_spelling, spelling_for_scale, ScaleType};
use crate::voicing::open_pitch_class;

/// Number of keys in the fixed 2-octave keyboard projection.
pub const KEYBOARD_KEYS: u8 = 24;

/// Role of a projected position, in ascending display priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NoteRole {
    Scale,
    ChordTone,
    ChordRoot,
}

/// Fretboard/keyboard display options supplied by the rendering
/// collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayOptions {
    pub max_fret: u8,
    pub show_characteristic: bool,
    pub show_avoid: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            max_fret: 12,
            show_characteristic: true,
            show_avoid: true,
        }
    }
}

/// One annotated fretboard cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayPosition {
    pub string: u8,
    pub fret: u8,
    pub note: Note,
    pub role: NoteRole,
    pub is_characteristic: bool,
    pub is_avoid: bool,
}

/// One annotated key of the 2-octave keyboard projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyboardPosition {
    pub key_index: u8,
    pub note: Note,
    pub role: NoteRole,
    pub is_characteristic: bool,
    pub is_avoid: bool,
}

/// A resolved role for one pitch class, before placement on a surface.
#[derive(Debug, Clone)]
struct ResolvedRole {
    note: Note,
    role: NoteRole,
    is_characteristic: bool,
    is_avoid: bool,
}

/// Scale context resolved once per projection.
struct ScaleContext {
    notes: Vec<Note>,
    characteristic: Vec<u8>,
    avoid: Vec<u8>,
}

impl ScaleContext {
    fn resolve(root_name: &str, scale: ScaleType) -> Result<Self, TheoryError> {
        let spelling = spelling_for_scale(root_name, scale);
        let notes = scale_notes_with_spelling(root_name, scale, spelling)?;
        let root_pc = notes[0].pitch_class;
        let characteristic = scale
            .characteristic_offsets()
            .iter()
            .map(|&step| (root_pc + step) % 12)
            .collect();
        let avoid = scale
            .avoid_offsets()
            .iter()
            .map(|&step| (root_pc + step) % 12)
            .collect();
        Ok(Self {
            notes,
            characteristic,
            avoid,
        })
    }
}

/// Project chord and scale tones onto every string/fret cell up to
/// `options.max_fret`, strings bass-first, frets ascending.
pub fn fretboard_overlay(
    chord: &Chord,
    scale: Option<(ScaleType, &str)>,
    options: &DisplayOptions,
) -> Result<Vec<OverlayPosition>, TheoryError> {
    let scale_ctx = scale
        .map(|(scale_type, root_name)| ScaleContext::resolve(root_name, scale_type))
        .transpose()?;

    let mut out = Vec::new();
    for string in (1..=6u8).rev() {
        let open = open_pitch_class(string);
        for fret in 0..=options.max_fret {
            let pc = transpose(open, (fret % 12) as i8);
            if let Some(resolved) = resolve_cell(pc, chord, scale_ctx.as_ref(), options) {
                out.push(OverlayPosition {
                    string,
                    fret,
                    note: resolved.note,
                    role: resolved.role,
                    is_characteristic: resolved.is_characteristic,
                    is_avoid: resolved.is_avoid,
                });
            }
        }
    }
    Ok(out)
}

/// Project chord and scale tones onto the fixed 2-octave keyboard, keys
/// ascending from the layout's C.
pub fn keyboard_overlay(
    chord: &Chord,
    scale: Option<(ScaleType, &str)>,
    options: &DisplayOptions,
) -> Result<Vec<KeyboardPosition>, TheoryError> {
    let scale_ctx = scale
        .map(|(scale_type, root_name)| ScaleContext::resolve(root_name, scale_type))
        .transpose()?;

    let mut out = Vec::new();
    for key_index in 0..KEYBOARD_KEYS {
        let pc = key_index % 12;
        if let Some(resolved) = resolve_cell(pc, chord, scale_ctx.as_ref(), options) {
            out.push(KeyboardPosition {
                key_index,
                note: resolved.note,
                role: resolved.role,
                is_characteristic: resolved.is_characteristic,
                is_avoid: resolved.is_avoid,
            });
        }
    }
    Ok(out)
}

/// Reduce one pitch class to its winning role, applying the display
/// filters. Returns `None` for cells outside both the chord and the
/// scale, or filtered out by the options.
fn resolve_cell(
    pc: u8,
    chord: &Chord,
    scale_ctx: Option<&ScaleContext>,
    options: &DisplayOptions,
) -> Option<ResolvedRole> {
    let mut candidates: Vec<ResolvedRole> = Vec::new();

    if let Some(note) = chord.notes.iter().find(|n| n.pitch_class == pc) {
        let role = if pc == chord.root.pitch_class {
            NoteRole::ChordRoot
        } else {
            NoteRole::ChordTone
        };
        candidates.push(ResolvedRole {
            note: note.clone(),
            role,
            is_characteristic: false,
            is_avoid: false,
        });
    }

    if let Some(ctx) = scale_ctx {
        if let Some(note) = ctx.notes.iter().find(|n| n.pitch_class == pc) {
            candidates.push(ResolvedRole {
                note: note.clone(),
                role: NoteRole::Scale,
                is_characteristic: ctx.characteristic.contains(&pc),
                is_avoid: ctx.avoid.contains(&pc),
            });
        }
    }

    // Priority reduction: the highest role wins and keeps its own flags
    let winner = candidates.into_iter().max_by_key(|c| c.role)?;

    if winner.role == NoteRole::Scale && winner.is_avoid && !options.show_avoid {
        return None;
    }
    let is_characteristic = winner.is_characteristic && options.show_characteristic;
    Some(ResolvedRole {
        is_characteristic,
        ..winner
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::ChordQuality;

    fn cell<'a>(
        positions: &'a [OverlayPosition],
        string: u8,
        fret: u8,
    ) -> Option<&'a OverlayPosition> {
        positions.iter().find(|p| p.string == string && p.fret == fret)
    }

    #[test]
    fn test_chord_root_outranks_scale() {
        let chord = Chord::new("C", ChordQuality::Major).unwrap();
        let options = DisplayOptions::default();
        let positions =
            fretboard_overlay(&chord, Some((ScaleType::Major, "C")), &options).unwrap();

        // A-string fret 3 is C: the chord root, not a plain scale tone
        let c_cell = cell(&positions, 5, 3).unwrap();
        assert_eq!(c_cell.role, NoteRole::ChordRoot);
        assert_eq!(c_cell.note.name, "C");
    }

    #[test]
    fn test_chord_tone_flags_never_come_from_scale_entry() {
        // F major over the C major scale: F is both the chord root and
        // the scale's avoid note. The chord entry wins and carries its
        // own (clear) flags.
        let chord = Chord::new("F", ChordQuality::Major).unwrap();
        let options = DisplayOptions::default();
        let positions =
            fretboard_overlay(&chord, Some((ScaleType::Major, "C")), &options).unwrap();

        let f_cell = cell(&positions, 6, 1).unwrap(); // low F
        assert_eq!(f_cell.role, NoteRole::ChordRoot);
        assert!(!f_cell.is_avoid);
        assert!(!f_cell.is_characteristic);

        // A (chord tone) at fret 5 on the low E string
        let a_cell = cell(&positions, 6, 5).unwrap();
        assert_eq!(a_cell.role, NoteRole::ChordTone);
        assert!(!a_cell.is_avoid);
    }

    #[test]
    fn test_scale_cells_carry_annotations() {
        let chord = Chord::new("G", ChordQuality::Dominant7).unwrap();
        let options = DisplayOptions::default();
        let positions =
            fretboard_overlay(&chord, Some((ScaleType::Mixolydian, "G")), &options).unwrap();

        // A (scale tone, pc 9) on the low E string fret 5
        let a_cell = cell(&positions, 6, 5).unwrap();
        assert_eq!(a_cell.role, NoteRole::Scale);
        assert!(!a_cell.is_characteristic);

        // C (pc 0) is mixolydian's avoid 4th; fret 8 on the low E string
        let c_cell = cell(&positions, 6, 8).unwrap();
        assert_eq!(c_cell.role, NoteRole::Scale);
        assert!(c_cell.is_avoid);
    }

    #[test]
    fn test_hide_avoid_drops_scale_cells_only() {
        let chord = Chord::new("G", ChordQuality::Dominant7).unwrap();
        let options = DisplayOptions {
            show_avoid: false,
            ..DisplayOptions::default()
        };
        let positions =
            fretboard_overlay(&chord, Some((ScaleType::Mixolydian, "G")), &options).unwrap();

        // The avoid 4th (C) disappears from scale cells
        assert!(cell(&positions, 6, 8).is_none());
        // Chord tones still render
        assert!(cell(&positions, 6, 3).is_some()); // G root
    }

    #[test]
    fn test_hide_characteristic_clears_flag_without_dropping() {
        let chord = Chord::new("F", ChordQuality::Major7).unwrap();
        let options = DisplayOptions {
            show_characteristic: false,
            ..DisplayOptions::default()
        };
        let positions =
            fretboard_overlay(&chord, Some((ScaleType::Lydian, "F")), &options).unwrap();

        // B (pc 11), F lydian's raised 4th: still present, flag cleared
        let b_cell = cell(&positions, 5, 2).unwrap();
        assert_eq!(b_cell.role, NoteRole::Scale);
        assert!(!b_cell.is_characteristic);
    }

    #[test]
    fn test_open_strings_project() {
        let chord = Chord::new("E", ChordQuality::Minor).unwrap();
        let options = DisplayOptions::default();
        let positions = fretboard_overlay(&chord, None, &options).unwrap();

        // Both E strings sound the root open
        assert_eq!(cell(&positions, 6, 0).unwrap().role, NoteRole::ChordRoot);
        assert_eq!(cell(&positions, 1, 0).unwrap().role, NoteRole::ChordRoot);
        // The open B string is the chord's fifth
        assert_eq!(cell(&positions, 2, 0).unwrap().role, NoteRole::ChordTone);
    }

    #[test]
    fn test_keyboard_covers_both_octaves() {
        let chord = Chord::new("C", ChordQuality::Major).unwrap();
        let options = DisplayOptions::default();
        let keys = keyboard_overlay(&chord, Some((ScaleType::Major, "C")), &options).unwrap();

        let roots: Vec<u8> = keys
            .iter()
            .filter(|k| k.role == NoteRole::ChordRoot)
            .map(|k| k.key_index)
            .collect();
        assert_eq!(roots, vec![0, 12]);

        // Every C-major scale pitch class appears twice across 24 keys
        assert_eq!(keys.len(), 14);
    }

    #[test]
    fn test_overlay_is_idempotent() {
        let chord = Chord::new("A", ChordQuality::Minor7).unwrap();
        let options = DisplayOptions::default();
        let a = fretboard_overlay(&chord, Some((ScaleType::Dorian, "A")), &options).unwrap();
        let b = fretboard_overlay(&chord, Some((ScaleType::Dorian, "A")), &options).unwrap();
        assert_eq!(a, b);
    }
}
