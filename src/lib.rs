pub mod chord;
pub mod compat;
pub mod error;
pub mod harmony;
pub mod overlay;
pub mod pitch;
pub mod scale;
pub mod voicing;

use serde::Serialize;

pub use chord::{parse_chord_symbol, Chord, ChordQuality};
pub use compat::{available_scales, AvailableScaleInfo, ChordSource};
pub use error::TheoryError;
pub use harmony::{
    diatonic_chords, interchange_groups, secondary_dominants, ChordFunction, ChordType,
    DiatonicChordInfo, DominantPairInfo, InterchangeChordInfo, InterchangeGroup,
};
pub use overlay::{
    fretboard_overlay, keyboard_overlay, DisplayOptions, KeyboardPosition, NoteRole,
    OverlayPosition,
};
pub use pitch::{note_name_to_pitch_class, Note, NoteSpelling};
pub use scale::{scale_notes, ScaleType};
pub use voicing::{common_voicings, find_chord_positions, BarreInfo, ChordVoicing};

use pitch::spelling_for_key;

/// Every chord palette a key selection offers, derived in one call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyHarmony {
    pub key_root: Note,
    pub chord_type: ChordType,
    pub diatonic: Vec<DiatonicChordInfo>,
    pub interchange: Vec<InterchangeGroup>,
    pub dominants: Vec<DominantPairInfo>,
}

/// Derive the full harmonic palette for a key and chord-type selection.
/// This is the main entry point for key-level derivation; per-chord
/// queries (compatible scales, voicings, overlays) live in their own
/// modules.
pub fn harmonize_key(key_root: &str, chord_type: ChordType) -> Result<KeyHarmony, TheoryError> {
    let key_pc = note_name_to_pitch_class(key_root)?;
    let diatonic = diatonic_chords(key_root, chord_type)?;
    let interchange = interchange_groups(key_root, chord_type)?;
    let dominants = secondary_dominants(key_root)?;
    Ok(KeyHarmony {
        key_root: Note::from_pitch_class(key_pc, spelling_for_key(key_root)),
        chord_type,
        diatonic,
        interchange,
        dominants,
    })
}
