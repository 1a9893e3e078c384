//! # Error Types
//!
//! This module defines the error type for the fretwise engine.
//!
//! The engine is total over its closed enumerations (chord qualities,
//! scale types, note roles): passing an out-of-range value is impossible
//! by construction. The only runtime-recoverable failure is an
//! unparseable note name supplied by a caller. A chord quality with no
//! registered fretboard shape is *not* an error — the voicing search
//! returns an empty result for it (see `voicing`).
//!
//! ## Usage
//! ```rust
//! use fretwise::{Chord, ChordQuality, TheoryError};
//!
//! match Chord::new("H", ChordQuality::Major) {
//!     Err(TheoryError::InvalidNoteName { name }) => assert_eq!(name, "H"),
//!     other => panic!("expected InvalidNoteName, got {:?}", other),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TheoryError {
    /// Unrecognized note name.
    ///
    /// Occurs when a root or note string is not a letter A-G with an
    /// optional single `#` or `b` accidental.
    ///
    /// # Example
    /// ```
    /// # use fretwise::TheoryError;
    /// let err = TheoryError::InvalidNoteName { name: "X#".to_string() };
    /// assert_eq!(err.to_string(), "Invalid note name: 'X#' (expected A-G with optional # or b)");
    /// ```
    #[error("Invalid note name: '{name}' (expected A-G with optional # or b)")]
    InvalidNoteName { name: String },
}
