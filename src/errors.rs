//! Error types for exercise configuration
//!
//! Engine operations themselves are total and never fail at runtime; the
//! only real failure class is a construction-time contract violation, which
//! surfaces here when an exercise is set up.

use thiserror::Error;

/// Configuration errors raised while building an exercise
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Canonical answer has no entries, nothing could ever be graded
    #[error("canonical answer is empty")]
    EmptyAnswer,

    /// Key-signature answer references a staff line outside the 13-slot grid
    #[error("staff line {0} out of range (valid: 0-12)")]
    LineOutOfRange(u8),

    /// Key-signature answer places two accidentals on the same line
    #[error("duplicate staff line {0} in key signature answer")]
    DuplicateLine(u8),

    /// Clef name from the UI layer was not recognized
    #[error("unknown clef: {0}")]
    UnknownClef(String),

    /// Accidental name from the UI layer was not recognized
    #[error("unknown accidental: {0}")]
    UnknownAccidental(String),

    /// Exercise kind from the UI layer was not recognized
    #[error("unknown exercise kind: {0}")]
    UnknownExerciseKind(String),
}
