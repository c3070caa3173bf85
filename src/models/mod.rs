//! Models module for the staff exercise engine
//!
//! This module contains the data models used by the geometry resolver and
//! the exercise grading engine.

pub mod answer;
pub mod elements;
pub mod marks;
pub mod pitch;

// Re-export commonly used types
pub use answer::{CanonicalAnswer, ExerciseKind, KeySignatureEntry, ScaleDegree};
pub use elements::{AccidentalKind, Clef, Letter};
pub use marks::PlacedMark;
pub use pitch::PitchName;
