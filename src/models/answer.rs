//! Canonical answers and the built-in exercises
//!
//! An exercise is graded against exactly one canonical answer: an ordered
//! sequence of (letter, accidental) pairs for scales, or an unordered set of
//! (line, accidental) pairs for key signatures. Answers are immutable and
//! validated when built; a malformed answer is a configuration error at
//! setup time, never a runtime grading failure.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::geometry::{StaffLineIndex, STAFF_SLOTS};
use crate::models::elements::{AccidentalKind, Letter};

/// One step of an ordered scale answer, octave-agnostic
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleDegree {
    pub letter: Letter,
    pub accidental: AccidentalKind,
}

impl ScaleDegree {
    /// Label as it appears in grade reports, e.g. "F#"
    pub fn label(&self) -> String {
        format!("{}{}", self.letter, self.accidental.symbol())
    }
}

/// One accidental of an unordered key-signature answer, specific to the
/// staff line it occupies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySignatureEntry {
    pub line: StaffLineIndex,
    pub accidental: AccidentalKind,
}

impl KeySignatureEntry {
    /// Label as it appears in grade reports, e.g. "7#"
    pub fn label(&self) -> String {
        format!("{}{}", self.line.get(), self.accidental.symbol())
    }
}

/// The fixed correct answer an exercise attempt is graded against
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum CanonicalAnswer {
    /// Ordered sequence; comparison is position-indexed
    Scale { degrees: Vec<ScaleDegree> },

    /// Unordered set; comparison is membership
    KeySignature { entries: Vec<KeySignatureEntry> },
}

impl CanonicalAnswer {
    /// Build an ordered scale answer
    pub fn scale(degrees: Vec<ScaleDegree>) -> Result<Self, ConfigError> {
        if degrees.is_empty() {
            return Err(ConfigError::EmptyAnswer);
        }
        Ok(CanonicalAnswer::Scale { degrees })
    }

    /// Build an unordered key-signature answer
    ///
    /// Lines must be in range and distinct: two accidentals never share a
    /// staff slot in a key signature.
    pub fn key_signature(entries: Vec<KeySignatureEntry>) -> Result<Self, ConfigError> {
        if entries.is_empty() {
            return Err(ConfigError::EmptyAnswer);
        }
        for (i, entry) in entries.iter().enumerate() {
            if entry.line.get() >= STAFF_SLOTS {
                return Err(ConfigError::LineOutOfRange(entry.line.get()));
            }
            if entries[..i].iter().any(|prior| prior.line == entry.line) {
                return Err(ConfigError::DuplicateLine(entry.line.get()));
            }
        }
        Ok(CanonicalAnswer::KeySignature { entries })
    }

    /// Number of canonical entries; the score denominator
    pub fn len(&self) -> usize {
        match self {
            CanonicalAnswer::Scale { degrees } => degrees.len(),
            CanonicalAnswer::KeySignature { entries } => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The exercise drills the exam offers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExerciseKind {
    /// Enter the D major scale notes in order
    Scale,

    /// Place the sharps of the D major key signature
    KeySignature,
}

impl ExerciseKind {
    /// Parse an exercise kind from the name the UI layer uses
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        match text {
            "scale" => Ok(ExerciseKind::Scale),
            "key-signature" => Ok(ExerciseKind::KeySignature),
            other => Err(ConfigError::UnknownExerciseKind(other.to_string())),
        }
    }

    /// The canonical answer this exercise grades against
    pub fn canonical_answer(&self) -> CanonicalAnswer {
        match self {
            ExerciseKind::Scale => D_MAJOR_SCALE.clone(),
            ExerciseKind::KeySignature => D_MAJOR_KEY_SIGNATURE.clone(),
        }
    }

    /// Tool selection restored on reset
    ///
    /// Key-signature entry starts with sharp active (D major needs only
    /// sharps); scale entry starts with nothing selected.
    pub fn default_accidental(&self) -> Option<AccidentalKind> {
        match self {
            ExerciseKind::Scale => None,
            ExerciseKind::KeySignature => Some(AccidentalKind::Sharp),
        }
    }
}

const fn degree(letter: Letter, accidental: AccidentalKind) -> ScaleDegree {
    ScaleDegree { letter, accidental }
}

/// D major scale: D E F# G A B C#, octave-agnostic
static D_MAJOR_SCALE: Lazy<CanonicalAnswer> = Lazy::new(|| {
    CanonicalAnswer::scale(vec![
        degree(Letter::D, AccidentalKind::None),
        degree(Letter::E, AccidentalKind::None),
        degree(Letter::F, AccidentalKind::Sharp),
        degree(Letter::G, AccidentalKind::None),
        degree(Letter::A, AccidentalKind::None),
        degree(Letter::B, AccidentalKind::None),
        degree(Letter::C, AccidentalKind::Sharp),
    ])
    .expect("D major scale answer is well-formed")
});

/// D major key signature: sharps on lines 7 and 3 (F# and C# slots)
static D_MAJOR_KEY_SIGNATURE: Lazy<CanonicalAnswer> = Lazy::new(|| {
    CanonicalAnswer::key_signature(vec![
        KeySignatureEntry {
            line: StaffLineIndex::clamped(7),
            accidental: AccidentalKind::Sharp,
        },
        KeySignatureEntry {
            line: StaffLineIndex::clamped(3),
            accidental: AccidentalKind::Sharp,
        },
    ])
    .expect("D major key signature answer is well-formed")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_answer_rejects_empty() {
        assert_eq!(
            CanonicalAnswer::scale(vec![]),
            Err(ConfigError::EmptyAnswer)
        );
    }

    #[test]
    fn test_key_signature_rejects_duplicate_lines() {
        let entry = KeySignatureEntry {
            line: StaffLineIndex::clamped(7),
            accidental: AccidentalKind::Sharp,
        };
        let result = CanonicalAnswer::key_signature(vec![entry, entry]);
        assert_eq!(result, Err(ConfigError::DuplicateLine(7)));
    }

    #[test]
    fn test_builtin_answers_are_valid() {
        assert_eq!(ExerciseKind::Scale.canonical_answer().len(), 7);
        assert_eq!(ExerciseKind::KeySignature.canonical_answer().len(), 2);
    }

    #[test]
    fn test_exercise_kind_parse() {
        assert_eq!(ExerciseKind::parse("scale"), Ok(ExerciseKind::Scale));
        assert_eq!(
            ExerciseKind::parse("key-signature"),
            Ok(ExerciseKind::KeySignature)
        );
        assert!(ExerciseKind::parse("interval").is_err());
    }

    #[test]
    fn test_scale_degree_labels() {
        assert_eq!(degree(Letter::F, AccidentalKind::Sharp).label(), "F#");
        assert_eq!(degree(Letter::D, AccidentalKind::None).label(), "D");
    }
}
