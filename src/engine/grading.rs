//! Grading of a placed-mark sequence against a canonical answer
//!
//! Two comparison modes share one result shape. Scale answers are ordered:
//! position i of the learner's sequence is compared against position i of
//! the answer, octave stripped. Key-signature answers are unordered: only
//! set membership of (line, accidental) pairs matters.

use serde::{Deserialize, Serialize};

use crate::geometry::pitch_for_line;
use crate::models::{CanonicalAnswer, Clef, KeySignatureEntry, PlacedMark, ScaleDegree};

/// Outcome of one submission, immutable once produced
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeResult {
    /// Labels the learner placed that matched the answer
    pub correct: Vec<String>,

    /// Labels the learner placed that did not match
    pub incorrect: Vec<String>,

    /// Answer labels the learner failed to supply
    pub missing: Vec<String>,

    /// `round(100 * correct / answer_len)`, clamped to [0, 100]
    pub score: u8,
}

/// Grade a mark sequence against the canonical answer
pub fn grade(marks: &[PlacedMark], clef: Clef, answer: &CanonicalAnswer) -> GradeResult {
    match answer {
        CanonicalAnswer::Scale { degrees } => grade_ordered(marks, clef, degrees),
        CanonicalAnswer::KeySignature { entries } => grade_unordered(marks, entries),
    }
}

/// Position-indexed comparison for scale answers
///
/// The unit of comparison is the position, not pitch identity: an extra or
/// missing early note misaligns every later position, and a canonical entry
/// whose position mismatches is counted both incorrect (the learner's label)
/// and missing (the expected label). Both behaviors are deliberate.
fn grade_ordered(marks: &[PlacedMark], clef: Clef, degrees: &[ScaleDegree]) -> GradeResult {
    let mut correct = Vec::new();
    let mut incorrect = Vec::new();
    let mut missing = Vec::new();

    for (i, mark) in marks.iter().enumerate() {
        let pitch = pitch_for_line(mark.line, clef);
        let label = pitch.labeled(mark.accidental);
        let matches = degrees
            .get(i)
            .map(|d| d.letter == pitch.letter && d.accidental == mark.accidental)
            .unwrap_or(false);
        if matches {
            correct.push(label);
        } else {
            incorrect.push(label);
        }
    }

    for (i, degree) in degrees.iter().enumerate() {
        let matched = marks
            .get(i)
            .map(|mark| {
                let pitch = pitch_for_line(mark.line, clef);
                degree.letter == pitch.letter && degree.accidental == mark.accidental
            })
            .unwrap_or(false);
        if !matched {
            missing.push(degree.label());
        }
    }

    let score = score(correct.len(), degrees.len());
    GradeResult {
        correct,
        incorrect,
        missing,
        score,
    }
}

/// Set-membership comparison for key-signature answers
///
/// Order and duplicates beyond membership are irrelevant; labels pair the
/// staff line with the accidental symbol, so the octave is fixed by the
/// line itself.
fn grade_unordered(marks: &[PlacedMark], entries: &[KeySignatureEntry]) -> GradeResult {
    let canonical: Vec<String> = entries.iter().map(|e| e.label()).collect();

    let mut correct = Vec::new();
    let mut incorrect = Vec::new();
    for mark in marks {
        let label = mark.line_label();
        if canonical.contains(&label) {
            correct.push(label);
        } else {
            incorrect.push(label);
        }
    }

    let placed: Vec<String> = marks.iter().map(|m| m.line_label()).collect();
    let missing: Vec<String> = canonical
        .iter()
        .filter(|label| !placed.contains(label))
        .cloned()
        .collect();

    let score = score(correct.len(), entries.len());
    GradeResult {
        correct,
        incorrect,
        missing,
        score,
    }
}

/// Percentage score over the canonical answer's size
///
/// The denominator is the answer's size, not the submission's, and the
/// result is clamped so duplicate correct placements cannot exceed 100.
fn score(correct_count: usize, canonical_len: usize) -> u8 {
    if canonical_len == 0 {
        return 0;
    }
    let pct = (100.0 * correct_count as f64 / canonical_len as f64).round();
    pct.min(100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::StaffLineIndex;
    use crate::models::{AccidentalKind, ExerciseKind};

    fn mark(line: u8, accidental: AccidentalKind, order: usize) -> PlacedMark {
        PlacedMark::new(StaffLineIndex::clamped(line as i32), accidental, order)
    }

    /// Treble slots for the D major scale starting on D4: D4 E4 F4 G4 A4 B4 C5
    const D_MAJOR_SLOTS: [u8; 7] = [10, 9, 8, 7, 6, 5, 4];

    fn d_major_scale_marks() -> Vec<PlacedMark> {
        let accidentals = [
            AccidentalKind::None,
            AccidentalKind::None,
            AccidentalKind::Sharp,
            AccidentalKind::None,
            AccidentalKind::None,
            AccidentalKind::None,
            AccidentalKind::Sharp,
        ];
        D_MAJOR_SLOTS
            .iter()
            .zip(accidentals)
            .enumerate()
            .map(|(i, (&slot, acc))| mark(slot, acc, i))
            .collect()
    }

    #[test]
    fn test_exact_scale_scores_100() {
        let answer = ExerciseKind::Scale.canonical_answer();
        let result = grade(&d_major_scale_marks(), Clef::Treble, &answer);
        assert_eq!(result.score, 100);
        assert!(result.missing.is_empty());
        assert!(result.incorrect.is_empty());
        assert_eq!(result.correct.len(), 7);
    }

    #[test]
    fn test_scale_is_octave_agnostic() {
        // Same scale an octave higher: D5 E5 F5 G5 A5-ish is off the grid,
        // so use the upper positions that exist: D5=3, E5=2, F5=1, G5=0.
        // Only the first four degrees fit; they should all be correct.
        let marks = vec![
            mark(3, AccidentalKind::None, 0),
            mark(2, AccidentalKind::None, 1),
            mark(1, AccidentalKind::Sharp, 2),
            mark(0, AccidentalKind::None, 3),
        ];
        let answer = ExerciseKind::Scale.canonical_answer();
        let result = grade(&marks, Clef::Treble, &answer);
        assert_eq!(result.correct.len(), 4);
        assert!(result.incorrect.is_empty());
        assert_eq!(result.missing.len(), 3);
    }

    #[test]
    fn test_scale_misalignment_cascades() {
        // Correct through position 2, then a stray B inserted at position 3
        // pushes G A B C# to positions 4-7. Positions 3-6 of the answer all
        // mismatch even though the right pitches were placed.
        let mut marks = d_major_scale_marks();
        marks.insert(3, mark(5, AccidentalKind::None, 0));
        for (i, m) in marks.iter_mut().enumerate() {
            m.order = i;
        }

        let answer = ExerciseKind::Scale.canonical_answer();
        let result = grade(&marks, Clef::Treble, &answer);

        assert_eq!(result.correct.len(), 3);
        // 8 marks, 5 of them off-position
        assert_eq!(result.incorrect.len(), 5);
        assert_eq!(result.missing, vec!["G", "A", "B", "C#"]);
        assert_eq!(result.score, 43); // round(100 * 3/7)
    }

    #[test]
    fn test_scale_mismatch_counts_incorrect_and_missing() {
        // One mark, wrong pitch: the canonical D is both unmatched (missing)
        // and the placed E is incorrect.
        let marks = vec![mark(9, AccidentalKind::None, 0)];
        let answer = ExerciseKind::Scale.canonical_answer();
        let result = grade(&marks, Clef::Treble, &answer);
        assert_eq!(result.incorrect, vec!["E"]);
        assert_eq!(result.missing.first().map(String::as_str), Some("D"));
        assert_eq!(result.missing.len(), 7);
    }

    #[test]
    fn test_scale_accidental_must_match() {
        // F natural where F# is expected
        let mut marks = d_major_scale_marks();
        marks[2].accidental = AccidentalKind::None;
        let answer = ExerciseKind::Scale.canonical_answer();
        let result = grade(&marks, Clef::Treble, &answer);
        assert_eq!(result.correct.len(), 6);
        assert_eq!(result.incorrect, vec!["F"]);
        assert!(result.missing.contains(&"F#".to_string()));
        assert_eq!(result.score, 86); // round(100 * 6/7)
    }

    #[test]
    fn test_key_signature_full_marks() {
        let marks = vec![
            mark(3, AccidentalKind::Sharp, 0),
            mark(7, AccidentalKind::Sharp, 1),
        ];
        let answer = ExerciseKind::KeySignature.canonical_answer();
        let result = grade(&marks, Clef::Treble, &answer);
        assert_eq!(result.score, 100);
        assert!(result.missing.is_empty());
        assert!(result.incorrect.is_empty());
    }

    #[test]
    fn test_key_signature_order_is_irrelevant() {
        let forward = vec![
            mark(7, AccidentalKind::Sharp, 0),
            mark(3, AccidentalKind::Sharp, 1),
        ];
        let backward = vec![
            mark(3, AccidentalKind::Sharp, 0),
            mark(7, AccidentalKind::Sharp, 1),
        ];
        let answer = ExerciseKind::KeySignature.canonical_answer();
        let a = grade(&forward, Clef::Treble, &answer);
        let b = grade(&backward, Clef::Treble, &answer);
        assert_eq!(a.score, 100);
        assert_eq!(b.score, 100);
    }

    #[test]
    fn test_key_signature_half_right() {
        let marks = vec![mark(7, AccidentalKind::Sharp, 0)];
        let answer = ExerciseKind::KeySignature.canonical_answer();
        let result = grade(&marks, Clef::Treble, &answer);
        assert_eq!(result.score, 50);
        assert_eq!(result.correct, vec!["7#"]);
        assert_eq!(result.missing, vec!["3#"]);
    }

    #[test]
    fn test_key_signature_wrong_accidental_is_incorrect() {
        let marks = vec![mark(7, AccidentalKind::Flat, 0)];
        let answer = ExerciseKind::KeySignature.canonical_answer();
        let result = grade(&marks, Clef::Treble, &answer);
        assert_eq!(result.incorrect, vec!["7b"]);
        assert_eq!(result.missing.len(), 2);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_score_clamped_at_100() {
        // Duplicate correct placements must not push the score past 100.
        let marks = vec![
            mark(7, AccidentalKind::Sharp, 0),
            mark(7, AccidentalKind::Sharp, 1),
            mark(3, AccidentalKind::Sharp, 2),
        ];
        let answer = ExerciseKind::KeySignature.canonical_answer();
        let result = grade(&marks, Clef::Treble, &answer);
        assert_eq!(result.score, 100);
    }
}
