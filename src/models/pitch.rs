//! Pitch names and the per-clef staff tables
//!
//! Each clef maps the 13 discrete staff slots (space above the staff down to
//! the space below the first ledger line) to fixed pitch names. The tables
//! are defined top-to-bottom, so index 0 is the highest slot.

use serde::{Deserialize, Serialize};

use crate::models::elements::{AccidentalKind, Letter};

/// A named pitch: letter plus octave
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PitchName {
    /// Letter name (C through B)
    pub letter: Letter,

    /// Scientific octave number (middle C = C4)
    pub octave: i8,
}

impl PitchName {
    /// Full notation with octave, e.g. "G4"
    pub fn notation(&self) -> String {
        format!("{}{}", self.letter, self.octave)
    }

    /// Letter plus accidental symbol, octave stripped, e.g. "F#"
    ///
    /// This is the unit of comparison for ordered (scale) grading.
    pub fn labeled(&self, accidental: AccidentalKind) -> String {
        format!("{}{}", self.letter, accidental.symbol())
    }
}

const fn pitch(letter: Letter, octave: i8) -> PitchName {
    PitchName { letter, octave }
}

/// Treble clef staff slots, top to bottom: G5 down to B3
pub const TREBLE_TABLE: [PitchName; 13] = [
    pitch(Letter::G, 5), // space above staff
    pitch(Letter::F, 5), // top line
    pitch(Letter::E, 5),
    pitch(Letter::D, 5),
    pitch(Letter::C, 5),
    pitch(Letter::B, 4),
    pitch(Letter::A, 4),
    pitch(Letter::G, 4), // middle staff line
    pitch(Letter::F, 4),
    pitch(Letter::E, 4), // bottom line
    pitch(Letter::D, 4),
    pitch(Letter::C, 4), // middle C ledger line
    pitch(Letter::B, 3),
];

/// Bass clef staff slots, top to bottom: B3 down to D2
pub const BASS_TABLE: [PitchName; 13] = [
    pitch(Letter::B, 3), // space above staff
    pitch(Letter::A, 3), // top line
    pitch(Letter::G, 3),
    pitch(Letter::F, 3),
    pitch(Letter::E, 3),
    pitch(Letter::D, 3),
    pitch(Letter::C, 3),
    pitch(Letter::B, 2), // middle staff line
    pitch(Letter::A, 2),
    pitch(Letter::G, 2), // bottom line
    pitch(Letter::F, 2),
    pitch(Letter::E, 2), // first ledger line below
    pitch(Letter::D, 2),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tables_have_no_duplicate_pitches() {
        for table in [&TREBLE_TABLE, &BASS_TABLE] {
            let unique: HashSet<_> = table.iter().collect();
            assert_eq!(unique.len(), 13);
        }
    }

    #[test]
    fn test_notation_includes_octave() {
        assert_eq!(TREBLE_TABLE[0].notation(), "G5");
        assert_eq!(BASS_TABLE[12].notation(), "D2");
    }

    #[test]
    fn test_labeled_strips_octave() {
        let f5 = TREBLE_TABLE[1];
        assert_eq!(f5.labeled(AccidentalKind::Sharp), "F#");
        assert_eq!(f5.labeled(AccidentalKind::None), "F");
    }
}
