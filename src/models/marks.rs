//! Placed marks
//!
//! A mark is one glyph the learner has put on the staff. Marks are owned
//! exclusively by the engine's session; the rendering layer only reads them.

use serde::{Deserialize, Serialize};

use crate::geometry::StaffLineIndex;
use crate::models::elements::AccidentalKind;

/// One mark the learner has placed on the staff
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedMark {
    /// Staff slot the mark occupies
    pub line: StaffLineIndex,

    /// Accidental the mark carries (`None` for a plain note)
    pub accidental: AccidentalKind,

    /// Position in the placement sequence; drives the drawing x-offset and
    /// the position-indexed scale comparison
    pub order: usize,
}

impl PlacedMark {
    pub fn new(line: StaffLineIndex, accidental: AccidentalKind, order: usize) -> Self {
        PlacedMark {
            line,
            accidental,
            order,
        }
    }

    /// Label for key-signature grading: line number plus accidental symbol,
    /// e.g. "7#"
    pub fn line_label(&self) -> String {
        format!("{}{}", self.line.get(), self.accidental.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_label() {
        let mark = PlacedMark::new(StaffLineIndex::clamped(7), AccidentalKind::Sharp, 0);
        assert_eq!(mark.line_label(), "7#");

        let plain = PlacedMark::new(StaffLineIndex::clamped(3), AccidentalKind::None, 1);
        assert_eq!(plain.line_label(), "3");
    }
}
