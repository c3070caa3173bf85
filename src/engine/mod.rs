//! Exercise engine
//!
//! Owns the mutable placement state for one exercise attempt and drives the
//! grading. Every operation is total: invalid calls (placing past the mark
//! limit, submitting an empty attempt, editing after submission, erasing
//! with nothing in range) are silent no-ops, never errors.
//!
//! State machine: `Editing` -> (`submit`, marks non-empty) -> `Submitted`
//! -> (`reset`) -> `Editing`. `Submitted` is terminal except for `reset`.

pub mod grading;

pub use grading::GradeResult;

use crate::geometry::{MarkLayout, StaffGeometry};
use crate::models::{AccidentalKind, CanonicalAnswer, Clef, ExerciseKind, PlacedMark};

/// Most key signatures have at most 7 sharps or flats
pub const MAX_MARKS: usize = 7;

/// One exercise attempt: placement state plus the grading trigger
///
/// Created fresh per exercise instance; the UI layer mutates it only through
/// the operations below and reads `marks()` to render glyphs.
#[derive(Clone, Debug)]
pub struct ExerciseEngine {
    kind: ExerciseKind,
    answer: CanonicalAnswer,
    clef: Clef,
    geometry: StaffGeometry,
    layout: MarkLayout,
    marks: Vec<PlacedMark>,
    selected_accidental: Option<AccidentalKind>,
    erase_mode: bool,
    submitted: bool,
    result: Option<GradeResult>,
}

impl ExerciseEngine {
    /// Create an engine for one of the built-in exercises
    pub fn new(kind: ExerciseKind, clef: Clef) -> Self {
        Self::with_geometry(kind, clef, StaffGeometry::default(), MarkLayout::default())
    }

    /// Create an engine with collaborator-supplied staff geometry
    pub fn with_geometry(
        kind: ExerciseKind,
        clef: Clef,
        geometry: StaffGeometry,
        layout: MarkLayout,
    ) -> Self {
        ExerciseEngine {
            kind,
            answer: kind.canonical_answer(),
            clef,
            geometry,
            layout,
            marks: Vec::new(),
            selected_accidental: kind.default_accidental(),
            erase_mode: false,
            submitted: false,
            result: None,
        }
    }

    // ------------------------------------------------------------------
    // Read access for the rendering layer
    // ------------------------------------------------------------------

    pub fn kind(&self) -> ExerciseKind {
        self.kind
    }

    pub fn clef(&self) -> Clef {
        self.clef
    }

    pub fn marks(&self) -> &[PlacedMark] {
        &self.marks
    }

    pub fn selected_accidental(&self) -> Option<AccidentalKind> {
        self.selected_accidental
    }

    pub fn erase_mode(&self) -> bool {
        self.erase_mode
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn grade_result(&self) -> Option<&GradeResult> {
        self.result.as_ref()
    }

    pub fn geometry(&self) -> &StaffGeometry {
        &self.geometry
    }

    pub fn layout(&self) -> &MarkLayout {
        &self.layout
    }

    // ------------------------------------------------------------------
    // Tool state
    // ------------------------------------------------------------------

    /// Set the active accidental; leaves erase mode, since a learner is
    /// either placing or erasing, never both. No-op after submit.
    pub fn select_accidental(&mut self, kind: AccidentalKind) {
        if self.submitted {
            return;
        }
        self.selected_accidental = Some(kind);
        self.erase_mode = false;
    }

    /// Flip erase mode; entering it clears the accidental selection.
    /// No-op after submit.
    pub fn toggle_erase_mode(&mut self) {
        if self.submitted {
            return;
        }
        self.erase_mode = !self.erase_mode;
        if self.erase_mode {
            self.selected_accidental = None;
        }
    }

    /// Switch the clef. Marks are line-indexed, so they survive the switch.
    /// No-op after submit.
    pub fn set_clef(&mut self, clef: Clef) {
        if self.submitted {
            return;
        }
        self.clef = clef;
    }

    // ------------------------------------------------------------------
    // Placement
    // ------------------------------------------------------------------

    /// Single entry point for a staff click, in the collaborator's scaled
    /// pixel space: erases the nearest mark in erase mode, otherwise places
    /// a new mark on the resolved line. No-op after submission, since a
    /// submitted attempt's marks are frozen.
    pub fn handle_click(&mut self, x: f64, y: f64) {
        if self.submitted {
            return;
        }
        if self.erase_mode {
            self.erase_nearest(x, y);
        } else {
            self.place(y);
        }
    }

    fn place(&mut self, y: f64) {
        if self.marks.len() >= MAX_MARKS {
            return;
        }
        let accidental = match self.kind {
            // A key signature entry is an accidental; one must be active.
            ExerciseKind::KeySignature => match self.selected_accidental {
                Some(kind) => kind,
                None => return,
            },
            // A scale note may carry no accidental at all.
            ExerciseKind::Scale => self.selected_accidental.unwrap_or(AccidentalKind::None),
        };
        let line = self.geometry.line_from_y(y);
        let order = self.marks.len();
        self.marks.push(PlacedMark::new(line, accidental, order));
    }

    /// Nearest-neighbor delete: marks are drawn at sequential x-offsets, not
    /// snapped to a click-aligned grid, so the erase click is matched against
    /// each mark's rendered position and the closest one within the erase
    /// radius is removed.
    fn erase_nearest(&mut self, x: f64, y: f64) {
        if self.marks.is_empty() {
            return;
        }

        let click_x = x / self.geometry.scale_factor;
        let click_y = y / self.geometry.scale_factor;

        let mut closest_index = 0;
        let mut closest_distance = f64::INFINITY;
        for (index, mark) in self.marks.iter().enumerate() {
            let (mark_x, mark_y) = self.layout.mark_position(mark.order, mark.line, &self.geometry);
            let distance = ((click_x - mark_x).powi(2) + (click_y - mark_y).powi(2)).sqrt();
            if distance < closest_distance {
                closest_distance = distance;
                closest_index = index;
            }
        }

        if closest_distance < self.layout.erase_radius {
            self.marks.remove(closest_index);
            // Surviving marks slide left; keep order equal to sequence index
            // so the drawing formula compacts the row.
            for (index, mark) in self.marks.iter_mut().enumerate() {
                mark.order = index;
            }
        }
    }

    /// Empty the marks; allowed only while editing
    pub fn clear_all(&mut self) {
        if self.submitted {
            return;
        }
        self.marks.clear();
    }

    // ------------------------------------------------------------------
    // Submission
    // ------------------------------------------------------------------

    /// Grade the attempt and freeze the session
    ///
    /// Returns `None` without any state change if the attempt is empty or
    /// already submitted. Irreversible except via [`reset`](Self::reset).
    pub fn submit(&mut self) -> Option<&GradeResult> {
        if self.submitted || self.marks.is_empty() {
            return None;
        }
        let result = grading::grade(&self.marks, self.clef, &self.answer);
        self.result = Some(result);
        self.submitted = true;
        self.result.as_ref()
    }

    /// Return the session to its initial state
    pub fn reset(&mut self) {
        self.marks.clear();
        self.submitted = false;
        self.result = None;
        self.erase_mode = false;
        self.selected_accidental = self.kind.default_accidental();
    }
}
