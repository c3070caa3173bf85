//! Staff geometry resolver
//!
//! Pure, stateless conversion between the UI's pixel space, the staff's
//! discrete 13-slot line grid, and named pitches per clef. The line index is
//! the canonical discrete unit: hit-testing, grading, and glyph placement all
//! go through it, so none of them depend on the rendering scale factor.
//!
//! The staff constants are configuration handed in by the rendering layer,
//! not computed here. The defaults match the web UI's stave: a 1.5x CSS
//! scale, staff top at y=76.67 in unscaled coordinates, and 5px between
//! adjacent line/space slots.

use serde::{Deserialize, Serialize};

use crate::models::{Clef, PitchName};

/// Number of discrete vertical slots per clef
pub const STAFF_SLOTS: u8 = 13;

/// Table index used when a lookup somehow lands out of range
///
/// Index 7 is the middle staff line (G4 in treble, B2 in bass).
const FALLBACK_SLOT: usize = 7;

/// Discrete vertical position on the staff, always in [0, 12]
///
/// Slot 0 is the space above the staff; slot 12 the space below the first
/// ledger line. Construction clamps, so a value out of range cannot exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaffLineIndex(u8);

impl StaffLineIndex {
    /// Clamp an arbitrary signed slot number into the valid range
    pub fn clamped(raw: i32) -> Self {
        StaffLineIndex(raw.clamp(0, (STAFF_SLOTS - 1) as i32) as u8)
    }

    /// The slot number, guaranteed in [0, 12]
    pub fn get(&self) -> u8 {
        self.0
    }
}

/// Staff pixel-space constants supplied by the rendering layer
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StaffGeometry {
    /// CSS scale applied to the rendered staff (click coordinates arrive scaled)
    pub scale_factor: f64,

    /// Y of slot 0 in unscaled coordinates
    pub staff_top_offset: f64,

    /// Vertical distance between adjacent slots in unscaled coordinates
    pub line_spacing: f64,
}

impl Default for StaffGeometry {
    fn default() -> Self {
        StaffGeometry {
            scale_factor: 1.5,
            staff_top_offset: 76.67,
            line_spacing: 5.0,
        }
    }
}

impl StaffGeometry {
    /// Resolve a click Y (in scaled pixel space) to the nearest staff slot
    ///
    /// Total function: any pixel, however far outside the staff, resolves to
    /// the nearest valid slot. Rounding happens only in this direction.
    pub fn line_from_y(&self, y: f64) -> StaffLineIndex {
        let unscaled = y / self.scale_factor;
        let relative = unscaled - self.staff_top_offset;
        StaffLineIndex::clamped((relative / self.line_spacing).round() as i32)
    }

    /// Exact Y (in scaled pixel space) of a staff slot
    ///
    /// Inverse of [`line_from_y`](Self::line_from_y); used both for
    /// hit-testing and for placing rendered glyphs.
    pub fn y_from_line(&self, line: StaffLineIndex) -> f64 {
        (self.staff_top_offset + line.get() as f64 * self.line_spacing) * self.scale_factor
    }

    /// Y of a staff slot in unscaled coordinates
    pub fn unscaled_y(&self, line: StaffLineIndex) -> f64 {
        self.staff_top_offset + line.get() as f64 * self.line_spacing
    }
}

/// Look up the pitch name for a staff slot under the given clef
///
/// Constant-time table lookup. Clamping means out-of-range input should
/// never occur; if it somehow does, the middle staff line's entry is
/// returned rather than failing.
pub fn pitch_for_line(line: StaffLineIndex, clef: Clef) -> PitchName {
    let table = clef.pitch_table();
    *table
        .get(line.get() as usize)
        .unwrap_or(&table[FALLBACK_SLOT])
}

/// Horizontal layout of placed marks, plus the erase hit radius
///
/// Marks are drawn at sequential x-offsets rather than snapped to a
/// click-aligned grid, which is why erasing is a nearest-neighbor search
/// and not an exact-cell lookup.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkLayout {
    /// X of the first mark in unscaled coordinates
    pub x_origin: f64,

    /// Horizontal distance between consecutive marks
    pub x_step: f64,

    /// Maximum distance (unscaled) at which an erase click grabs a mark
    pub erase_radius: f64,
}

impl Default for MarkLayout {
    fn default() -> Self {
        MarkLayout {
            x_origin: 60.0,
            x_step: 25.0,
            erase_radius: 100.0,
        }
    }
}

impl MarkLayout {
    /// Rendered position of the mark with the given placement order, in
    /// unscaled coordinates
    pub fn mark_position(
        &self,
        order: usize,
        line: StaffLineIndex,
        geometry: &StaffGeometry,
    ) -> (f64, f64) {
        let x = self.x_origin + order as f64 * self.x_step;
        let y = geometry.unscaled_y(line);
        (x, y)
    }
}
