//! Music Theory Exam WASM Module
//!
//! This is the WASM module backing the exam's staff exercises. It provides
//! the staff geometry resolver (pixel space to line grid to pitch names)
//! and the exercise grading engine; the JS layer renders the staff and
//! glyphs and drives the engine through the `api` module.

pub mod api;
pub mod engine;
pub mod errors;
pub mod geometry;
pub mod models;

// Re-export commonly used types
pub use engine::{ExerciseEngine, GradeResult, MAX_MARKS};
pub use errors::ConfigError;
pub use geometry::{MarkLayout, StaffGeometry, StaffLineIndex};
pub use models::{AccidentalKind, CanonicalAnswer, Clef, ExerciseKind, PlacedMark};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Music theory exam WASM module initialized");
}
