//! Staff exercise WASM API
//!
//! This module provides the JavaScript-facing API for the exam's staff
//! exercises. The active [`ExerciseEngine`](crate::engine::ExerciseEngine)
//! is WASM-owned (the canonical source of truth); the UI layer drives it
//! with click and control events and reads back marks and grade results
//! for rendering.

pub mod session;

pub use session::{
    clear_all, export_results_json, get_marks, is_submitted, reset_exercise, select_accidental,
    set_clef, staff_click, start_exercise, submit_exercise, toggle_erase_mode,
};
