//! WASM session API for staff exercises
//!
//! One exercise attempt is active at a time. The engine lives behind a
//! module-owned mutex; every entry point locks it, applies one synchronous
//! state transition, and returns before the next UI event arrives.

use lazy_static::lazy_static;
use std::sync::Mutex;
use wasm_bindgen::prelude::*;

use crate::engine::ExerciseEngine;
use crate::models::{AccidentalKind, Clef, ExerciseKind};

// WASM-owned engine storage (canonical source of truth)
lazy_static! {
    static ref ENGINE: Mutex<Option<ExerciseEngine>> = Mutex::new(None);
}

/// Run a closure against the active engine, or fail if none was started
fn with_engine<T>(f: impl FnOnce(&mut ExerciseEngine) -> T) -> Result<T, JsValue> {
    let mut guard = ENGINE
        .lock()
        .map_err(|_| JsValue::from_str("Engine lock poisoned"))?;
    match guard.as_mut() {
        Some(engine) => Ok(f(engine)),
        None => Err(JsValue::from_str("No active exercise")),
    }
}

/// Start a fresh exercise attempt, replacing any previous one
///
/// # Parameters
/// - `kind`: "scale" or "key-signature"
/// - `clef`: "treble" or "bass"
#[wasm_bindgen(js_name = startExercise)]
pub fn start_exercise(kind: &str, clef: &str) -> Result<(), JsValue> {
    let kind = ExerciseKind::parse(kind).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let clef = Clef::parse(clef).map_err(|e| JsValue::from_str(&e.to_string()))?;

    log::info!("startExercise: kind={:?}, clef={:?}", kind, clef);

    let mut guard = ENGINE
        .lock()
        .map_err(|_| JsValue::from_str("Engine lock poisoned"))?;
    *guard = Some(ExerciseEngine::new(kind, clef));
    Ok(())
}

/// Handle a click on the staff, in the UI's scaled pixel space
///
/// Places a mark or erases the nearest one, depending on the engine's tool
/// state. Returns the updated marks for the UI to render.
#[wasm_bindgen(js_name = staffClick)]
pub fn staff_click(x: f64, y: f64) -> Result<js_sys::Array, JsValue> {
    with_engine(|engine| {
        engine.handle_click(x, y);
        log::info!(
            "staffClick: ({:.1}, {:.1}) -> {} marks",
            x,
            y,
            engine.marks().len()
        );
        marks_to_array(engine)
    })?
}

/// Set the active accidental tool ("sharp", "flat", "natural", "none")
#[wasm_bindgen(js_name = selectAccidental)]
pub fn select_accidental(kind: &str) -> Result<(), JsValue> {
    let kind = AccidentalKind::parse(kind).map_err(|e| JsValue::from_str(&e.to_string()))?;
    with_engine(|engine| engine.select_accidental(kind))
}

/// Flip erase mode; returns the new mode
#[wasm_bindgen(js_name = toggleEraseMode)]
pub fn toggle_erase_mode() -> Result<bool, JsValue> {
    with_engine(|engine| {
        engine.toggle_erase_mode();
        engine.erase_mode()
    })
}

/// Switch the clef ("treble" or "bass")
#[wasm_bindgen(js_name = setClef)]
pub fn set_clef(clef: &str) -> Result<(), JsValue> {
    let clef = Clef::parse(clef).map_err(|e| JsValue::from_str(&e.to_string()))?;
    with_engine(|engine| engine.set_clef(clef))
}

/// Remove every placed mark (no-op after submission)
#[wasm_bindgen(js_name = clearAll)]
pub fn clear_all() -> Result<(), JsValue> {
    with_engine(|engine| engine.clear_all())
}

/// Grade the attempt
///
/// Returns the grade result, or `undefined` when the attempt is empty or
/// was already submitted (both are no-ops, matching the engine).
#[wasm_bindgen(js_name = submitExercise)]
pub fn submit_exercise() -> Result<JsValue, JsValue> {
    with_engine(|engine| match engine.submit() {
        Some(result) => {
            log::info!("submitExercise: score={}", result.score);
            serde_wasm_bindgen::to_value(result)
                .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
        }
        None => {
            log::warn!("submitExercise ignored: empty attempt or already submitted");
            Ok(JsValue::UNDEFINED)
        }
    })?
}

/// Return the session to its initial state
#[wasm_bindgen(js_name = resetExercise)]
pub fn reset_exercise() -> Result<(), JsValue> {
    with_engine(|engine| {
        engine.reset();
        log::info!("resetExercise: session cleared");
    })
}

/// Current marks, for the UI to render glyphs
#[wasm_bindgen(js_name = getMarks)]
pub fn get_marks() -> Result<js_sys::Array, JsValue> {
    with_engine(marks_to_array)?
}

/// Whether the attempt has been submitted (all the page-flow controller
/// needs to know)
#[wasm_bindgen(js_name = isSubmitted)]
pub fn is_submitted() -> Result<bool, JsValue> {
    with_engine(|engine| engine.is_submitted())
}

/// Post-submit grade result as a JSON string, for score summaries
///
/// Fails if the attempt has not been submitted yet.
#[wasm_bindgen(js_name = exportResultsJson)]
pub fn export_results_json() -> Result<String, JsValue> {
    with_engine(|engine| {
        let result = engine
            .grade_result()
            .ok_or_else(|| JsValue::from_str("Exercise not submitted"))?;
        serde_json::to_string(result)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    })?
}

/// Serialize the engine's marks into a JavaScript array
fn marks_to_array(engine: &mut ExerciseEngine) -> Result<js_sys::Array, JsValue> {
    let array = js_sys::Array::new();
    for mark in engine.marks() {
        let mark_js = serde_wasm_bindgen::to_value(mark)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))?;
        array.push(&mark_js);
    }
    Ok(array)
}
