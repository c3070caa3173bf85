//! Browser-side tests for the JS-facing session API
//!
//! Run with `wasm-pack test --headless --chrome` (or `--node`). These cover
//! the WASM boundary only; engine semantics are tested natively in the
//! crate's unit tests.

#![cfg(target_arch = "wasm32")]

use exam_wasm::api;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

/// Scaled click Y for a staff slot under the default geometry
fn click_y(slot: f64) -> f64 {
    (76.67 + slot * 5.0) * 1.5
}

#[wasm_bindgen_test]
fn start_place_and_submit_key_signature() {
    api::start_exercise("key-signature", "treble").unwrap();

    let marks = api::staff_click(100.0, click_y(7.0)).unwrap();
    assert_eq!(marks.length(), 1);
    let marks = api::staff_click(100.0, click_y(3.0)).unwrap();
    assert_eq!(marks.length(), 2);

    let result = api::submit_exercise().unwrap();
    assert!(!result.is_undefined());
    assert!(api::is_submitted().unwrap());

    let json = api::export_results_json().unwrap();
    assert!(json.contains("\"score\":100"));
}

#[wasm_bindgen_test]
fn unknown_exercise_kind_is_rejected() {
    assert!(api::start_exercise("interval", "treble").is_err());
    assert!(api::start_exercise("scale", "alto").is_err());
}

#[wasm_bindgen_test]
fn reset_reopens_the_session() {
    api::start_exercise("key-signature", "treble").unwrap();
    api::staff_click(100.0, click_y(7.0)).unwrap();
    api::submit_exercise().unwrap();

    api::reset_exercise().unwrap();
    assert!(!api::is_submitted().unwrap());
    assert_eq!(api::get_marks().unwrap().length(), 0);
}
