//! Browser tests, run with `wasm-pack test --headless --firefox wasm`

#![cfg(target_arch = "wasm32")]

use bmr_calculator_wasm::{bmr_report_json, calculate_bmr, validate_inputs};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn valid_inputs_calculate() {
    assert_eq!(validate_inputs("25", "65", "150", "M"), None);
    let bmr = calculate_bmr(25, 65, 150, "M", "").unwrap();
    assert!((bmr - 1592.263).abs() < 0.01);
}

#[wasm_bindgen_test]
fn invalid_input_throws_the_message() {
    let err = calculate_bmr(25, 100, 150, "M", "").unwrap_err();
    assert_eq!(
        err.as_string().as_deref(),
        Some("Error: Height must be between 1 and 99 inches.")
    );
}

#[wasm_bindgen_test]
fn report_json_never_throws() {
    assert!(bmr_report_json(25, 65, 150, "F", 2).contains("\"bmr\":1426.26"));
    assert!(bmr_report_json(25, 65, 150, "", 2).contains("INVALID_GENDER"));
}
