//! BMR Calculator WASM Module
//!
//! This crate provides WebAssembly bindings so a browser form can apply the
//! same validation and BMR equations as the command line tool.

use bmr_calculator_shared::{
    calculate_bmr as calculate, parse_gender, validate_age, validate_field, validate_height_in,
    validate_weight_lbs, BmrMethod, BmrProfile, BmrReport, BmrResult, EnergyUnit, ErrorResponse,
    Field, InputError,
};
use wasm_bindgen::prelude::*;

/// Check raw form values in input order.
///
/// Returns the message for the first invalid value, or `undefined` when all
/// four are valid.
#[wasm_bindgen]
pub fn validate_inputs(age: &str, height: &str, weight: &str, gender: &str) -> Option<String> {
    first_error(age, height, weight, gender).map(|err| err.to_string())
}

/// Calculate BMR in kcal/day from whole-number imperial inputs.
///
/// `method` is `mifflin_st_jeor` or `harris_benedict`; an empty string
/// selects Mifflin-St Jeor. Throws the validation message on invalid input.
#[wasm_bindgen]
pub fn calculate_bmr(
    age_years: i32,
    height_in: i32,
    weight_lbs: i32,
    gender: &str,
    method: &str,
) -> Result<f64, JsValue> {
    let method = parse_method(method).map_err(|e| JsValue::from_str(&e))?;
    compute(age_years, height_in, weight_lbs, gender, method)
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Same as [`calculate_bmr`] but never throws: returns a JSON report or a
/// JSON error object, rounded to `precision` decimal places.
#[wasm_bindgen]
pub fn bmr_report_json(
    age_years: i32,
    height_in: i32,
    weight_lbs: i32,
    gender: &str,
    precision: usize,
) -> String {
    let json = match compute_result(age_years, height_in, weight_lbs, gender, BmrMethod::default()) {
        Ok(result) => serde_json::to_string(&BmrReport::new(&result, EnergyUnit::Kcal, precision)),
        Err(err) => serde_json::to_string(&ErrorResponse::from(&err)),
    };
    json.unwrap_or_default()
}

fn first_error(age: &str, height: &str, weight: &str, gender: &str) -> Option<InputError> {
    [
        (Field::Age, age),
        (Field::Height, height),
        (Field::Weight, weight),
        (Field::Gender, gender),
    ]
    .into_iter()
    .find_map(|(field, raw)| validate_field(field, raw).err())
}

fn parse_method(method: &str) -> Result<BmrMethod, String> {
    if method.is_empty() {
        Ok(BmrMethod::default())
    } else {
        method.parse()
    }
}

fn compute_result(
    age_years: i32,
    height_in: i32,
    weight_lbs: i32,
    gender: &str,
    method: BmrMethod,
) -> Result<BmrResult, InputError> {
    // gender is the last input, so it is checked last
    validate_age(age_years.into())?;
    validate_height_in(height_in.into())?;
    validate_weight_lbs(weight_lbs.into())?;
    let sex = parse_gender(gender)?;

    let profile = BmrProfile::new(age_years.into(), height_in.into(), weight_lbs.into(), sex)?;
    Ok(calculate(&profile, method))
}

fn compute(
    age_years: i32,
    height_in: i32,
    weight_lbs: i32,
    gender: &str,
    method: BmrMethod,
) -> Result<f64, InputError> {
    compute_result(age_years, height_in, weight_lbs, gender, method).map(|r| r.kcal_per_day)
}
