//! Result rendering options.

mod common;

use bmr_calculator_shared::{BmrMethod, EnergyUnit};
use common::{json_config, quiet_config, run_with, AGE_ERROR};

#[test]
fn json_result() {
    let run = run_with(&json_config(), "25\n65\n150\nM\n");
    let value: serde_json::Value = serde_json::from_str(run.output.trim()).unwrap();
    assert_eq!(value["bmr"], 1592.26);
    assert_eq!(value["unit"], "kcal");
    assert_eq!(value["method"], "mifflin_st_jeor");
}

#[test]
fn json_error_carries_the_exact_message() {
    let run = run_with(&json_config(), "0\n65\n150\nM\n");
    let value: serde_json::Value = serde_json::from_str(run.output.trim()).unwrap();
    assert_eq!(value["error"]["code"], "AGE_OUT_OF_RANGE");
    assert_eq!(value["error"]["message"], AGE_ERROR);
    assert_eq!(value["error"]["field"], "age");
}

#[test]
fn kilojoules_and_precision() {
    let mut config = quiet_config();
    config.output.energy_unit = EnergyUnit::Kj;
    config.output.precision = 0;
    let run = run_with(&config, "25\n65\n150\nM\n");
    // 1592.263 kcal * 4.184
    assert_eq!(run.output, "Your BMR is: 6662 kJ/day\n");
}

#[test]
fn harris_benedict_result() {
    let mut config = quiet_config();
    config.calculation.method = BmrMethod::HarrisBenedict;
    let run = run_with(&config, "25\n65\n150\nM\n");
    assert_eq!(run.output, "Your BMR is: 1650.27\n");
}
