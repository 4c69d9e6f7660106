//! Inputs entered as age, weight, height, gender.

mod common;

use bmr_calculator::Outcome;
use common::{run_with, weight_first_config, AGE_ERROR, GENDER_ERROR, HEIGHT_ERROR, RESULT, WEIGHT_ERROR};
use rstest::rstest;

#[rstest]
#[case::age_minus_five("-5\n150\n70\nM\n", AGE_ERROR)]
#[case::age_zero("0\n130\n65\nF\n", AGE_ERROR)]
#[case::age_121("121\n180\n75\nM\n", AGE_ERROR)]
#[case::weight_minus_ten("30\n-10\n60\nF\n", WEIGHT_ERROR)]
#[case::weight_zero("25\n0\n70\nM\n", WEIGHT_ERROR)]
#[case::weight_1001("35\n1001\n65\nF\n", WEIGHT_ERROR)]
#[case::height_minus_one("28\n160\n-1\nM\n", HEIGHT_ERROR)]
#[case::height_zero("45\n140\n0\nF\n", HEIGHT_ERROR)]
#[case::height_101("40\n200\n101\nM\n", HEIGHT_ERROR)]
#[case::gender_x("25\n150\n65\nX\n", GENDER_ERROR)]
#[case::valid("25\n150\n65\nM\n", RESULT)]
fn weight_first_case(#[case] input: &str, #[case] expected: &str) {
    let run = run_with(&weight_first_config(), input);
    assert!(
        run.contains(expected),
        "input {:?} produced {:?}, expected {:?}",
        input,
        run.output,
        expected
    );
}

#[test]
fn both_orders_agree_on_the_same_person() {
    let height_first = common::run("25\n65\n150\nM\n");
    let weight_first = run_with(&weight_first_config(), "25\n150\n65\nM\n");

    assert_eq!(height_first.output, weight_first.output);
    match (height_first.outcome, weight_first.outcome) {
        (Outcome::Computed(a), Outcome::Computed(b)) => assert_eq!(a, b),
        other => panic!("expected two results, got {:?}", other),
    }
}

#[test]
fn mapping_is_positional() {
    // 150 is a valid weight but not a valid height: in the default order it
    // is read as height and rejected
    let run = common::run("25\n150\n65\nM\n");
    assert_eq!(run.output, format!("{}\n", HEIGHT_ERROR));
}
