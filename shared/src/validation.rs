//! Input validation functions
//!
//! Each of the four inputs is checked against a fixed inclusive range (or,
//! for gender, a fixed set of tokens). Validators return the first problem
//! found as an [`InputError`] whose text is the line shown to the user.

use std::fmt;
use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};

use crate::errors::InputError;
use crate::health_metrics::BiologicalSex;

// ============================================================================
// Fields and Ranges
// ============================================================================

/// One of the four values read from the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Age,
    Height,
    Weight,
    Gender,
}

impl Field {
    /// Lowercase name, as used in JSON output and messages
    pub fn name(&self) -> &'static str {
        match self {
            Field::Age => "age",
            Field::Height => "height",
            Field::Weight => "weight",
            Field::Gender => "gender",
        }
    }

    /// Capitalised label for the start of a sentence
    pub fn label(&self) -> &'static str {
        match self {
            Field::Age => "Age",
            Field::Height => "Height",
            Field::Weight => "Weight",
            Field::Gender => "Gender",
        }
    }

    /// Prompt written before the field is read
    pub fn prompt(&self) -> &'static str {
        match self {
            Field::Age => "Enter your age (years): ",
            Field::Height => "Enter your height (inches): ",
            Field::Weight => "Enter your weight (pounds): ",
            Field::Gender => "Enter your gender (M/F): ",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Closed interval `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRange {
    pub min: i64,
    pub max: i64,
}

impl FieldRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Age in whole years
pub const AGE_RANGE: FieldRange = FieldRange::new(1, 119);

/// Height in whole inches
pub const HEIGHT_RANGE_IN: FieldRange = FieldRange::new(1, 99);

/// Weight in whole pounds
pub const WEIGHT_RANGE_LBS: FieldRange = FieldRange::new(1, 999);

// ============================================================================
// Parsing
// ============================================================================

/// Parse a raw token as a whole number for `field`.
///
/// Surrounding whitespace is ignored. An integer literal too large to
/// represent is reported as out of range for the field rather than malformed.
pub fn parse_whole_number(field: Field, raw: &str) -> Result<i64, InputError> {
    let token = raw.trim();
    token.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => InputError::out_of_range(field),
        _ => InputError::Malformed {
            field,
            value: token.to_string(),
        },
    })
}

fn check_range(field: Field, range: FieldRange, value: i64) -> Result<u32, InputError> {
    if range.contains(value) {
        // ranges are all within 1..=999
        Ok(value as u32)
    } else {
        Err(InputError::out_of_range(field))
    }
}

// ============================================================================
// Field Validators
// ============================================================================

/// Validate age in years, valid range 1-119
pub fn validate_age(age: i64) -> Result<u32, InputError> {
    check_range(Field::Age, AGE_RANGE, age)
}

/// Validate height in inches, valid range 1-99
pub fn validate_height_in(height_in: i64) -> Result<u32, InputError> {
    check_range(Field::Height, HEIGHT_RANGE_IN, height_in)
}

/// Validate weight in pounds, valid range 1-999
pub fn validate_weight_lbs(weight_lbs: i64) -> Result<u32, InputError> {
    check_range(Field::Weight, WEIGHT_RANGE_LBS, weight_lbs)
}

/// Parse the gender token. Only `M` and `F` are accepted; blank is invalid.
pub fn parse_gender(raw: &str) -> Result<BiologicalSex, InputError> {
    match raw.trim() {
        "M" => Ok(BiologicalSex::Male),
        "F" => Ok(BiologicalSex::Female),
        _ => Err(InputError::InvalidGender),
    }
}

/// A single validated value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue {
    Number(u32),
    Sex(BiologicalSex),
}

/// Parse and range-check one raw token for `field`
pub fn validate_field(field: Field, raw: &str) -> Result<FieldValue, InputError> {
    match field {
        Field::Age => validate_age(parse_whole_number(field, raw)?).map(FieldValue::Number),
        Field::Height => {
            validate_height_in(parse_whole_number(field, raw)?).map(FieldValue::Number)
        }
        Field::Weight => {
            validate_weight_lbs(parse_whole_number(field, raw)?).map(FieldValue::Number)
        }
        Field::Gender => parse_gender(raw).map(FieldValue::Sex),
    }
}
