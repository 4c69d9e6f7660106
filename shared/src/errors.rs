//! Error types for the BMR calculator

use thiserror::Error;

use crate::validation::Field;

/// Reasons a single input value is rejected.
///
/// The `Display` text of each variant is the exact line shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Error: Age must be between 1 and 119.")]
    AgeOutOfRange,

    #[error("Error: Height must be between 1 and 99 inches.")]
    HeightOutOfRange,

    #[error("Error: Weight must be between 1 and 999 pounds.")]
    WeightOutOfRange,

    #[error("Error: Invalid gender. Please enter 'M' or 'F'.")]
    InvalidGender,

    /// The token could not be read as a whole number
    #[error("Error: {} must be a whole number.", .field.label())]
    Malformed { field: Field, value: String },

    /// The input ended before this field was entered
    #[error("Error: No value entered for {}.", .field.name())]
    Missing { field: Field },
}

impl InputError {
    /// The range error reported for `field`
    pub fn out_of_range(field: Field) -> Self {
        match field {
            Field::Age => InputError::AgeOutOfRange,
            Field::Height => InputError::HeightOutOfRange,
            Field::Weight => InputError::WeightOutOfRange,
            Field::Gender => InputError::InvalidGender,
        }
    }

    /// The field this error belongs to
    pub fn field(&self) -> Field {
        match self {
            InputError::AgeOutOfRange => Field::Age,
            InputError::HeightOutOfRange => Field::Height,
            InputError::WeightOutOfRange => Field::Weight,
            InputError::InvalidGender => Field::Gender,
            InputError::Malformed { field, .. } | InputError::Missing { field } => *field,
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            InputError::AgeOutOfRange => "AGE_OUT_OF_RANGE",
            InputError::HeightOutOfRange => "HEIGHT_OUT_OF_RANGE",
            InputError::WeightOutOfRange => "WEIGHT_OUT_OF_RANGE",
            InputError::InvalidGender => "INVALID_GENDER",
            InputError::Malformed { .. } => "MALFORMED_INPUT",
            InputError::Missing { .. } => "MISSING_INPUT",
        }
    }
}
