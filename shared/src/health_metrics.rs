//! Health metrics calculations module
//!
//! Provides the Basal Metabolic Rate equations and the validated profile
//! they are evaluated on.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Evidence-Based**: Formulas from peer-reviewed research
//! 3. **Type Safety**: A [`BmrProfile`] can only be built from valid inputs

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::InputError;
use crate::units::{inches_to_cm, lbs_to_kg, EnergyUnit};
use crate::validation::{validate_age, validate_height_in, validate_weight_lbs};

// ============================================================================
// User Profile Types
// ============================================================================

/// Biological sex for health calculations
/// Note: This is used for physiological calculations only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiologicalSex {
    Male,
    Female,
}

/// Validated inputs for a BMR calculation, in the units they were entered.
///
/// Deserializing goes through [`BmrProfile::new`], so out-of-range JSON is
/// rejected rather than producing a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProfileInput")]
pub struct BmrProfile {
    /// Age in years (1-119)
    age_years: u32,
    /// Height in inches (1-99)
    height_in: u32,
    /// Weight in pounds (1-999)
    weight_lbs: u32,
    sex: BiologicalSex,
}

/// Unchecked wire form of a profile
#[derive(Deserialize)]
struct ProfileInput {
    age_years: i64,
    height_in: i64,
    weight_lbs: i64,
    sex: BiologicalSex,
}

impl TryFrom<ProfileInput> for BmrProfile {
    type Error = InputError;

    fn try_from(input: ProfileInput) -> Result<Self, Self::Error> {
        BmrProfile::new(input.age_years, input.height_in, input.weight_lbs, input.sex)
    }
}

impl BmrProfile {
    /// Build a profile, checking age, height and weight in that order.
    pub fn new(
        age_years: i64,
        height_in: i64,
        weight_lbs: i64,
        sex: BiologicalSex,
    ) -> Result<Self, InputError> {
        Ok(Self {
            age_years: validate_age(age_years)?,
            height_in: validate_height_in(height_in)?,
            weight_lbs: validate_weight_lbs(weight_lbs)?,
            sex,
        })
    }

    pub fn age_years(&self) -> u32 {
        self.age_years
    }

    pub fn height_in(&self) -> u32 {
        self.height_in
    }

    pub fn weight_lbs(&self) -> u32 {
        self.weight_lbs
    }

    pub fn sex(&self) -> BiologicalSex {
        self.sex
    }

    pub fn weight_kg(&self) -> f64 {
        lbs_to_kg(self.weight_lbs as f64)
    }

    pub fn height_cm(&self) -> f64 {
        inches_to_cm(self.height_in as f64)
    }
}

// ============================================================================
// BMR Calculations
// ============================================================================

/// BMR calculation method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmrMethod {
    /// Mifflin-St Jeor (most accurate for most people)
    #[default]
    MifflinStJeor,
    /// Harris-Benedict (revised 1984)
    HarrisBenedict,
}

impl BmrMethod {
    pub fn name(&self) -> &'static str {
        match self {
            BmrMethod::MifflinStJeor => "mifflin_st_jeor",
            BmrMethod::HarrisBenedict => "harris_benedict",
        }
    }
}

impl fmt::Display for BmrMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for BmrMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "mifflin_st_jeor" | "mifflin" => Ok(BmrMethod::MifflinStJeor),
            "harris_benedict" | "harris" => Ok(BmrMethod::HarrisBenedict),
            _ => Err(format!("Unknown BMR method: {}", s)),
        }
    }
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr_mifflin(weight_kg: f64, height_cm: f64, age_years: u32, sex: BiologicalSex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    match sex {
        BiologicalSex::Male => base + 5.0,
        BiologicalSex::Female => base - 161.0,
    }
}

/// Calculate BMR using Harris-Benedict equation (revised)
///
/// Men: BMR = 88.362 + 13.397 × weight(kg) + 4.799 × height(cm) - 5.677 × age(y)
/// Women: BMR = 447.593 + 9.247 × weight(kg) + 3.098 × height(cm) - 4.330 × age(y)
pub fn calculate_bmr_harris_benedict(weight_kg: f64, height_cm: f64, age_years: u32, sex: BiologicalSex) -> f64 {
    let age = age_years as f64;
    match sex {
        BiologicalSex::Male => 88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age,
        BiologicalSex::Female => 447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.330 * age,
    }
}

/// BMR calculation result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmrResult {
    /// Basal Metabolic Rate in kcal/day
    pub kcal_per_day: f64,
    /// Equation used
    pub method: BmrMethod,
}

impl BmrResult {
    /// The BMR expressed in `unit` per day
    pub fn in_unit(&self, unit: EnergyUnit) -> f64 {
        unit.from_kcal(self.kcal_per_day)
    }
}

/// Calculate BMR for a validated profile with the specified method.
///
/// The value is not clamped; extreme but valid inputs may produce a small or
/// negative result.
pub fn calculate_bmr(profile: &BmrProfile, method: BmrMethod) -> BmrResult {
    let weight_kg = profile.weight_kg();
    let height_cm = profile.height_cm();
    let kcal_per_day = match method {
        BmrMethod::MifflinStJeor => {
            calculate_bmr_mifflin(weight_kg, height_cm, profile.age_years, profile.sex)
        }
        BmrMethod::HarrisBenedict => {
            calculate_bmr_harris_benedict(weight_kg, height_cm, profile.age_years, profile.sex)
        }
    };

    BmrResult { kcal_per_day, method }
}
