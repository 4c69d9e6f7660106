//! Unit conversion module
//!
//! Inputs arrive in imperial units (pounds, inches) while the BMR equations
//! are defined on metric values. Conversion happens here, at the boundary,
//! so the formulas only ever see kilograms and centimetres.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Body Measurements
// ============================================================================

/// Kilograms in one pound
pub const KG_PER_LB: f64 = 0.453592;

/// Centimetres in one inch
pub const CM_PER_INCH: f64 = 2.54;

/// Convert pounds to kilograms
pub fn lbs_to_kg(lbs: f64) -> f64 {
    lbs * KG_PER_LB
}

/// Convert inches to centimetres
pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

// ============================================================================
// Energy Units
// ============================================================================

/// Energy unit used when reporting a BMR
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EnergyUnit {
    #[default]
    Kcal,
    Kj,
}

impl EnergyUnit {
    /// Convert from kcal to this unit
    pub fn from_kcal(&self, kcal: f64) -> f64 {
        match self {
            EnergyUnit::Kcal => kcal,
            EnergyUnit::Kj => kcal * 4.184,
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            EnergyUnit::Kcal => "kcal",
            EnergyUnit::Kj => "kJ",
        }
    }
}

impl fmt::Display for EnergyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl std::str::FromStr for EnergyUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kcal" | "cal" | "calories" => Ok(EnergyUnit::Kcal),
            "kj" | "kilojoule" | "kilojoules" => Ok(EnergyUnit::Kj),
            _ => Err(format!("Unknown energy unit: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_weight_conversions() {
        // 100 lbs = 45.3592 kg
        assert!((lbs_to_kg(100.0) - 45.3592).abs() < 0.001);
        // 150 lbs = 68.0388 kg
        assert!((lbs_to_kg(150.0) - 68.0388).abs() < 0.001);
    }

    #[test]
    fn test_known_height_conversions() {
        // 65 in = 165.1 cm
        assert!((inches_to_cm(65.0) - 165.1).abs() < 0.001);
        assert_eq!(inches_to_cm(0.0), 0.0);
    }

    #[test]
    fn test_energy_units() {
        let kj = EnergyUnit::Kj.from_kcal(1000.0);
        assert!((kj - 4184.0).abs() < 0.001);
        assert_eq!(EnergyUnit::Kcal.from_kcal(1500.0), 1500.0);

        assert_eq!("KJ".parse::<EnergyUnit>(), Ok(EnergyUnit::Kj));
        assert_eq!("kcal".parse::<EnergyUnit>(), Ok(EnergyUnit::Kcal));
        assert!("joules".parse::<EnergyUnit>().is_err());
        assert_eq!(EnergyUnit::Kj.to_string(), "kJ");
        assert_eq!(EnergyUnit::default(), EnergyUnit::Kcal);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: conversion preserves ordering
        #[test]
        fn prop_weight_conversion_monotonic(a in 1.0f64..999.0, delta in 0.5f64..10.0) {
            prop_assert!(lbs_to_kg(a + delta) > lbs_to_kg(a));
        }

        /// Property: conversion preserves ordering
        #[test]
        fn prop_height_conversion_monotonic(a in 1.0f64..99.0, delta in 0.5f64..10.0) {
            prop_assert!(inches_to_cm(a + delta) > inches_to_cm(a));
        }
    }
}
