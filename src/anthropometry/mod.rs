//! Anthropometry: height estimation from knee height and body mass index
//!
//! # Knee-height regression
//!
//! | Age | Sex | Height (cm) |
//! |-----|-----|-------------|
//! | 60–90 | male | 2.02 × knee − 0.04 × age + 64.19 |
//! | 60–90 | female | 1.83 × knee − 0.24 × age + 84.88 |
//! | 18–59 | male | 1.88 × knee + 71.85 |
//! | 18–59 | female | 1.87 × knee − 0.06 × age + 70.25 |
//!
//! Outside 18–90 years the estimate is undefined.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::data::{positive, Sex};

/// Youngest age accepted by the knee-height regression
pub const MIN_ESTIMATION_AGE: f64 = 18.0;
/// Oldest age accepted by the knee-height regression
pub const MAX_ESTIMATION_AGE: f64 = 90.0;
/// Age at which the older-adult coefficients apply
pub const OLDER_ADULT_AGE: f64 = 60.0;

/// Estimate height (cm) from knee height
///
/// Returns `None` when age is undefined or outside [18, 90], or when knee height is
/// undefined or non-positive.
///
/// # Examples
///
/// ```rust
/// use nutrisol::anthropometry::estimate_height_cm;
/// use nutrisol::data::Sex;
///
/// let height = estimate_height_cm(Some(70.0), Sex::Male, Some(50.0)).unwrap();
/// assert!((height - 162.39).abs() < 1e-9);
/// ```
pub fn estimate_height_cm(age: Option<f64>, sex: Sex, knee_height_cm: Option<f64>) -> Option<f64> {
    let age = age.filter(|a| a.is_finite())?;
    let knee = positive(knee_height_cm)?;
    if !(MIN_ESTIMATION_AGE..=MAX_ESTIMATION_AGE).contains(&age) {
        return None;
    }

    let height = match (age >= OLDER_ADULT_AGE, sex) {
        (true, Sex::Male) => 2.02 * knee - 0.04 * age + 64.19,
        (true, Sex::Female) => 1.83 * knee - 0.24 * age + 84.88,
        (false, Sex::Male) => 1.88 * knee + 71.85,
        (false, Sex::Female) => 1.87 * knee - 0.06 * age + 70.25,
    };
    Some(height)
}

/// Body mass index, kg/m²
pub fn bmi(weight_kg: Option<f64>, height_cm: Option<f64>) -> Option<f64> {
    let weight = positive(weight_kg)?;
    let height_m = positive(height_cm)? / 100.0;
    Some(weight / (height_m * height_m))
}

/// BMI category
///
/// Each band includes its lower bound and excludes its upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// < 18.5
    Underweight,
    /// [18.5, 25)
    Normal,
    /// [25, 30)
    Overweight,
    /// ≥ 30
    Obesity,
    /// BMI undefined
    Unknown,
}

impl BmiCategory {
    pub fn from_bmi(bmi: Option<f64>) -> Self {
        match bmi.filter(|b| b.is_finite()) {
            None => BmiCategory::Unknown,
            Some(b) if b < 18.5 => BmiCategory::Underweight,
            Some(b) if b < 25.0 => BmiCategory::Normal,
            Some(b) if b < 30.0 => BmiCategory::Overweight,
            Some(_) => BmiCategory::Obesity,
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BmiCategory::Underweight => write!(f, "underweight"),
            BmiCategory::Normal => write!(f, "normal"),
            BmiCategory::Overweight => write!(f, "overweight"),
            BmiCategory::Obesity => write!(f, "obesity"),
            BmiCategory::Unknown => write!(f, "unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_estimate_height_older_male() {
        let h = estimate_height_cm(Some(70.0), Sex::Male, Some(50.0)).unwrap();
        assert_relative_eq!(h, 162.39, epsilon = 1e-9);
    }

    #[test]
    fn test_estimate_height_bands() {
        // 1.83 × 48 − 0.24 × 75 + 84.88
        let h = estimate_height_cm(Some(75.0), Sex::Female, Some(48.0)).unwrap();
        assert_relative_eq!(h, 154.72, epsilon = 1e-9);

        // Younger male ignores age
        let h = estimate_height_cm(Some(30.0), Sex::Male, Some(52.0)).unwrap();
        assert_relative_eq!(h, 169.61, epsilon = 1e-9);

        // 1.87 × 50 − 0.06 × 40 + 70.25
        let h = estimate_height_cm(Some(40.0), Sex::Female, Some(50.0)).unwrap();
        assert_relative_eq!(h, 161.35, epsilon = 1e-9);
    }

    #[test]
    fn test_estimate_height_age_60_uses_older_coefficients() {
        let h = estimate_height_cm(Some(60.0), Sex::Male, Some(50.0)).unwrap();
        assert_relative_eq!(h, 2.02 * 50.0 - 0.04 * 60.0 + 64.19, epsilon = 1e-9);
    }

    #[test]
    fn test_estimate_height_age_bounds_inclusive() {
        assert!(estimate_height_cm(Some(18.0), Sex::Male, Some(50.0)).is_some());
        assert!(estimate_height_cm(Some(90.0), Sex::Female, Some(50.0)).is_some());
        assert!(estimate_height_cm(Some(17.99), Sex::Male, Some(50.0)).is_none());
        assert!(estimate_height_cm(Some(90.01), Sex::Female, Some(50.0)).is_none());
    }

    #[test]
    fn test_estimate_height_invalid_inputs() {
        assert!(estimate_height_cm(None, Sex::Male, Some(50.0)).is_none());
        assert!(estimate_height_cm(Some(40.0), Sex::Male, None).is_none());
        assert!(estimate_height_cm(Some(40.0), Sex::Male, Some(0.0)).is_none());
        assert!(estimate_height_cm(Some(40.0), Sex::Male, Some(-45.0)).is_none());
        assert!(estimate_height_cm(Some(f64::NAN), Sex::Male, Some(50.0)).is_none());
    }

    #[test]
    fn test_bmi() {
        let b = bmi(Some(70.0), Some(170.0)).unwrap();
        assert_relative_eq!(b, 24.221453287197235, epsilon = 1e-9);
        assert_eq!(BmiCategory::from_bmi(Some(b)), BmiCategory::Normal);
    }

    #[test]
    fn test_bmi_undefined() {
        assert_eq!(bmi(Some(0.0), Some(170.0)), None);
        assert_eq!(bmi(Some(70.0), Some(-1.0)), None);
        assert_eq!(bmi(None, Some(170.0)), None);
        assert_eq!(bmi(Some(70.0), None), None);
        assert_eq!(BmiCategory::from_bmi(None), BmiCategory::Unknown);
        assert_eq!(BmiCategory::from_bmi(Some(f64::NAN)), BmiCategory::Unknown);
    }

    #[test]
    fn test_bmi_category_boundaries() {
        assert_eq!(BmiCategory::from_bmi(Some(18.49)), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(Some(18.5)), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(Some(24.999)), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(Some(25.0)), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(Some(29.999)), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(Some(30.0)), BmiCategory::Obesity);
    }

    #[test]
    fn test_bmi_category_display() {
        assert_eq!(BmiCategory::Overweight.to_string(), "overweight");
        assert_eq!(BmiCategory::Unknown.to_string(), "unknown");
    }
}
