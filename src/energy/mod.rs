//! Energy requirements: basal expenditure and the stress-adjusted target
//!
//! # Basal methods
//!
//! | Method | Male | Female |
//! |--------|------|--------|
//! | Mifflin-St Jeor | 10W + 6.25H − 5A + 5 | 10W + 6.25H − 5A − 161 |
//! | Harris-Benedict (revised) | 88.362 + 13.397W + 4.799H − 5.677A | 447.593 + 9.247W + 3.098H − 4.330A |
//! | kcal/kg | W × factor | W × factor |
//!
//! W = weight (kg), H = height (cm), A = age (years). Every input must be finite
//! and strictly positive, otherwise the basal value is undefined.
//!
//! The actual requirement is basal × stress factor, with the stress factor clamped
//! to [0.5, 3.0].

use serde::{Deserialize, Serialize};

use crate::data::{positive, BasalMethod, PatientInputs, Sex};

/// Lowest stress factor applied
pub const MIN_STRESS_FACTOR: f64 = 0.5;
/// Highest stress factor applied
pub const MAX_STRESS_FACTOR: f64 = 3.0;

/// Basal and actual energy requirement, kcal/day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RequirementResult {
    pub basal: Option<f64>,
    /// `basal × stress_factor`, undefined if either is
    pub actual: Option<f64>,
    /// Stress factor after clamping
    pub stress_factor: Option<f64>,
}

/// Mifflin-St Jeor basal energy expenditure
pub fn mifflin_st_jeor(
    sex: Sex,
    age: Option<f64>,
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
) -> Option<f64> {
    let age = positive(age)?;
    let weight = positive(weight_kg)?;
    let height = positive(height_cm)?;
    let sex_constant = match sex {
        Sex::Male => 5.0,
        Sex::Female => -161.0,
    };
    Some(10.0 * weight + 6.25 * height - 5.0 * age + sex_constant)
}

/// Revised Harris-Benedict basal energy expenditure (Roza & Shizgal)
pub fn harris_benedict(
    sex: Sex,
    age: Option<f64>,
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
) -> Option<f64> {
    let age = positive(age)?;
    let weight = positive(weight_kg)?;
    let height = positive(height_cm)?;
    let basal = match sex {
        Sex::Male => 88.362 + 13.397 * weight + 4.799 * height - 5.677 * age,
        Sex::Female => 447.593 + 9.247 * weight + 3.098 * height - 4.330 * age,
    };
    Some(basal)
}

/// Weight-based basal requirement
pub fn kcal_per_kg(weight_kg: Option<f64>, factor: Option<f64>) -> Option<f64> {
    Some(positive(weight_kg)? * positive(factor)?)
}

/// Clamp a stress factor to [0.5, 3.0]; non-finite values stay undefined
pub fn clamp_stress_factor(stress_factor: Option<f64>) -> Option<f64> {
    stress_factor
        .filter(|f| f.is_finite())
        .map(|f| f.clamp(MIN_STRESS_FACTOR, MAX_STRESS_FACTOR))
}

/// Basal energy expenditure by the selected method
pub fn basal_requirement(
    method: BasalMethod,
    sex: Sex,
    age: Option<f64>,
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
    factor: Option<f64>,
) -> Option<f64> {
    match method {
        BasalMethod::MifflinStJeor => mifflin_st_jeor(sex, age, weight_kg, height_cm),
        BasalMethod::HarrisBenedict => harris_benedict(sex, age, weight_kg, height_cm),
        BasalMethod::KcalPerKg => kcal_per_kg(weight_kg, factor),
    }
}

/// Basal and stress-adjusted requirement for a patient
///
/// Uses [`PatientInputs::height_used`], so an estimated height feeds the
/// predictive equations when the patient asks for it.
pub fn requirements(patient: &PatientInputs) -> RequirementResult {
    let height = patient.height_used().height_cm;
    let basal = basal_requirement(
        patient.basal_method,
        patient.sex,
        patient.age,
        patient.weight_kg,
        height,
        patient.kcal_per_kg,
    );
    let stress_factor = clamp_stress_factor(patient.stress_factor);
    let actual = basal.zip(stress_factor).map(|(b, f)| b * f);

    RequirementResult {
        basal,
        actual,
        stress_factor,
    }
}
