//! Volumetric dosing for a kcal/day target

use serde::{Deserialize, Serialize};

use super::error::DosingError;
use crate::data::{finite, Formula, Macronutrient};

/// Grams and energy delivered for one macronutrient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroAmount {
    /// Undefined when the formula has no datum for this macronutrient
    pub grams: Option<f64>,
    pub kcal: Option<f64>,
}

impl MacroAmount {
    fn delivered(formula: &Formula, macronutrient: Macronutrient, ml_per_day: f64) -> Self {
        let grams = formula
            .grams_per_ml(macronutrient)
            .map(|g_per_ml| g_per_ml * ml_per_day);
        let kcal = grams
            .zip(macronutrient.atwater_factor())
            .map(|(g, factor)| g * factor);
        Self { grams, kcal }
    }
}

/// Daily macronutrient delivery
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroDelivery {
    pub protein: MacroAmount,
    pub carbohydrate: MacroAmount,
    pub fat: MacroAmount,
    /// Grams of fiber; 0 when the formula lists none
    pub fiber_g: f64,
}

/// Infusion plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnteralPlan {
    /// Energy target the plan was computed for (kcal/day)
    pub target_kcal_per_day: f64,
    /// Pump rate, rounded from the raw hourly volume
    pub ml_per_hour: u32,
    /// Daily volume, rounded from the raw daily volume
    pub ml_per_day: u32,
    /// Formula energy density
    pub kcal_per_ml: f64,
    /// Energy actually delivered: `kcal_per_ml × ml_per_day`
    pub kcal_per_day: f64,
    /// Delivered energy as a percentage of the target
    pub coverage_pct: f64,
    pub macros: MacroDelivery,
}

/// Round a positive volume to the nearest whole mL
///
/// Volumes past `u32::MAX` are rejected instead of saturating.
#[inline]
fn round_ml(raw: f64) -> Result<u32, DosingError> {
    let rounded = raw.round();
    if !(0.0..=f64::from(u32::MAX)).contains(&rounded) {
        return Err(DosingError::VolumeOutOfRange);
    }
    Ok(rounded as u32)
}

/// Plan the infusion that delivers `target_kcal_per_day` with `formula`
///
/// Fails with [`DosingError::InsufficientData`] when the target or the formula's
/// energy density is undefined or non-positive, and with
/// [`DosingError::VolumeOutOfRange`] when a rounded volume does not fit in a `u32`.
///
/// # Example
///
/// ```rust
/// use nutrisol::data::Formula;
/// use nutrisol::enteral::plan_dosing;
///
/// let formula = Formula::new("std-15", "Standard 1.5", 150.0, 100.0);
/// let plan = plan_dosing(1567.5, &formula).unwrap();
///
/// assert_eq!(plan.ml_per_hour, 44); // 43.54 raw
/// assert_eq!(plan.ml_per_day, 1045);
/// assert_eq!(plan.kcal_per_day, 1567.5);
/// ```
pub fn plan_dosing(target_kcal_per_day: f64, formula: &Formula) -> Result<EnteralPlan, DosingError> {
    let target = finite(target_kcal_per_day).filter(|t| *t > 0.0);
    let density = formula.kcal_per_ml().filter(|d| *d > 0.0);
    let Some((target, kcal_per_ml)) = target.zip(density) else {
        tracing::debug!(
            target = target_kcal_per_day,
            formula = %formula.id,
            "Cannot plan dosing: requirement or density invalid"
        );
        return Err(DosingError::InsufficientData);
    };

    let raw_ml_per_day = target / kcal_per_ml;
    let raw_ml_per_hour = raw_ml_per_day / 24.0;

    // Each volume is rounded from its own raw value
    let ml_per_hour = round_ml(raw_ml_per_hour)?;
    let ml_per_day = round_ml(raw_ml_per_day)?;

    let daily_volume = f64::from(ml_per_day);
    let kcal_per_day = kcal_per_ml * daily_volume;
    let coverage_pct = kcal_per_day / target * 100.0;

    let macros = MacroDelivery {
        protein: MacroAmount::delivered(formula, Macronutrient::Protein, daily_volume),
        carbohydrate: MacroAmount::delivered(formula, Macronutrient::Carbohydrate, daily_volume),
        fat: MacroAmount::delivered(formula, Macronutrient::Fat, daily_volume),
        fiber_g: formula
            .grams_per_ml(Macronutrient::Fiber)
            .map_or(0.0, |g_per_ml| g_per_ml * daily_volume),
    };

    Ok(EnteralPlan {
        target_kcal_per_day: target,
        ml_per_hour,
        ml_per_day,
        kcal_per_ml,
        kcal_per_day,
        coverage_pct,
        macros,
    })
}
