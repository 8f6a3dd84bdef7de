//! Enteral feeding prescriptions
//!
//! Turns an energy target into a volumetric infusion plan for a given [`Formula`],
//! and finds whole-number pump rates that approximate a requested coverage.
//!
//! # Rounding policy
//!
//! The hourly and daily volumes are rounded to whole mL *independently* from their
//! own raw values, so `ml_per_hour × 24` can differ from `ml_per_day`. Delivered
//! energy and macronutrients are always derived from the rounded daily volume.
//!
//! # Usage
//!
//! ```rust
//! use nutrisol::data::Formula;
//! use nutrisol::enteral::{plan_dosing, prescribe, CoverageTarget};
//!
//! let formula = Formula::new("std-15", "Standard 1.5", 150.0, 100.0);
//!
//! let plan = plan_dosing(1567.5, &formula).unwrap();
//! assert_eq!(plan.ml_per_hour, 44);
//! assert_eq!(plan.ml_per_day, 1045);
//!
//! // Closest whole pump rate to 80 % coverage, then the plan for that rate
//! let rx = prescribe(Some(1567.5), &formula, CoverageTarget::Snapped(80.0)).unwrap();
//! assert_eq!(rx.plan.ml_per_hour, 35);
//! ```
//!
//! [`Formula`]: crate::data::Formula

mod coverage;
mod dosing;
mod error;
mod prescription;


pub use coverage::{
    find_closest_integer_rate, find_closest_integer_rate_cached, search_range, CoverageMatch,
    SEARCH_LOWER_FRACTION, SEARCH_UPPER_FRACTION,
};
pub use dosing::{plan_dosing, EnteralPlan, MacroAmount, MacroDelivery};
pub use error::DosingError;
pub use prescription::{
    prescribe, prescribe_cached, CoverageTarget, Prescription, DEFAULT_COVERAGE_PCT,
};
