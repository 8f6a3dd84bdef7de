//! Search-then-replan prescription for a coverage target

use serde::{Deserialize, Serialize};

use super::coverage::{find_closest_integer_rate, find_closest_integer_rate_cached, CoverageMatch};
use super::dosing::{plan_dosing, EnteralPlan};
use super::error::DosingError;
use crate::data::{positive, Formula};

/// Coverage used when no valid percentage is given
pub const DEFAULT_COVERAGE_PCT: f64 = 80.0;

/// How the requested coverage percentage is turned into a plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageTarget {
    /// Snap to the percentage of the closest whole pump rate
    Snapped(f64),
    /// Use the percentage as entered
    Exact(f64),
}

impl Default for CoverageTarget {
    fn default() -> Self {
        CoverageTarget::Snapped(DEFAULT_COVERAGE_PCT)
    }
}

impl CoverageTarget {
    /// Requested percentage, or the default when it is not a finite number
    pub fn requested_pct(&self) -> f64 {
        let pct = match self {
            CoverageTarget::Snapped(pct) | CoverageTarget::Exact(pct) => *pct,
        };
        if pct.is_finite() {
            pct
        } else {
            DEFAULT_COVERAGE_PCT
        }
    }
}

/// A plan together with the coverage decision behind it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prescription {
    /// Percentage asked for
    pub requested_pct: f64,
    /// Percentage the plan was computed for (snapped or as requested)
    pub coverage_pct: f64,
    /// Search result when the target was snapped and the search succeeded
    pub search: Option<CoverageMatch>,
    pub plan: EnteralPlan,
    /// Delivered energy as a percentage of the actual requirement
    pub overall_coverage_pct: f64,
}

/// Prescribe `formula` to cover a percentage of the actual requirement
///
/// With [`CoverageTarget::Snapped`] the percentage of the closest whole pump rate
/// replaces the requested one; if that search fails the requested percentage is
/// used. The plan is then computed at `actual × pct / 100`.
pub fn prescribe(
    actual_requirement: Option<f64>,
    formula: &Formula,
    target: CoverageTarget,
) -> Result<Prescription, DosingError> {
    prescribe_inner(actual_requirement, formula, target, false)
}

/// [`prescribe`] with memoized coverage searches
pub fn prescribe_cached(
    actual_requirement: Option<f64>,
    formula: &Formula,
    target: CoverageTarget,
) -> Result<Prescription, DosingError> {
    prescribe_inner(actual_requirement, formula, target, true)
}

fn prescribe_inner(
    actual_requirement: Option<f64>,
    formula: &Formula,
    target: CoverageTarget,
    cache: bool,
) -> Result<Prescription, DosingError> {
    let actual = positive(actual_requirement).ok_or(DosingError::InsufficientData)?;
    let requested_pct = target.requested_pct();

    let search = match target {
        CoverageTarget::Snapped(_) => {
            let found = if cache {
                find_closest_integer_rate_cached(actual, formula, requested_pct)
            } else {
                find_closest_integer_rate(actual, formula, requested_pct)
            };
            match found {
                Ok(m) => Some(m),
                Err(e) => {
                    tracing::debug!(error = %e, "Coverage search failed, using requested percentage");
                    None
                }
            }
        }
        CoverageTarget::Exact(_) => None,
    };
    let coverage_pct = search.map_or(requested_pct, |m| m.coverage_pct);

    let plan = plan_dosing(actual * (coverage_pct / 100.0), formula)?;
    let overall_coverage_pct = plan.kcal_per_day / actual * 100.0;

    Ok(Prescription {
        requested_pct,
        coverage_pct,
        search,
        plan,
        overall_coverage_pct,
    })
}
