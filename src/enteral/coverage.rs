//! Whole-number pump rate search
//!
//! Infusion pumps only accept whole mL/h. Given a requested coverage percentage,
//! the search scans every integer rate between 30 % and 150 % of the full-coverage
//! rate and keeps the one whose coverage is closest to the request. Ties go to the
//! lower rate.

use cached::proc_macro::cached;
use cached::UnboundCache;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use super::dosing::plan_dosing;
use super::error::DosingError;
use crate::data::Formula;

/// Lowest searched rate, as a fraction of the full-coverage rate
pub const SEARCH_LOWER_FRACTION: f64 = 0.3;
/// Highest searched rate, as a fraction of the full-coverage rate
pub const SEARCH_UPPER_FRACTION: f64 = 1.5;

/// Winning rate of a coverage search
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverageMatch {
    pub ml_per_hour: u32,
    /// Coverage implied by the rate: `ml_per_hour / full_coverage_ml_per_hour × 100`
    pub coverage_pct: f64,
    /// Rate of the 100 % plan
    pub full_coverage_ml_per_hour: u32,
}

/// Integer rates scanned for a full-coverage rate of `ml100`
///
/// Never empty: the start is at least 1 and the end at least the start.
/// Fails with [`DosingError::VolumeOutOfRange`] when the upper bound does not
/// fit in a `u32`, rather than cutting the range short.
pub fn search_range(ml100: u32) -> Result<RangeInclusive<u32>, DosingError> {
    let full = f64::from(ml100);
    // 0.3 × u32::MAX always fits
    let start = ((full * SEARCH_LOWER_FRACTION).floor() as u32).max(1);
    let upper = (full * SEARCH_UPPER_FRACTION).ceil();
    if upper > f64::from(u32::MAX) {
        return Err(DosingError::VolumeOutOfRange);
    }
    let end = (upper as u32).max(start);
    Ok(start..=end)
}

/// Find the whole mL/h rate whose coverage is closest to `approx_pct`
///
/// The caller is expected to re-plan at `actual_requirement × coverage_pct / 100`
/// using the returned percentage, not the requested one.
///
/// # Example
///
/// ```rust
/// use nutrisol::data::Formula;
/// use nutrisol::enteral::find_closest_integer_rate;
///
/// let formula = Formula::new("std-15", "Standard 1.5", 150.0, 100.0);
/// let best = find_closest_integer_rate(1567.5, &formula, 80.0).unwrap();
///
/// assert_eq!(best.full_coverage_ml_per_hour, 44);
/// assert_eq!(best.ml_per_hour, 35); // 79.55 %, closer than 36 (81.82 %)
/// ```
pub fn find_closest_integer_rate(
    actual_requirement: f64,
    formula: &Formula,
    approx_pct: f64,
) -> Result<CoverageMatch, DosingError> {
    let baseline = plan_dosing(actual_requirement, formula)?;
    let ml100 = baseline.ml_per_hour;
    if ml100 == 0 {
        tracing::debug!(formula = %formula.id, "Full-coverage rate rounds to 0 mL/h");
        return Err(DosingError::NoBaselineRate { ml_per_hour: ml100 });
    }

    let mut best: Option<(CoverageMatch, f64)> = None;
    for ml in search_range(ml100)? {
        let pct = (f64::from(ml) / f64::from(ml100)) * 100.0;
        let diff = (pct - approx_pct).abs();
        // Strict comparison: on a tie the earlier (lower) rate is kept
        let improves = match &best {
            None => true,
            Some((_, best_diff)) => diff < *best_diff,
        };
        if improves {
            let candidate = CoverageMatch {
                ml_per_hour: ml,
                coverage_pct: pct,
                full_coverage_ml_per_hour: ml100,
            };
            best = Some((candidate, diff));
        }
    }

    let (winner, diff) = best.ok_or(DosingError::NoBaselineRate { ml_per_hour: ml100 })?;
    tracing::trace!(
        ml_per_hour = winner.ml_per_hour,
        coverage_pct = winner.coverage_pct,
        diff,
        "Coverage search winner"
    );
    Ok(winner)
}

/// Normalize -0.0 to 0.0 so both hash the same
#[inline(always)]
fn key_bits(value: f64) -> u64 {
    if value == 0.0 {
        0u64
    } else {
        value.to_bits()
    }
}

/// Memoized [`find_closest_integer_rate`]
///
/// Only successful searches are cached.
#[cached(
    ty = "UnboundCache<(u64, u64, u64, u64), CoverageMatch>",
    create = "{ UnboundCache::with_capacity(10_000) }",
    convert = r#"{ (key_bits(actual_requirement), key_bits(formula.kcal_per_volume), key_bits(formula.reference_volume_ml), key_bits(approx_pct)) }"#,
    result = "true"
)]
pub fn find_closest_integer_rate_cached(
    actual_requirement: f64,
    formula: &Formula,
    approx_pct: f64,
) -> Result<CoverageMatch, DosingError> {
    find_closest_integer_rate(actual_requirement, formula, approx_pct)
}
