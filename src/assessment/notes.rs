//! Clinical notes attached to an enteral prescription

use serde::{Deserialize, Serialize};
use std::fmt;

use super::options::NoteThresholds;
use crate::data::Formula;
use crate::enteral::Prescription;

/// How urgently a note should be looked at
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Note,
    Warning,
    Danger,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Note => write!(f, "note"),
            Severity::Warning => write!(f, "warning"),
            Severity::Danger => write!(f, "danger"),
        }
    }
}

/// Assessment warnings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Warning {
    /// Osmolarity at or above the danger threshold
    HighOsmolarity { osmolarity: f64 },
    /// Osmolarity at or above the warning threshold
    IntermediateOsmolarity { osmolarity: f64 },
    /// Energy-dense formula
    HighDensity { kcal_per_ml: f64 },
    /// Pump rate above the maximum
    HighRate { ml_per_hour: u32 },
    /// Pump rate below the minimum
    LowRate { ml_per_hour: u32 },
    /// Delivered coverage drifted from the target after rounding
    CoverageDeviation { overall_pct: f64, target_pct: f64 },
    /// Actual requirement is undefined, so no prescription can be made
    InvalidRequirement,
    NoFormulaSelected,
    /// Requested formula id is not in the catalog
    UnknownFormula { id: String },
}

impl Warning {
    pub fn severity(&self) -> Severity {
        match self {
            Warning::HighOsmolarity { .. } | Warning::HighRate { .. } => Severity::Danger,
            Warning::NoFormulaSelected => Severity::Note,
            Warning::IntermediateOsmolarity { .. }
            | Warning::HighDensity { .. }
            | Warning::LowRate { .. }
            | Warning::CoverageDeviation { .. }
            | Warning::InvalidRequirement
            | Warning::UnknownFormula { .. } => Severity::Warning,
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::HighOsmolarity { osmolarity } => write!(
                f,
                "High osmolarity ({:.0} mOsm/L): higher risk of intolerance; monitor and consider adjustments",
                osmolarity
            ),
            Warning::IntermediateOsmolarity { osmolarity } => write!(
                f,
                "Intermediate osmolarity ({:.0} mOsm/L): monitor tolerance (diarrhea, distension, residual volume)",
                osmolarity
            ),
            Warning::HighDensity { kcal_per_ml } => write!(
                f,
                "High density ({:.2} kcal/mL): adjust rate and hydration; monitor tolerance",
                kcal_per_ml
            ),
            Warning::HighRate { ml_per_hour } => write!(
                f,
                "High rate ({} mL/h): check tolerance and review data/target",
                ml_per_hour
            ),
            Warning::LowRate { ml_per_hour } => write!(
                f,
                "Very low rate ({} mL/h): review target; may be impractical",
                ml_per_hour
            ),
            Warning::CoverageDeviation {
                overall_pct,
                target_pct,
            } => write!(
                f,
                "Delivered coverage ({:.1}%) differs from target ({:.1}%) due to rounding",
                overall_pct, target_pct
            ),
            Warning::InvalidRequirement => write!(
                f,
                "Invalid actual requirement: complete basal method and stress factor for an enteral prescription"
            ),
            Warning::NoFormulaSelected => write!(
                f,
                "Select a formula to see recommendations (osmolarity, density, rate and tolerance)"
            ),
            Warning::UnknownFormula { id } => write!(f, "Formula '{}' not found in catalog", id),
        }
    }
}

/// Notes for a formula and the prescription made with it
///
/// Without a formula only [`Warning::NoFormulaSelected`] is returned.
pub fn clinical_notes(
    formula: Option<&Formula>,
    prescription: Option<&Prescription>,
    actual_requirement: Option<f64>,
    thresholds: &NoteThresholds,
) -> Vec<Warning> {
    let Some(formula) = formula else {
        return vec![Warning::NoFormulaSelected];
    };

    let mut warnings = Vec::new();

    if let Some(osmolarity) = formula.osmolarity.filter(|o| o.is_finite()) {
        if osmolarity >= thresholds.osmolarity_danger {
            warnings.push(Warning::HighOsmolarity { osmolarity });
        } else if osmolarity >= thresholds.osmolarity_warning {
            warnings.push(Warning::IntermediateOsmolarity { osmolarity });
        }
    }

    if let Some(kcal_per_ml) = formula.kcal_per_ml() {
        if kcal_per_ml >= thresholds.high_density {
            warnings.push(Warning::HighDensity { kcal_per_ml });
        }
    }

    if let Some(rx) = prescription {
        let ml_per_hour = rx.plan.ml_per_hour;
        if ml_per_hour > thresholds.max_ml_per_hour {
            warnings.push(Warning::HighRate { ml_per_hour });
        }
        if ml_per_hour < thresholds.min_ml_per_hour {
            warnings.push(Warning::LowRate { ml_per_hour });
        }
        if rx.overall_coverage_pct.is_finite()
            && (rx.overall_coverage_pct - rx.coverage_pct).abs() > thresholds.coverage_tolerance_pct
        {
            warnings.push(Warning::CoverageDeviation {
                overall_pct: rx.overall_coverage_pct,
                target_pct: rx.coverage_pct,
            });
        }
    }

    if actual_requirement.filter(|a| a.is_finite()).is_none() {
        warnings.push(Warning::InvalidRequirement);
    }

    warnings
}
