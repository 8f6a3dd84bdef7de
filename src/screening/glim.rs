//! GLIM diagnosis rule
//!
//! Malnutrition is diagnosed when at least one phenotypic and at least one etiologic
//! criterion are present. There is no partial credit.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Phenotypic criteria
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhenotypicCriteria {
    /// Non-volitional weight loss
    pub weight_loss: bool,
    pub low_bmi: bool,
    pub reduced_muscle_mass: bool,
}

impl PhenotypicCriteria {
    /// Number of criteria met
    pub fn count(&self) -> usize {
        [self.weight_loss, self.low_bmi, self.reduced_muscle_mass]
            .iter()
            .filter(|&&c| c)
            .count()
    }
}

/// Etiologic criteria
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EtiologicCriteria {
    /// Reduced food intake or assimilation
    pub reduced_intake: bool,
    /// Disease burden or inflammation
    pub inflammation: bool,
}

impl EtiologicCriteria {
    /// Number of criteria met
    pub fn count(&self) -> usize {
        [self.reduced_intake, self.inflammation]
            .iter()
            .filter(|&&c| c)
            .count()
    }
}

/// Criteria and the clinician's severity grading, if any
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlimCriteria {
    pub phenotypic: PhenotypicCriteria,
    pub etiologic: EtiologicCriteria,
    /// Free-text severity; an empty string counts as no override
    pub severity_override: Option<String>,
}

/// Severity attached to a positive diagnosis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlimSeverity {
    Unspecified,
    /// Clinician-provided grading, kept verbatim
    Stated(String),
}

impl fmt::Display for GlimSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlimSeverity::Unspecified => write!(f, "unspecified"),
            GlimSeverity::Stated(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlimDiagnosis {
    pub diagnosed: bool,
    /// `None` whenever `diagnosed` is false
    pub severity: Option<GlimSeverity>,
}

/// Evaluate the GLIM rule
pub fn glim_diagnosis(criteria: &GlimCriteria) -> GlimDiagnosis {
    let diagnosed = criteria.phenotypic.count() >= 1 && criteria.etiologic.count() >= 1;

    let severity = diagnosed.then(|| match criteria.severity_override.as_deref() {
        Some(s) if !s.is_empty() => GlimSeverity::Stated(s.to_string()),
        _ => GlimSeverity::Unspecified,
    });

    GlimDiagnosis {
        diagnosed,
        severity,
    }
}
