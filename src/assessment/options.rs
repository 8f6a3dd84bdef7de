use serde::{Deserialize, Serialize};

use crate::enteral::CoverageTarget;

// ============================================================================
// Configuration Types
// ============================================================================

/// Complete assessment configuration
///
/// Every field has a default, so a JSON document only needs the fields it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentOptions {
    /// Coverage target used when a request does not carry its own (default: snapped 80 %)
    pub coverage: CoverageTarget,

    /// Thresholds for the clinical notes
    pub thresholds: NoteThresholds,

    /// Memoize coverage searches across calls (default: true)
    ///
    /// Batches tend to repeat the same requirement/formula pairs, so the cache
    /// is on unless explicitly disabled.
    pub cache: bool,
}

impl Default for AssessmentOptions {
    fn default() -> Self {
        Self {
            coverage: CoverageTarget::default(),
            thresholds: NoteThresholds::default(),
            cache: true,
        }
    }
}

impl AssessmentOptions {
    /// Parse options from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Set the default coverage target
    pub fn with_coverage(mut self, coverage: CoverageTarget) -> Self {
        self.coverage = coverage;
        self
    }

    /// Set all note thresholds
    pub fn with_thresholds(mut self, thresholds: NoteThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Set the maximum pump rate before a danger note (mL/h)
    pub fn with_max_ml_per_hour(mut self, max: u32) -> Self {
        self.thresholds.max_ml_per_hour = max;
        self
    }

    /// Set the minimum pump rate before a warning (mL/h)
    pub fn with_min_ml_per_hour(mut self, min: u32) -> Self {
        self.thresholds.min_ml_per_hour = min;
        self
    }

    /// Enable or disable memoized coverage searches
    pub fn with_cache(mut self, cache: bool) -> Self {
        self.cache = cache;
        self
    }
}

/// Limits that trigger clinical notes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoteThresholds {
    /// Osmolarity at or above which a danger note is raised (default: 400 mOsm/L)
    pub osmolarity_danger: f64,
    /// Osmolarity at or above which a warning is raised (default: 300 mOsm/L)
    pub osmolarity_warning: f64,
    /// Energy density at or above which a warning is raised (default: 1.5 kcal/mL)
    pub high_density: f64,
    /// Pump rate above which a danger note is raised (default: 200 mL/h)
    pub max_ml_per_hour: u32,
    /// Pump rate below which a warning is raised (default: 10 mL/h)
    pub min_ml_per_hour: u32,
    /// Allowed gap between delivered and targeted coverage (default: 10 points)
    pub coverage_tolerance_pct: f64,
}

impl Default for NoteThresholds {
    fn default() -> Self {
        Self {
            osmolarity_danger: 400.0,
            osmolarity_warning: 300.0,
            high_density: 1.5,
            max_ml_per_hour: 200,
            min_ml_per_hour: 10,
            coverage_tolerance_pct: 10.0,
        }
    }
}
