//! Dosing error types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a dosing plan or coverage search cannot be produced
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DosingError {
    /// The energy target or the formula density is missing, non-finite or non-positive
    #[error("Insufficient data to calculate: requirement or density invalid")]
    InsufficientData,

    /// The full-coverage plan rounds to a rate that cannot anchor a search
    #[error("Full-coverage rate of {ml_per_hour} mL/h is too low to search for a coverage rate")]
    NoBaselineRate { ml_per_hour: u32 },
    /// A rounded volume or searched rate does not fit in a whole-mL `u32`
    #[error("Infusion volume exceeds the supported range")]
    VolumeOutOfRange,
}
