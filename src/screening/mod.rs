//! Malnutrition screening and diagnosis
//!
//! | Tool | Kind | Output |
//! |------|------|--------|
//! | MST | Screening score | 0–5 points, at risk when ≥ 2 |
//! | GLIM | Diagnosis rule | Positive when ≥ 1 phenotypic and ≥ 1 etiologic criterion |

mod glim;
mod mst;

pub use glim::{
    glim_diagnosis, EtiologicCriteria, GlimCriteria, GlimDiagnosis, GlimSeverity,
    PhenotypicCriteria,
};
pub use mst::{
    intake_points, mst_score, weight_loss_points, MstAnswers, MstRisk, MstScore,
    WeightLossAnswer,
};
