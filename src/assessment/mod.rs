//! Full nutrition assessment for one patient or a batch
//!
//! Combines screening, anthropometry, GLIM diagnosis, energy requirements and
//! the enteral prescription into a single [`Assessment`], together with the
//! clinical notes a reviewer should see.
//!
//! # Usage
//!
//! ```rust
//! use nutrisol::assessment::{AssessmentOptions, AssessmentRequest, Assessor};
//! use nutrisol::data::builder::PatientBuilderExt;
//! use nutrisol::data::{Formula, FormulaCatalog, PatientInputs, Sex};
//!
//! let catalog = FormulaCatalog::from_formulas(vec![
//!     Formula::new("std-15", "Standard 1.5", 150.0, 100.0),
//! ])
//! .unwrap();
//! let assessor = Assessor::new(catalog, AssessmentOptions::default());
//!
//! let patient = PatientInputs::builder()
//!     .age(40.0)
//!     .sex(Sex::Male)
//!     .weight(70.0)
//!     .height(170.0)
//!     .stress_factor(1.0)
//!     .build();
//! let request = AssessmentRequest::new(patient).with_formula("std-15");
//!
//! let result = assessor.assess(&request);
//! assert_eq!(result.prescription().unwrap().plan.ml_per_hour, 35);
//! println!("{}", result);
//! ```

mod assess;
mod notes;
mod options;
mod service;


pub use assess::{assess, Assessment, AssessmentRequest};
pub use notes::{clinical_notes, Severity, Warning};
pub use options::{AssessmentOptions, NoteThresholds};
pub use service::Assessor;
