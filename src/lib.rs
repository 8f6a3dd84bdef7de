pub mod anthropometry;
pub mod assessment;
pub mod data;
pub mod energy;
pub mod enteral;
pub mod error;
pub mod screening;

//extension traits
pub use crate::data::builder::PatientBuilderExt;
pub use crate::data::*;
pub use error::NutrisolError;

pub mod prelude {
    pub mod data {
        pub use crate::data::{
            BasalMethod, Formula, FormulaCatalog, HeightSource, HeightUsed, PatientInputs, Sex,
        };
    }
    pub mod screening {
        pub use crate::screening::{
            glim_diagnosis, mst_score, GlimCriteria, GlimDiagnosis, MstAnswers, MstScore,
            WeightLossAnswer,
        };
    }
    pub mod enteral {
        pub use crate::enteral::{
            find_closest_integer_rate, plan_dosing, prescribe, CoverageTarget, DosingError,
            EnteralPlan, Prescription,
        };
    }

    //extension traits
    pub use crate::data::builder::PatientBuilderExt;
    pub use crate::data::*;

    pub use crate::anthropometry::{bmi, estimate_height_cm, BmiCategory};
    pub use crate::assessment::{
        assess, Assessment, AssessmentOptions, AssessmentRequest, Assessor, Severity, Warning,
    };
    pub use crate::energy::{requirements, RequirementResult};
    pub use crate::NutrisolError;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_covers_a_full_assessment() {
        let patient = PatientInputs::builder()
            .age(40.0)
            .sex(Sex::Male)
            .weight(70.0)
            .height(170.0)
            .stress_factor(1.0)
            .build();
        let result = assess(
            &AssessmentRequest::new(patient),
            None,
            &AssessmentOptions::default(),
        );
        assert_eq!(result.requirements.basal, Some(1567.5));
    }

    #[test]
    fn test_error_conversions() {
        let err: NutrisolError = enteral::DosingError::InsufficientData.into();
        assert!(err.to_string().contains("requirement or density invalid"));

        let err: NutrisolError = AssessmentOptions::from_json_str("[")
            .map_err(NutrisolError::from)
            .unwrap_err();
        assert!(matches!(err, NutrisolError::OptionsError(_)));
    }
}
