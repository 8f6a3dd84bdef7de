//! Batch assessments through the service

use nutrisol::assessment::{AssessmentOptions, AssessmentRequest, Assessor, Warning};
use nutrisol::data::builder::PatientBuilderExt;
use nutrisol::data::{BasalMethod, FormulaCatalog, PatientInputs, Sex};
use nutrisol::enteral::DosingError;
use std::path::PathBuf;

fn assessor() -> Assessor {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/formulas.json");
    let catalog = FormulaCatalog::from_json_path(path).unwrap();
    Assessor::new(catalog, AssessmentOptions::default())
}

fn ward() -> Vec<AssessmentRequest> {
    let complete = PatientInputs::builder()
        .age(65.0)
        .sex(Sex::Female)
        .weight(58.0)
        .height(158.0)
        .basal_method(BasalMethod::HarrisBenedict)
        .stress_factor(1.3)
        .build();
    let weight_based = PatientInputs::builder()
        .weight(80.0)
        .basal_method(BasalMethod::KcalPerKg)
        .kcal_per_kg(25.0)
        .stress_factor(1.0)
        .build();
    let incomplete = PatientInputs::builder().age(50.0).sex(Sex::Male).build();

    vec![
        AssessmentRequest::new(complete).with_id("bed-1").with_formula("std-15"),
        AssessmentRequest::new(weight_based).with_id("bed-2").with_formula("fib-10"),
        AssessmentRequest::new(incomplete).with_id("bed-3").with_formula("peptide-12"),
        AssessmentRequest::new(PatientInputs::default())
            .with_id("bed-4")
            .with_formula("not-stocked"),
    ]
}

#[test]
fn test_batch_mixes_successes_and_failures() {
    let results = assessor().assess_all(&ward());
    assert_eq!(results.len(), 4);

    assert!(results[0].prescription().is_some());

    // 80 kg × 25 kcal/kg = 2000 kcal/day at 1 kcal/mL, 83 mL/h at full coverage
    let rx = results[1].prescription().unwrap();
    assert_eq!(rx.search.unwrap().full_coverage_ml_per_hour, 83);
    assert!(rx.plan.macros.fiber_g > 0.0);

    assert_eq!(results[2].enteral, Some(Err(DosingError::InsufficientData)));
    assert!(results[2].warnings.contains(&Warning::InvalidRequirement));

    assert!(results[3].enteral.is_none());
    assert!(results[3]
        .warnings
        .contains(&Warning::UnknownFormula {
            id: "not-stocked".to_string()
        }));
}

#[test]
fn test_batch_matches_sequential() {
    let assessor = assessor();
    let requests = ward();
    let batch = assessor.assess_all(&requests);
    let sequential: Vec<_> = requests.iter().map(|r| assessor.assess(r)).collect();
    assert_eq!(batch, sequential);
}

#[test]
fn test_results_serialize_to_json() {
    let results = assessor().assess_all(&ward());
    let json = serde_json::to_string(&results).unwrap();
    assert!(json.contains("\"bed-1\""));
    assert!(json.contains("InsufficientData"));
}
