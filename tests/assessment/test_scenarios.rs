//! Worked clinical cases

use approx::assert_relative_eq;
use nutrisol::anthropometry::{bmi, estimate_height_cm, BmiCategory};
use nutrisol::energy::{basal_requirement, requirements};
use nutrisol::enteral::{
    find_closest_integer_rate, plan_dosing, prescribe, search_range, CoverageTarget,
};
use nutrisol::prelude::*;
use nutrisol::screening::{mst_score, MstAnswers, MstRisk};

#[test]
fn test_mst_weight_loss_and_poor_intake() {
    let answers: MstAnswers = MstAnswers::new("yes".parse().unwrap(), Some(7.0), true);
    let score = mst_score(&answers);

    assert_eq!(score.weight_loss_points, 2);
    assert_eq!(score.intake_points, 1);
    assert_eq!(score.total, 3);
    assert_eq!(score.risk, MstRisk::AtRisk);
    assert_eq!(score.risk.to_string(), "at risk");
}

#[test]
fn test_knee_height_estimate_older_man() {
    let height = estimate_height_cm(Some(70.0), "M".parse().unwrap(), Some(50.0)).unwrap();
    assert_relative_eq!(height, 162.39, epsilon = 1e-9);
}

#[test]
fn test_bmi_normal_adult() {
    let value = bmi(Some(70.0), Some(170.0)).unwrap();
    assert_relative_eq!(value, 24.22, epsilon = 0.005);
    assert_eq!(BmiCategory::from_bmi(Some(value)).to_string(), "normal");
}

#[test]
fn test_mifflin_basal_adult_man() {
    let basal = basal_requirement(
        "msj".parse().unwrap(),
        Sex::Male,
        Some(40.0),
        Some(70.0),
        Some(170.0),
        None,
    )
    .unwrap();
    assert_relative_eq!(basal, 1567.5, epsilon = 1e-9);
}

#[test]
fn test_full_coverage_plan() {
    let formula = Formula::new("std-15", "Standard 1.5", 150.0, 100.0);
    let plan = plan_dosing(1567.5, &formula).unwrap();

    assert_eq!(plan.kcal_per_ml, 1.5);
    assert_eq!(plan.ml_per_day, 1045);
    assert_eq!(plan.ml_per_hour, 44);
    assert_relative_eq!(plan.kcal_per_day, 1567.5, epsilon = 1e-9);
    assert_relative_eq!(plan.coverage_pct, 100.0, epsilon = 1e-9);
}

#[test]
fn test_coverage_search_80_pct() {
    let formula = Formula::new("std-15", "Standard 1.5", 150.0, 100.0);
    assert_eq!(search_range(44), Ok(13..=66));

    let best = find_closest_integer_rate(1567.5, &formula, 80.0).unwrap();
    assert_eq!(best.full_coverage_ml_per_hour, 44);
    assert_eq!(best.ml_per_hour, 35);
    assert_relative_eq!(best.coverage_pct, 79.545454, epsilon = 1e-5);
}

#[test]
fn test_whole_workflow_for_one_patient() {
    let patient = PatientInputs::builder()
        .age(40.0)
        .sex(Sex::Male)
        .weight(70.0)
        .height(170.0)
        .basal_method(BasalMethod::MifflinStJeor)
        .stress_factor(1.0)
        .build();

    let requirement = requirements(&patient);
    assert_relative_eq!(requirement.actual.unwrap(), 1567.5, epsilon = 1e-9);

    let formula = Formula::new("std-15", "Standard 1.5", 150.0, 100.0);
    let rx = prescribe(requirement.actual, &formula, CoverageTarget::default()).unwrap();

    assert_eq!(rx.plan.ml_per_hour, 35);
    assert_eq!(rx.plan.ml_per_day, 831);
    assert_relative_eq!(rx.overall_coverage_pct, 79.521531, epsilon = 1e-5);
}
