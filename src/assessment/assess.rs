use serde::{Deserialize, Serialize};
use std::fmt;

use super::notes::{clinical_notes, Warning};
use super::options::AssessmentOptions;
use crate::anthropometry::{bmi, BmiCategory};
use crate::data::{BasalMethod, Formula, HeightSource, HeightUsed, PatientInputs};
use crate::energy::{requirements, RequirementResult};
use crate::enteral::{prescribe, prescribe_cached, CoverageTarget, DosingError, Prescription};
use crate::screening::{glim_diagnosis, mst_score, GlimCriteria, GlimDiagnosis, MstAnswers, MstScore};

/// Everything entered for one patient
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentRequest {
    /// Optional identifier carried through to the result
    pub id: Option<String>,
    pub patient: PatientInputs,
    pub mst: MstAnswers,
    pub glim: GlimCriteria,
    /// Catalog id of the selected formula
    pub formula_id: Option<String>,
    /// Overrides [`AssessmentOptions::coverage`] for this request
    pub coverage: Option<CoverageTarget>,
}

impl AssessmentRequest {
    pub fn new(patient: PatientInputs) -> Self {
        Self {
            patient,
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_mst(mut self, mst: MstAnswers) -> Self {
        self.mst = mst;
        self
    }

    pub fn with_glim(mut self, glim: GlimCriteria) -> Self {
        self.glim = glim;
        self
    }

    pub fn with_formula(mut self, formula_id: impl Into<String>) -> Self {
        self.formula_id = Some(formula_id.into());
        self
    }

    pub fn with_coverage(mut self, coverage: CoverageTarget) -> Self {
        self.coverage = Some(coverage);
        self
    }
}

/// Results of one assessment
///
/// Each part is computed on its own; an undefined value in one never prevents
/// the others from being reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub id: Option<String>,
    pub mst: MstScore,
    pub height: HeightUsed,
    pub bmi: Option<f64>,
    pub bmi_category: BmiCategory,
    pub glim: GlimDiagnosis,
    pub basal_method: BasalMethod,
    pub requirements: RequirementResult,
    /// Selected formula, if any
    pub formula: Option<Formula>,
    /// `None` when no formula was selected
    pub enteral: Option<Result<Prescription, DosingError>>,
    pub warnings: Vec<Warning>,
}

/// Run every calculation for `request`
///
/// The formula is passed in already resolved; see
/// [`Assessor`](super::Assessor) for catalog lookups by id.
pub fn assess(
    request: &AssessmentRequest,
    formula: Option<&Formula>,
    options: &AssessmentOptions,
) -> Assessment {
    let patient = &request.patient;

    let mst = mst_score(&request.mst);
    let height = patient.height_used();
    let bmi = bmi(patient.weight_kg, height.height_cm);
    let glim = glim_diagnosis(&request.glim);
    let requirements = requirements(patient);

    let target = request.coverage.unwrap_or(options.coverage);
    let enteral = formula.map(|f| {
        if options.cache {
            prescribe_cached(requirements.actual, f, target)
        } else {
            prescribe(requirements.actual, f, target)
        }
    });

    if let Some(Err(e)) = &enteral {
        tracing::debug!(id = ?request.id, error = %e, "No enteral prescription");
    }

    let prescription = enteral.as_ref().and_then(|r| r.as_ref().ok());
    let warnings = clinical_notes(
        formula,
        prescription,
        requirements.actual,
        &options.thresholds,
    );

    Assessment {
        id: request.id.clone(),
        mst,
        height,
        bmi,
        bmi_category: BmiCategory::from_bmi(bmi),
        glim,
        basal_method: patient.basal_method,
        requirements,
        formula: formula.cloned(),
        enteral,
        warnings,
    }
}

impl Assessment {
    /// The prescription, when one was made
    pub fn prescription(&self) -> Option<&Prescription> {
        self.enteral.as_ref().and_then(|r| r.as_ref().ok())
    }

    /// Flatten numeric results to ordered key-value pairs
    ///
    /// The ordering follows the clinical workflow:
    /// screening → anthropometry → diagnosis → requirements → enteral plan
    pub fn to_row(&self) -> Vec<(&'static str, Option<f64>)> {
        let mut row = Vec::with_capacity(20);

        row.push(("mst_total", Some(f64::from(self.mst.total))));
        row.push(("height_cm", self.height.height_cm));
        row.push(("bmi", self.bmi));
        row.push(("glim_diagnosed", Some(if self.glim.diagnosed { 1.0 } else { 0.0 })));
        row.push(("basal_kcal", self.requirements.basal));
        row.push(("stress_factor", self.requirements.stress_factor));
        row.push(("actual_kcal", self.requirements.actual));

        if let Some(rx) = self.prescription() {
            let plan = &rx.plan;
            row.push(("coverage_pct", Some(rx.coverage_pct)));
            row.push(("ml_per_hour", Some(f64::from(plan.ml_per_hour))));
            row.push(("ml_per_day", Some(f64::from(plan.ml_per_day))));
            row.push(("kcal_per_day", Some(plan.kcal_per_day)));
            row.push(("overall_coverage_pct", Some(rx.overall_coverage_pct)));
            row.push(("protein_g", plan.macros.protein.grams));
            row.push(("carbohydrate_g", plan.macros.carbohydrate.grams));
            row.push(("fat_g", plan.macros.fat.grams));
            row.push(("fiber_g", Some(plan.macros.fiber_g)));
        } else {
            for key in [
                "coverage_pct",
                "ml_per_hour",
                "ml_per_day",
                "kcal_per_day",
                "overall_coverage_pct",
                "protein_g",
                "carbohydrate_g",
                "fat_g",
                "fiber_g",
            ] {
                row.push((key, None));
            }
        }

        row
    }
}

fn or_dash(value: Option<f64>, decimals: usize) -> String {
    value
        .filter(|v| v.is_finite())
        .map_or_else(|| "-".to_string(), |v| format!("{:.*}", decimals, v))
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MST: {} ({})", self.mst.total, self.mst.risk)?;

        if let Some(h) = self.height.height_cm {
            let estimated = match self.height.source {
                HeightSource::Estimated => " (estimated)",
                HeightSource::Measured => "",
            };
            writeln!(f, "Height: {:.1} cm{}", h, estimated)?;
        }
        if let Some(b) = self.bmi {
            writeln!(f, "BMI: {:.1} ({})", b, self.bmi_category)?;
        }

        match &self.glim.severity {
            Some(severity) if self.glim.diagnosed => writeln!(f, "GLIM: positive · {}", severity)?,
            _ => writeln!(f, "GLIM: not met")?,
        }

        if let Some(basal) = self.requirements.basal {
            writeln!(f, "Basal: {:.0} kcal/day ({})", basal.round(), self.basal_method)?;
        }
        if let Some(actual) = self.requirements.actual {
            writeln!(
                f,
                "Actual: {:.0} kcal/day (stress factor {})",
                actual.round(),
                or_dash(self.requirements.stress_factor, 1)
            )?;
        }

        if let Some(formula) = &self.formula {
            writeln!(f, "---")?;
            writeln!(
                f,
                "Enteral: {} · {} · {} kcal/mL · {} mOsm/L",
                formula.name,
                formula.laboratory.as_deref().unwrap_or("-"),
                or_dash(formula.kcal_per_ml(), 2),
                or_dash(formula.osmolarity, 0)
            )?;

            if let Some(rx) = self.prescription() {
                let plan = &rx.plan;
                writeln!(
                    f,
                    "Prescription: {} mL/h ({} mL/day)",
                    plan.ml_per_hour, plan.ml_per_day
                )?;
                writeln!(
                    f,
                    "Delivered: {:.0} kcal/day ({:.1}%) · Target {:.1}%",
                    plan.kcal_per_day.round(),
                    rx.overall_coverage_pct,
                    rx.coverage_pct
                )?;
                writeln!(
                    f,
                    "Macros (g/day): P {} · CHO {} · F {} · Fiber {:.1}",
                    or_dash(plan.macros.protein.grams, 1),
                    or_dash(plan.macros.carbohydrate.grams, 1),
                    or_dash(plan.macros.fat.grams, 1),
                    plan.macros.fiber_g
                )?;
            } else if let Some(Err(e)) = &self.enteral {
                writeln!(f, "Prescription: {}", e)?;
            }
        }

        if !self.warnings.is_empty() {
            writeln!(f, "---")?;
            for w in &self.warnings {
                writeln!(f, "[{}] {}", w.severity(), w)?;
            }
        }

        Ok(())
    }
}
