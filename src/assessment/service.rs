use rayon::prelude::*;

use super::assess::{assess, Assessment, AssessmentRequest};
use super::notes::Warning;
use super::options::AssessmentOptions;
use crate::data::FormulaCatalog;

/// Assessment service bound to a formula catalog
///
/// Holds no per-patient state, so one instance can serve any number of
/// requests, including concurrently.
#[derive(Debug, Clone, Default)]
pub struct Assessor {
    catalog: FormulaCatalog,
    options: AssessmentOptions,
}

impl Assessor {
    pub fn new(catalog: FormulaCatalog, options: AssessmentOptions) -> Self {
        Self { catalog, options }
    }

    pub fn catalog(&self) -> &FormulaCatalog {
        &self.catalog
    }

    pub fn options(&self) -> &AssessmentOptions {
        &self.options
    }

    /// Assess one request, resolving its formula id in the catalog
    ///
    /// An unknown id is reported as [`Warning::UnknownFormula`] and the request is
    /// assessed as if no formula had been selected.
    pub fn assess(&self, request: &AssessmentRequest) -> Assessment {
        let formula_id = request.formula_id.as_deref().filter(|id| !id.is_empty());
        let formula = formula_id.and_then(|id| self.catalog.get(id));

        let mut assessment = assess(request, formula, &self.options);

        if let (Some(id), None) = (formula_id, formula) {
            tracing::warn!(id, "Formula not found in catalog");
            assessment
                .warnings
                .retain(|w| !matches!(w, Warning::NoFormulaSelected));
            assessment
                .warnings
                .push(Warning::UnknownFormula { id: id.to_string() });
        }

        assessment
    }

    /// Assess a batch of requests in parallel
    ///
    /// Results keep the order of `requests`.
    pub fn assess_all(&self, requests: &[AssessmentRequest]) -> Vec<Assessment> {
        tracing::debug!(count = requests.len(), "Assessing batch");
        requests.par_iter().map(|r| self.assess(r)).collect()
    }
}
