use crate::data::*;

pub trait PatientBuilderExt {
    fn builder() -> PatientBuilder;
}

impl PatientBuilderExt for PatientInputs {
    fn builder() -> PatientBuilder {
        PatientBuilder {
            inputs: PatientInputs::default(),
        }
    }
}

/// Builder for [`PatientInputs`]
///
/// Setters take raw numbers; NaN and infinities are stored as undefined.
pub struct PatientBuilder {
    inputs: PatientInputs,
}

impl PatientBuilder {
    pub fn age(mut self, years: f64) -> Self {
        self.inputs.age = finite(years);
        self
    }

    pub fn sex(mut self, sex: Sex) -> Self {
        self.inputs.sex = sex;
        self
    }

    pub fn weight(mut self, kg: f64) -> Self {
        self.inputs.weight_kg = finite(kg);
        self
    }

    pub fn height(mut self, cm: f64) -> Self {
        self.inputs.height_cm = finite(cm);
        self
    }

    pub fn knee_height(mut self, cm: f64) -> Self {
        self.inputs.knee_height_cm = finite(cm);
        self
    }

    pub fn estimate_height(mut self, estimate: bool) -> Self {
        self.inputs.estimate_height = estimate;
        self
    }

    pub fn basal_method(mut self, method: BasalMethod) -> Self {
        self.inputs.basal_method = method;
        self
    }

    pub fn kcal_per_kg(mut self, factor: f64) -> Self {
        self.inputs.kcal_per_kg = finite(factor);
        self
    }

    pub fn stress_factor(mut self, factor: f64) -> Self {
        self.inputs.stress_factor = finite(factor);
        self
    }

    pub fn build(self) -> PatientInputs {
        self.inputs
    }
}
