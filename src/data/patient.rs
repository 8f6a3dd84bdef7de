//! Patient anthropometrics and the choices that drive a single calculation pass
//!
//! A [`PatientInputs`] record is built fresh for every recalculation. Every numeric
//! field is optional: a missing or invalid value makes the dependent results
//! undefined instead of failing the whole pass.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::anthropometry::estimate_height_cm;

/// Biological sex, as used by the regression and predictive equations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    #[default]
    Male,
    Female,
}

impl Sex {
    pub fn is_male(&self) -> bool {
        matches!(self, Sex::Male)
    }
}

/// Accepts `m`/`male` and `f`/`female`, case-insensitive.
///
/// Anything else is an error; unrecognised values are never read as female.
impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" => Ok(Sex::Male),
            "f" | "female" => Ok(Sex::Female),
            other => Err(format!("Unknown sex: '{}'", other)),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

/// Method used to estimate basal energy expenditure
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BasalMethod {
    /// Mifflin-St Jeor predictive equation
    #[default]
    MifflinStJeor,
    /// Revised Harris-Benedict equation (Roza & Shizgal)
    HarrisBenedict,
    /// Weight multiplied by a kcal/kg factor
    KcalPerKg,
}

impl FromStr for BasalMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "msj" | "mifflin_st_jeor" => Ok(BasalMethod::MifflinStJeor),
            "hb" | "harris_benedict" => Ok(BasalMethod::HarrisBenedict),
            "kcalkg" | "kcal_per_kg" => Ok(BasalMethod::KcalPerKg),
            other => Err(format!("Unknown basal method: '{}'", other)),
        }
    }
}

impl fmt::Display for BasalMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BasalMethod::MifflinStJeor => write!(f, "Mifflin-St Jeor"),
            BasalMethod::HarrisBenedict => write!(f, "Harris-Benedict"),
            BasalMethod::KcalPerKg => write!(f, "kcal/kg"),
        }
    }
}

/// Where the height used for a calculation came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeightSource {
    Measured,
    /// Knee-height regression
    Estimated,
}

/// Height actually fed into BMI and the basal equations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeightUsed {
    pub height_cm: Option<f64>,
    pub source: HeightSource,
}

/// Inputs for one calculation pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientInputs {
    /// Age in years
    pub age: Option<f64>,
    pub sex: Sex,
    /// Body weight in kg
    pub weight_kg: Option<f64>,
    /// Measured height in cm
    pub height_cm: Option<f64>,
    /// Knee height in cm, used for the height estimate
    pub knee_height_cm: Option<f64>,
    /// Prefer the knee-height estimate over the measured height
    #[serde(default)]
    pub estimate_height: bool,
    pub basal_method: BasalMethod,
    /// Only read by [`BasalMethod::KcalPerKg`]
    pub kcal_per_kg: Option<f64>,
    /// Unitless multiplier, clamped to [0.5, 3.0] before use
    pub stress_factor: Option<f64>,
}

impl PatientInputs {
    /// Height estimated from knee height, if age and knee height allow it
    pub fn estimated_height_cm(&self) -> Option<f64> {
        estimate_height_cm(self.age, self.sex, self.knee_height_cm)
    }

    /// Height used downstream
    ///
    /// When `estimate_height` is set and the estimate is defined it wins; otherwise
    /// the measured height is used as is, which may be undefined.
    pub fn height_used(&self) -> HeightUsed {
        if self.estimate_height {
            if let Some(estimate) = self.estimated_height_cm() {
                return HeightUsed {
                    height_cm: Some(estimate),
                    source: HeightSource::Estimated,
                };
            }
        }
        HeightUsed {
            height_cm: self.height_cm,
            source: HeightSource::Measured,
        }
    }
}
