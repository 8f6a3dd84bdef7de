//! Enteral formula reference data
//!
//! Formulas are described per reference volume: "150 kcal and 6 g protein per 100 mL".
//! Field names follow the English schema; the keys of the legacy catalog
//! (`kcal_por_volumen`, `volumen_base_ml`, ...) are accepted as aliases.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{finite, safe_div};

/// Macronutrients delivered by a formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Macronutrient {
    Protein,
    Carbohydrate,
    Fat,
    Fiber,
}

impl Macronutrient {
    /// Atwater conversion factor in kcal/g
    ///
    /// Fiber has no energy conversion here.
    pub fn atwater_factor(&self) -> Option<f64> {
        match self {
            Macronutrient::Protein => Some(4.0),
            Macronutrient::Carbohydrate => Some(4.0),
            Macronutrient::Fat => Some(9.0),
            Macronutrient::Fiber => None,
        }
    }
}

impl fmt::Display for Macronutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Macronutrient::Protein => write!(f, "protein"),
            Macronutrient::Carbohydrate => write!(f, "carbohydrate"),
            Macronutrient::Fat => write!(f, "fat"),
            Macronutrient::Fiber => write!(f, "fiber"),
        }
    }
}

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formula {
    pub id: String,
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(alias = "laboratorio")]
    pub laboratory: Option<String>,
    /// Energy per reference volume (kcal)
    #[serde(alias = "kcal_por_volumen")]
    pub kcal_per_volume: f64,
    /// Reference volume (mL) that the per-volume fields refer to
    #[serde(alias = "volumen_base_ml")]
    pub reference_volume_ml: f64,
    /// mOsm/L
    #[serde(alias = "osmolaridad")]
    pub osmolarity: Option<f64>,
    #[serde(alias = "prote_g_por_volumen")]
    pub protein_g: Option<f64>,
    #[serde(alias = "chos_g_por_volumen")]
    pub carbohydrate_g: Option<f64>,
    #[serde(alias = "grasa_g_por_volumen")]
    pub fat_g: Option<f64>,
    #[serde(alias = "fibra_g_por_volumen")]
    pub fiber_g: Option<f64>,
    #[serde(alias = "type", alias = "tipo")]
    pub formula_type: Option<String>,
}

impl Formula {
    /// Create a formula with only the energy data filled in
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kcal_per_volume: f64,
        reference_volume_ml: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            laboratory: None,
            kcal_per_volume,
            reference_volume_ml,
            osmolarity: None,
            protein_g: None,
            carbohydrate_g: None,
            fat_g: None,
            fiber_g: None,
            formula_type: None,
        }
    }

    pub fn with_laboratory(mut self, laboratory: impl Into<String>) -> Self {
        self.laboratory = Some(laboratory.into());
        self
    }

    pub fn with_osmolarity(mut self, osmolarity: f64) -> Self {
        self.osmolarity = finite(osmolarity);
        self
    }

    /// Set protein, carbohydrate and fat grams per reference volume
    pub fn with_macros(mut self, protein_g: f64, carbohydrate_g: f64, fat_g: f64) -> Self {
        self.protein_g = finite(protein_g);
        self.carbohydrate_g = finite(carbohydrate_g);
        self.fat_g = finite(fat_g);
        self
    }

    pub fn with_fiber(mut self, fiber_g: f64) -> Self {
        self.fiber_g = finite(fiber_g);
        self
    }

    pub fn with_type(mut self, formula_type: impl Into<String>) -> Self {
        self.formula_type = Some(formula_type.into());
        self
    }

    /// Energy density in kcal/mL, undefined for a zero or non-finite volume
    pub fn kcal_per_ml(&self) -> Option<f64> {
        safe_div(finite(self.kcal_per_volume), finite(self.reference_volume_ml))
    }

    /// Grams per reference volume for a macronutrient
    pub fn grams_per_volume(&self, macronutrient: Macronutrient) -> Option<f64> {
        let grams = match macronutrient {
            Macronutrient::Protein => self.protein_g,
            Macronutrient::Carbohydrate => self.carbohydrate_g,
            Macronutrient::Fat => self.fat_g,
            Macronutrient::Fiber => self.fiber_g,
        };
        grams.and_then(finite)
    }

    /// Grams per mL for a macronutrient
    pub fn grams_per_ml(&self, macronutrient: Macronutrient) -> Option<f64> {
        safe_div(
            self.grams_per_volume(macronutrient),
            finite(self.reference_volume_ml),
        )
    }
}
