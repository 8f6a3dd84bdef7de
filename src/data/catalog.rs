//! Formula catalog
//!
//! A [`FormulaCatalog`] is the read-only reference data the dosing engine draws
//! formulas from. It can be read from JSON (an array of formula objects) or from
//! a CSV file whose headers are formula field names.
//!
//! # Example
//!
//! ```rust,no_run
//! use nutrisol::data::FormulaCatalog;
//!
//! let catalog = FormulaCatalog::from_json_path("formulas.json").unwrap();
//! if let Some(formula) = catalog.get("ens-plus") {
//!     println!("{}: {:?} kcal/mL", formula.name, formula.kcal_per_ml());
//! }
//! ```

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

use super::formula::Formula;

/// Errors raised while building a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Failed to read the catalog source
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    /// Failed to parse a JSON catalog
    #[error("Failed to parse JSON catalog: {0}")]
    Json(#[from] serde_json::Error),
    /// Failed to parse a CSV catalog
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// Two entries share the same identifier
    #[error("Duplicate formula id: '{id}'")]
    DuplicateId { id: String },
}

/// Ordered collection of formulas keyed by id
#[derive(Debug, Clone, Default)]
pub struct FormulaCatalog {
    formulas: Vec<Formula>,
    index: HashMap<String, usize>,
}

impl FormulaCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from formulas, rejecting duplicate ids
    pub fn from_formulas(formulas: Vec<Formula>) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for formula in formulas {
            catalog.add(formula)?;
        }
        tracing::debug!(n = catalog.len(), "Loaded formula catalog");
        Ok(catalog)
    }

    /// Parse a JSON array of formulas
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let formulas: Vec<Formula> = serde_json::from_str(json)?;
        Self::from_formulas(formulas)
    }

    /// Read a JSON array of formulas from a file
    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Read formulas from CSV
    ///
    /// Headers are matched case-insensitively. Lines starting with `#` are
    /// comments and empty cells are read as missing values.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut reader = csv::ReaderBuilder::new()
            .comment(Some(b'#'))
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = reader
            .headers()?
            .iter()
            .map(|h| h.to_lowercase())
            .collect::<Vec<_>>();
        reader.set_headers(csv::StringRecord::from(headers));

        let mut formulas = Vec::new();
        for row in reader.deserialize() {
            let formula: Formula = row?;
            formulas.push(formula);
        }
        Self::from_formulas(formulas)
    }

    /// Read formulas from a CSV file
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    /// Add a formula to the catalog
    pub fn add(&mut self, formula: Formula) -> Result<(), CatalogError> {
        if self.index.contains_key(&formula.id) {
            return Err(CatalogError::DuplicateId { id: formula.id });
        }
        if !formula.kcal_per_ml().is_some_and(|d| d > 0.0) {
            tracing::warn!(
                id = %formula.id,
                kcal = formula.kcal_per_volume,
                volume_ml = formula.reference_volume_ml,
                "Formula has no usable energy density; dosing will fail for it"
            );
        }
        self.index.insert(formula.id.clone(), self.formulas.len());
        self.formulas.push(formula);
        Ok(())
    }

    /// Get a formula by id
    pub fn get(&self, id: &str) -> Option<&Formula> {
        self.index.get(id).map(|&i| &self.formulas[i])
    }

    /// Check if a formula exists
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Formulas in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Formula> {
        self.formulas.iter()
    }

    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }
}
