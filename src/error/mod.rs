use thiserror::Error;

use crate::data::CatalogError;
use crate::enteral::DosingError;

#[derive(Error, Debug)]
pub enum NutrisolError {
    #[error("Error in the formula catalog: {0}")]
    CatalogError(#[from] CatalogError),
    #[error("Error in the enteral prescription: {0}")]
    DosingError(#[from] DosingError),
    #[error("Invalid assessment options: {0}")]
    OptionsError(#[from] serde_json::Error),
}
