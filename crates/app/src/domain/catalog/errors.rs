//! Catalog errors.

use std::error::Error as StdError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("product not found")]
    NotFound,

    #[error("product catalog unavailable")]
    Unavailable(#[source] Box<dyn StdError + Send + Sync>),
}

impl From<reqwest::Error> for CatalogError {
    fn from(error: reqwest::Error) -> Self {
        Self::Unavailable(Box::new(error))
    }
}
