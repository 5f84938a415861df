//! Baskets service errors.

use sqlx::{Error, error::ErrorKind};
use thiserror::Error;

use crate::domain::catalog::CatalogError;

/// Partial unique index allowing one open basket per customer.
const OPEN_BASKET_CONSTRAINT: &str = "baskets_open_customer_id_key";

#[derive(Debug, Error)]
pub enum BasketsServiceError {
    #[error("customer id is required")]
    InvalidCustomerId,

    #[error("amount must be at least 1")]
    InvalidAmount,

    #[error("product not found")]
    ProductNotFound,

    #[error("product catalog unavailable")]
    ProductCatalogUnavailable(#[source] CatalogError),

    #[error("no open basket for this customer")]
    NoOpenBasket,

    #[error("customer already has an open basket")]
    OpenBasketConflict,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for BasketsServiceError {
    fn from(error: Error) -> Self {
        if let Some(database_error) = error.as_database_error()
            && matches!(database_error.kind(), ErrorKind::UniqueViolation)
            && database_error.constraint() == Some(OPEN_BASKET_CONSTRAINT)
        {
            return Self::OpenBasketConflict;
        }

        Self::Sql(error)
    }
}

impl From<CatalogError> for BasketsServiceError {
    fn from(error: CatalogError) -> Self {
        match error {
            CatalogError::NotFound => Self::ProductNotFound,
            CatalogError::Unavailable(_) => Self::ProductCatalogUnavailable(error),
        }
    }
}
