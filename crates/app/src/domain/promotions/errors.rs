//! Promotions service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::catalog::CatalogError;

#[derive(Debug, Error)]
pub enum PromotionsServiceError {
    #[error("promotion minimum amount must be at least 1")]
    InvalidPromotionAmount,

    #[error("promotion unit discount must be at least 1")]
    InvalidPromotionDiscount,

    #[error("promotion unit discount exceeds the product price")]
    DiscountExceedsPrice,

    #[error("a promotion already exists for this product")]
    PromotionAlreadyExists,

    #[error("product not found")]
    ProductNotFound,

    #[error("product catalog unavailable")]
    ProductCatalogUnavailable(#[source] CatalogError),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for PromotionsServiceError {
    fn from(error: Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::PromotionAlreadyExists,
            _ => Self::Sql(error),
        }
    }
}

impl From<CatalogError> for PromotionsServiceError {
    fn from(error: CatalogError) -> Self {
        match error {
            CatalogError::NotFound => Self::ProductNotFound,
            CatalogError::Unavailable(_) => Self::ProductCatalogUnavailable(error),
        }
    }
}
