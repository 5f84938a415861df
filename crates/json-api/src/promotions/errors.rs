//! Promotion Errors

use salvo::http::StatusError;
use tracing::{error, warn};

use checkout_app::domain::promotions::PromotionsServiceError;

pub(crate) fn into_status_error(error: PromotionsServiceError) -> StatusError {
    let brief = error.to_string();

    match error {
        PromotionsServiceError::InvalidPromotionAmount
        | PromotionsServiceError::InvalidPromotionDiscount
        | PromotionsServiceError::DiscountExceedsPrice => StatusError::bad_request().brief(brief),
        PromotionsServiceError::ProductNotFound => StatusError::not_found().brief(brief),
        PromotionsServiceError::ProductCatalogUnavailable(source) => {
            warn!("product catalog unavailable: {source}");

            StatusError::bad_gateway().brief(brief)
        }
        PromotionsServiceError::PromotionAlreadyExists => StatusError::conflict().brief(brief),
        PromotionsServiceError::Sql(source) => {
            error!("failed to process promotion: {source}");

            StatusError::internal_server_error()
        }
    }
}
