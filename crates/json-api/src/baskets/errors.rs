//! Basket Errors

use salvo::http::StatusError;
use tracing::{error, warn};

use checkout_app::domain::{baskets::BasketsServiceError, catalog::CatalogError};

pub(crate) fn into_status_error(error: BasketsServiceError) -> StatusError {
    let brief = error.to_string();

    match error {
        BasketsServiceError::InvalidCustomerId | BasketsServiceError::InvalidAmount => {
            StatusError::bad_request().brief(brief)
        }
        BasketsServiceError::ProductNotFound | BasketsServiceError::NoOpenBasket => {
            StatusError::not_found().brief(brief)
        }
        BasketsServiceError::ProductCatalogUnavailable(source) => {
            warn!("product catalog unavailable: {source}");

            StatusError::bad_gateway().brief(brief)
        }
        BasketsServiceError::OpenBasketConflict => StatusError::conflict().brief(brief),
        BasketsServiceError::Sql(source) => {
            error!("failed to process basket: {source}");

            StatusError::internal_server_error()
        }
    }
}

/// Pricing failures surface the same way as catalog failures on add-item.
pub(crate) fn pricing_status_error(error: CatalogError) -> StatusError {
    into_status_error(BasketsServiceError::from(error))
}
