//! Checkout Basket Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    baskets::{
        errors::into_status_error,
        responses::{BasketResponse, priced_response},
    },
    extensions::*,
};

/// Checkout Basket Handler
///
/// Closes the customer's open basket and returns its final priced view.
#[endpoint(
    tags("baskets"),
    summary = "Checkout Basket",
    responses(
        (status_code = StatusCode::OK, description = "Basket checked out"),
        (status_code = StatusCode::NOT_FOUND, description = "No open basket"),
        (status_code = StatusCode::BAD_GATEWAY, description = "Product catalog unavailable"),
    ),
)]
pub(crate) async fn handler(
    customer_id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<BasketResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let basket = state
        .app
        .baskets
        .checkout(&customer_id.into_inner())
        .await
        .map_err(into_status_error)?;

    priced_response(state, &basket).await
}
