//! Add Basket Item Handler

use bigdecimal::num_bigint::BigInt;
use salvo::{oapi::extract::JsonBody, prelude::*};
use serde::Deserialize;

use checkout_app::{domain::baskets::models::NewBasketItem, numeric::optional_integer};

use crate::{
    baskets::{
        errors::into_status_error,
        responses::{BasketResponse, priced_response},
    },
    extensions::*,
};

/// Add Basket Item Request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddItemRequest {
    /// The customer whose open basket receives the item
    pub customer_id: Option<String>,

    /// Catalog product identifier
    pub product_id: String,

    /// Number of units to add, at least 1
    #[serde(default, with = "optional_integer")]
    #[salvo(schema(value_type = Option<i64>))]
    pub amount: Option<BigInt>,
}

impl From<AddItemRequest> for NewBasketItem {
    fn from(request: AddItemRequest) -> Self {
        Self {
            customer_id: request.customer_id,
            product_id: request.product_id,
            amount: request.amount,
        }
    }
}

/// Add Basket Item Handler
///
/// Adds units of a product to the customer's open basket, opening one when
/// needed, and returns the priced basket.
#[endpoint(
    tags("baskets"),
    summary = "Add Basket Item",
    responses(
        (status_code = StatusCode::OK, description = "Item added"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid customer or amount"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_GATEWAY, description = "Product catalog unavailable"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<AddItemRequest>,
    depot: &mut Depot,
) -> Result<Json<BasketResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let basket = state
        .app
        .baskets
        .add_item(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    priced_response(state, &basket).await
}
