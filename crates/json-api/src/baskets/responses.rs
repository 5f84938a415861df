//! Basket Responses

use bigdecimal::num_bigint::BigInt;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use checkout_app::{
    domain::{
        baskets::models::Basket,
        pricing::{PricedBasket, PricedBasketItem, price_basket},
    },
    numeric::integer,
};

use crate::{baskets::errors::pricing_status_error, state::State};

/// Priced Basket Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BasketResponse {
    /// The customer owning the basket
    pub customer_id: String,

    /// The basket items in the order they were first added
    pub items: Vec<BasketItemResponse>,

    /// Sum of unit price times amount over all items
    #[serde(with = "integer")]
    #[salvo(schema(value_type = i64))]
    pub raw_value: BigInt,

    /// Sum of all promotion discounts
    #[serde(with = "integer")]
    #[salvo(schema(value_type = i64))]
    pub discount: BigInt,

    /// Raw value minus discount
    #[serde(with = "integer")]
    #[salvo(schema(value_type = i64))]
    pub total: BigInt,
}

impl From<PricedBasket> for BasketResponse {
    fn from(basket: PricedBasket) -> Self {
        Self {
            customer_id: basket.customer_id,
            items: basket.items.into_iter().map(Into::into).collect(),
            raw_value: basket.raw_value,
            discount: basket.discount,
            total: basket.total,
        }
    }
}

/// Priced Basket Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BasketItemResponse {
    pub product_id: String,

    /// Current display name from the product catalog
    pub product_name: String,

    /// Unit price locked in when the product was first added
    #[serde(with = "integer")]
    #[salvo(schema(value_type = i64))]
    pub unit_price: BigInt,

    #[serde(with = "integer")]
    #[salvo(schema(value_type = i64))]
    pub amount: BigInt,

    #[serde(with = "integer")]
    #[salvo(schema(value_type = i64))]
    pub raw_value: BigInt,

    #[serde(with = "integer")]
    #[salvo(schema(value_type = i64))]
    pub discount: BigInt,

    #[serde(with = "integer")]
    #[salvo(schema(value_type = i64))]
    pub item_total: BigInt,
}

impl From<PricedBasketItem> for BasketItemResponse {
    fn from(item: PricedBasketItem) -> Self {
        Self {
            product_id: item.product_id,
            product_name: item.product_name,
            unit_price: item.unit_price,
            amount: item.amount,
            raw_value: item.raw_value,
            discount: item.discount,
            item_total: item.item_total,
        }
    }
}

/// Price `basket` against the live catalog for a response body.
pub(crate) async fn priced_response(
    state: &State,
    basket: &Basket,
) -> Result<Json<BasketResponse>, StatusError> {
    let priced = price_basket(state.app.catalog.as_ref(), basket)
        .await
        .map_err(pricing_status_error)?;

    Ok(Json(priced.into()))
}
