//! Promotion Responses

use bigdecimal::num_bigint::BigInt;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use checkout_app::{domain::promotions::models::Promotion, numeric::integer};

/// Promotion Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PromotionResponse {
    /// The unique identifier of the promotion
    pub id: Uuid,

    /// The product the promotion applies to
    pub product_id: String,

    /// Units needed before the discount applies
    #[serde(with = "integer")]
    #[salvo(schema(value_type = i64))]
    pub min_amount: BigInt,

    /// Discount taken off every unit once qualified
    #[serde(with = "integer")]
    #[salvo(schema(value_type = i64))]
    pub unit_discount: BigInt,
}

impl From<Promotion> for PromotionResponse {
    fn from(promotion: Promotion) -> Self {
        Self {
            id: promotion.uuid.into_uuid(),
            product_id: promotion.product_id,
            min_amount: promotion.min_amount,
            unit_discount: promotion.unit_discount,
        }
    }
}
