//! Create Promotion Handler

use bigdecimal::num_bigint::BigInt;
use salvo::{oapi::extract::JsonBody, prelude::*};
use serde::Deserialize;

use checkout_app::{domain::promotions::models::NewPromotion, numeric::optional_integer};

use crate::{
    extensions::*,
    promotions::{errors::into_status_error, responses::PromotionResponse},
};

/// Create Promotion Request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreatePromotionRequest {
    /// Catalog product identifier
    pub product_id: String,

    /// Units needed before the discount applies, at least 1
    #[serde(default, with = "optional_integer")]
    #[salvo(schema(value_type = Option<i64>))]
    pub min_amount: Option<BigInt>,

    /// Discount per unit, at least 1 and at most the product price
    #[serde(default, with = "optional_integer")]
    #[salvo(schema(value_type = Option<i64>))]
    pub unit_discount: Option<BigInt>,
}

impl From<CreatePromotionRequest> for NewPromotion {
    fn from(request: CreatePromotionRequest) -> Self {
        Self {
            product_id: request.product_id,
            min_amount: request.min_amount,
            unit_discount: request.unit_discount,
        }
    }
}

/// Create Promotion Handler
#[endpoint(
    tags("promotions"),
    summary = "Create Promotion",
    responses(
        (status_code = StatusCode::CREATED, description = "Promotion created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid promotion terms"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::CONFLICT, description = "Promotion already exists"),
        (status_code = StatusCode::BAD_GATEWAY, description = "Product catalog unavailable"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreatePromotionRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<PromotionResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let promotion = state
        .app
        .promotions
        .create_promotion(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(promotion.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use checkout_app::domain::promotions::{MockPromotionsService, PromotionsServiceError};

    use crate::{promotions::handlers::tests::make_promotion, test_helpers::promotions_service};

    use super::*;

    fn make_service(promotions: MockPromotionsService) -> Service {
        promotions_service(promotions, Router::with_path("promotion").post(handler))
    }

    #[tokio::test]
    async fn test_create_promotion_success() -> TestResult {
        let promotion = make_promotion("PRODUCT_1", 2, 1);
        let uuid = promotion.uuid.into_uuid();

        let mut promotions = MockPromotionsService::new();

        promotions
            .expect_create_promotion()
            .once()
            .withf(|new| {
                *new == NewPromotion {
                    product_id: "PRODUCT_1".to_string(),
                    min_amount: Some(2.into()),
                    unit_discount: Some(1.into()),
                }
            })
            .return_once(move |_| Ok(promotion));

        let mut res = TestClient::post("http://example.com/promotion")
            .json(&json!({ "productId": "PRODUCT_1", "minAmount": 2, "unitDiscount": 1 }))
            .send(&make_service(promotions))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        let body: PromotionResponse = res.take_json().await?;

        assert_eq!(body.id, uuid);
        assert_eq!(body.product_id, "PRODUCT_1");
        assert_eq!(body.min_amount, BigInt::from(2));
        assert_eq!(body.unit_discount, BigInt::from(1));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_promotion_passes_missing_terms_to_validation() -> TestResult {
        let mut promotions = MockPromotionsService::new();

        promotions
            .expect_create_promotion()
            .once()
            .withf(|new| new.min_amount.is_none() && new.unit_discount.is_none())
            .return_once(|_| Err(PromotionsServiceError::InvalidPromotionAmount));

        let res = TestClient::post("http://example.com/promotion")
            .json(&json!({ "productId": "PRODUCT_1" }))
            .send(&make_service(promotions))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_promotion_duplicate_returns_409() -> TestResult {
        let mut promotions = MockPromotionsService::new();

        promotions
            .expect_create_promotion()
            .once()
            .return_once(|_| Err(PromotionsServiceError::PromotionAlreadyExists));

        let res = TestClient::post("http://example.com/promotion")
            .json(&json!({ "productId": "PRODUCT_1", "minAmount": 3, "unitDiscount": 5 }))
            .send(&make_service(promotions))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_promotion_discount_above_price_returns_400() -> TestResult {
        let mut promotions = MockPromotionsService::new();

        promotions
            .expect_create_promotion()
            .once()
            .return_once(|_| Err(PromotionsServiceError::DiscountExceedsPrice));

        let res = TestClient::post("http://example.com/promotion")
            .json(&json!({ "productId": "PRODUCT_1", "minAmount": 2, "unitDiscount": 112 }))
            .send(&make_service(promotions))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_promotion_unknown_product_returns_404() -> TestResult {
        let mut promotions = MockPromotionsService::new();

        promotions
            .expect_create_promotion()
            .once()
            .return_once(|_| Err(PromotionsServiceError::ProductNotFound));

        let res = TestClient::post("http://example.com/promotion")
            .json(&json!({ "productId": "PRODUCT_9", "minAmount": 2, "unitDiscount": 1 }))
            .send(&make_service(promotions))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
