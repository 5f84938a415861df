//! App Router

use salvo::Router;

use crate::{baskets, promotions};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("basket")
                .post(baskets::add_item::handler)
                .push(
                    Router::with_path("{customer_id}")
                        .get(baskets::get::handler)
                        .push(Router::with_path("checkout").post(baskets::checkout::handler)),
                ),
        )
        .push(
            Router::with_path("promotion")
                .get(promotions::index::handler)
                .post(promotions::create::handler)
                .push(Router::with_path("example").post(promotions::examples::handler)),
        )
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use serde_json::Value;
    use testresult::TestResult;

    use checkout_app::domain::{
        baskets::{BasketsServiceError, MockBasketsService},
        promotions::MockPromotionsService,
    };

    use crate::test_helpers::{state_with, strict_baskets_mock, stub_catalog};

    use super::*;

    fn make_service(baskets: MockBasketsService, promotions: MockPromotionsService) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(state_with(baskets, promotions, stub_catalog())))
                .push(app_router()),
        )
    }

    #[tokio::test]
    async fn checkout_route_reaches_checkout() -> TestResult {
        let mut baskets = MockBasketsService::new();

        baskets
            .expect_checkout()
            .once()
            .withf(|customer_id| customer_id == "customer-7")
            .return_once(|_| Err(BasketsServiceError::NoOpenBasket));

        baskets.expect_get_open_basket().never();

        let mut promotions = MockPromotionsService::new();

        promotions.expect_list_promotions().never();

        let res = TestClient::post("http://example.com/basket/customer-7/checkout")
            .send(&make_service(baskets, promotions))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn promotion_route_lists_promotions() -> TestResult {
        let mut promotions = MockPromotionsService::new();

        promotions
            .expect_list_promotions()
            .once()
            .return_once(|| Ok(Vec::new()));

        let body: Value = TestClient::get("http://example.com/promotion")
            .send(&make_service(strict_baskets_mock(), promotions))
            .await
            .take_json()
            .await?;

        assert_eq!(body, serde_json::json!([]));

        Ok(())
    }
}
