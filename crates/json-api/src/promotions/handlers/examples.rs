//! Example Promotions Handler

use salvo::prelude::*;
use tracing::info;

use crate::{extensions::*, promotions::errors::into_status_error};

/// Example Promotions Handler
///
/// Creates a "buy two, save a tenth" promotion for every catalog product that
/// has none yet.
#[endpoint(
    tags("promotions"),
    summary = "Create Example Promotions",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Promotions created"),
        (status_code = StatusCode::BAD_GATEWAY, description = "Product catalog unavailable"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot, res: &mut Response) -> Result<(), StatusError> {
    let state = depot.state_or_500()?;

    let created = state
        .app
        .promotions
        .create_example_promotions()
        .await
        .map_err(into_status_error)?;

    info!(created = created.len(), "example promotions created");

    res.status_code(StatusCode::NO_CONTENT);

    Ok(())
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use checkout_app::domain::{
        catalog::CatalogError,
        promotions::{MockPromotionsService, PromotionsServiceError},
    };

    use crate::{promotions::handlers::tests::make_promotion, test_helpers::promotions_service};

    use super::*;

    fn make_service(promotions: MockPromotionsService) -> Service {
        promotions_service(
            promotions,
            Router::with_path("promotion/example").post(handler),
        )
    }

    #[tokio::test]
    async fn test_examples_returns_no_content() -> TestResult {
        let created = vec![
            make_promotion("PRODUCT_1", 2, 11),
            make_promotion("PRODUCT_2", 2, 22),
        ];

        let mut promotions = MockPromotionsService::new();

        promotions
            .expect_create_example_promotions()
            .once()
            .return_once(move || Ok(created));

        let mut res = TestClient::post("http://example.com/promotion/example")
            .send(&make_service(promotions))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));
        assert!(res.take_string().await?.is_empty(), "expected an empty body");

        Ok(())
    }

    #[tokio::test]
    async fn test_examples_catalog_outage_returns_502() -> TestResult {
        let mut promotions = MockPromotionsService::new();

        promotions
            .expect_create_example_promotions()
            .once()
            .return_once(|| {
                Err(PromotionsServiceError::ProductCatalogUnavailable(
                    CatalogError::Unavailable("503 Service Unavailable".into()),
                ))
            });

        let res = TestClient::post("http://example.com/promotion/example")
            .send(&make_service(promotions))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_GATEWAY));

        Ok(())
    }
}
