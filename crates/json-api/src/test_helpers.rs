//! Test helpers.

use std::sync::Arc;

use bigdecimal::num_bigint::BigInt;
use salvo::{affix_state::inject, prelude::*};

use checkout_app::{
    context::AppContext,
    domain::{
        baskets::{MockBasketsService, models::Basket},
        catalog::{CatalogError, MockProductCatalog, models::Product},
        promotions::MockPromotionsService,
    },
};

use crate::state::State;

pub(crate) fn product(id: &str) -> Option<Product> {
    let (name, price) = match id {
        "PRODUCT_1" => ("Product 1", 111),
        "PRODUCT_2" => ("Product 2", 222),
        _ => return None,
    };

    Some(Product {
        id: id.to_string(),
        name: name.to_string(),
        price: price.into(),
    })
}

/// Catalog knowing `PRODUCT_1` (111) and `PRODUCT_2` (222).
pub(crate) fn stub_catalog() -> MockProductCatalog {
    let mut catalog = MockProductCatalog::new();

    catalog
        .expect_get_product()
        .returning(|id| product(id).ok_or(CatalogError::NotFound));

    catalog.expect_list_products().never();

    catalog
}

/// An open basket holding `lines` of `(product id, amount)`.
pub(crate) fn make_basket(customer_id: &str, lines: &[(&str, i64)]) -> Basket {
    let mut basket = Basket::open(customer_id);

    for (id, amount) in lines {
        if let Some(product) = product(id) {
            basket.merge_item(&product, &BigInt::from(*amount));
        }
    }

    basket
}

pub(crate) fn strict_baskets_mock() -> MockBasketsService {
    let mut baskets = MockBasketsService::new();

    baskets.expect_add_item().never();
    baskets.expect_checkout().never();
    baskets.expect_get_open_basket().never();

    baskets
}

pub(crate) fn strict_promotions_mock() -> MockPromotionsService {
    let mut promotions = MockPromotionsService::new();

    promotions.expect_create_promotion().never();
    promotions.expect_find_qualifying_promotion().never();
    promotions.expect_list_promotions().never();
    promotions.expect_create_example_promotions().never();

    promotions
}

pub(crate) fn state_with(
    baskets: MockBasketsService,
    promotions: MockPromotionsService,
    catalog: MockProductCatalog,
) -> Arc<State> {
    State::from_app_context(AppContext {
        baskets: Arc::new(baskets),
        promotions: Arc::new(promotions),
        catalog: Arc::new(catalog),
    })
}

pub(crate) fn baskets_service(
    baskets: MockBasketsService,
    catalog: MockProductCatalog,
    route: Router,
) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with(baskets, strict_promotions_mock(), catalog)))
            .push(route),
    )
}

pub(crate) fn promotions_service(promotions: MockPromotionsService, route: Router) -> Service {
    let mut catalog = MockProductCatalog::new();

    catalog.expect_get_product().never();
    catalog.expect_list_products().never();

    Service::new(
        Router::new()
            .hoop(inject(state_with(strict_baskets_mock(), promotions, catalog)))
            .push(route),
    )
}
