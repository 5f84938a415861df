//! Basket pricing.

use crate::domain::{
    baskets::models::Basket,
    catalog::{CatalogError, ProductCatalog},
    pricing::models::{PricedBasket, PricedBasketItem},
};

/// Price every item of `basket` and aggregate the totals.
///
/// Unit prices come from the basket itself; only the display name is looked up
/// in the catalog, so a product that disappeared from the catalog fails the
/// whole view.
#[tracing::instrument(
    name = "pricing.price_basket",
    skip(catalog, basket),
    fields(basket_uuid = %basket.uuid, item_count = basket.items.len()),
    err
)]
pub async fn price_basket(
    catalog: &dyn ProductCatalog,
    basket: &Basket,
) -> Result<PricedBasket, CatalogError> {
    let mut items = Vec::with_capacity(basket.items.len());

    for item in &basket.items {
        let product = catalog.get_product(&item.product_id).await?;

        items.push(PricedBasketItem::new(item, product.name));
    }

    Ok(PricedBasket::from_items(basket.customer_id.clone(), items))
}
