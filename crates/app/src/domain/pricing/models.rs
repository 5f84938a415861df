//! Priced views

use bigdecimal::num_bigint::BigInt;
use num_traits::Zero;

use crate::domain::baskets::models::BasketItem;

/// A basket line with its derived values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedBasketItem {
    pub product_id: String,
    pub product_name: String,
    pub unit_price: BigInt,
    pub amount: BigInt,
    pub raw_value: BigInt,
    pub discount: BigInt,
    pub item_total: BigInt,
}

impl PricedBasketItem {
    #[must_use]
    pub fn new(item: &BasketItem, product_name: String) -> Self {
        let raw_value = &item.unit_price * &item.amount;

        let discount = item
            .promotion
            .as_ref()
            .map_or_else(BigInt::zero, |promotion| {
                promotion.discount_for(&item.amount)
            });

        let item_total = &raw_value - &discount;

        Self {
            product_id: item.product_id.clone(),
            product_name,
            unit_price: item.unit_price.clone(),
            amount: item.amount.clone(),
            raw_value,
            discount,
            item_total,
        }
    }
}

/// A basket with per-item and aggregate values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedBasket {
    pub customer_id: String,
    pub items: Vec<PricedBasketItem>,
    pub raw_value: BigInt,
    pub discount: BigInt,
    pub total: BigInt,
}

impl PricedBasket {
    /// Sum the item values in item order.
    #[must_use]
    pub fn from_items(customer_id: String, items: Vec<PricedBasketItem>) -> Self {
        let mut raw_value = BigInt::zero();
        let mut discount = BigInt::zero();
        let mut total = BigInt::zero();

        for item in &items {
            raw_value += &item.raw_value;
            discount += &item.discount;
            total += &item.item_total;
        }

        Self {
            customer_id,
            items,
            raw_value,
            discount,
            total,
        }
    }
}
