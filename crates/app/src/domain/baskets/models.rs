//! Basket Models

use std::sync::Arc;

use bigdecimal::num_bigint::BigInt;
use jiff::Timestamp;
use num_traits::{One, Zero};

use crate::{
    domain::{
        baskets::errors::BasketsServiceError, catalog::models::Product,
        promotions::models::Promotion,
    },
    uuids::TypedUuid,
};

/// Basket UUID
pub type BasketUuid = TypedUuid<Basket>;

/// Basket Item UUID
pub type BasketItemUuid = TypedUuid<BasketItem>;

/// A customer's basket. Open while accepting items; closed for good once
/// checked out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Basket {
    pub uuid: BasketUuid,
    pub customer_id: String,
    pub is_open: bool,
    pub checked_out_at: Option<Timestamp>,

    /// Items in the order their products were first added.
    pub items: Vec<BasketItem>,
}

impl Basket {
    /// A fresh, empty, open basket for `customer_id`.
    #[must_use]
    pub fn open(customer_id: &str) -> Self {
        Self {
            uuid: BasketUuid::new(),
            customer_id: customer_id.to_string(),
            is_open: true,
            checked_out_at: None,
            items: Vec::new(),
        }
    }

    /// Add `amount` units of `product`, merging into the existing line for the
    /// same product. A new line locks in the product's current price.
    pub fn merge_item(&mut self, product: &Product, amount: &BigInt) -> &mut BasketItem {
        let position = match self
            .items
            .iter()
            .position(|item| item.product_id == product.id)
        {
            Some(position) => position,
            None => {
                self.items.push(BasketItem::new(product));
                self.items.len() - 1
            }
        };

        #[expect(
            clippy::indexing_slicing,
            reason = "position was just found in, or pushed onto, the items"
        )]
        let item = &mut self.items[position];

        item.amount += amount;

        item
    }

    /// Close the basket to further changes.
    pub fn close(&mut self) {
        self.is_open = false;
        self.checked_out_at = Some(Timestamp::now());
    }
}

/// A single product line within a basket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasketItem {
    pub uuid: BasketItemUuid,
    pub product_id: String,

    /// Price per unit when the product was first added.
    pub unit_price: BigInt,

    pub amount: BigInt,

    /// Attached the first time the line qualifies; never replaced or removed.
    pub promotion: Option<Arc<Promotion>>,
}

impl BasketItem {
    /// An empty line for `product` at its current price.
    #[must_use]
    pub fn new(product: &Product) -> Self {
        Self {
            uuid: BasketItemUuid::new(),
            product_id: product.id.clone(),
            unit_price: product.price.clone(),
            amount: BigInt::zero(),
            promotion: None,
        }
    }

    #[must_use]
    pub fn has_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    /// Attach `promotion` unless one is already attached. Returns whether it
    /// was attached.
    pub fn attach_promotion(&mut self, promotion: Arc<Promotion>) -> bool {
        if self.has_promotion() {
            return false;
        }

        self.promotion = Some(promotion);

        true
    }
}

/// Request to add units of a product to a customer's open basket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBasketItem {
    pub customer_id: Option<String>,
    pub product_id: String,
    pub amount: Option<BigInt>,
}

impl NewBasketItem {
    /// Check the customer is named and the amount is at least one.
    pub fn validate(self) -> Result<ValidBasketItem, BasketsServiceError> {
        let customer_id = self
            .customer_id
            .filter(|customer_id| !customer_id.trim().is_empty())
            .ok_or(BasketsServiceError::InvalidCustomerId)?;

        let amount = self
            .amount
            .filter(|amount| amount >= &BigInt::one())
            .ok_or(BasketsServiceError::InvalidAmount)?;

        Ok(ValidBasketItem {
            customer_id,
            product_id: self.product_id,
            amount,
        })
    }
}

/// A validated [`NewBasketItem`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidBasketItem {
    pub customer_id: String,
    pub product_id: String,
    pub amount: BigInt,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::promotions::models::PromotionUuid;

    use super::*;

    fn product(id: &str, price: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("{id} name"),
            price: price.into(),
        }
    }

    fn promotion(min_amount: i64, unit_discount: i64) -> Arc<Promotion> {
        Arc::new(Promotion {
            uuid: PromotionUuid::new(),
            product_id: "PRODUCT_1".to_string(),
            min_amount: min_amount.into(),
            unit_discount: unit_discount.into(),
            created_at: Timestamp::now(),
        })
    }

    #[test]
    fn open_basket_starts_empty() {
        let basket = Basket::open("customer-1");

        assert!(basket.is_open, "new baskets are open");
        assert!(basket.items.is_empty(), "new baskets have no items");
        assert_eq!(basket.checked_out_at, None);
    }

    #[test]
    fn merge_item_accumulates_same_product() {
        let mut basket = Basket::open("customer-1");
        let product_1 = product("PRODUCT_1", 111);

        basket.merge_item(&product_1, &1.into());
        basket.merge_item(&product("PRODUCT_2", 222), &1.into());
        let item = basket.merge_item(&product_1, &2.into());

        assert_eq!(item.amount, BigInt::from(3));
        assert_eq!(basket.items.len(), 2);

        let ids: Vec<&str> = basket
            .items
            .iter()
            .map(|item| item.product_id.as_str())
            .collect();

        assert_eq!(ids, ["PRODUCT_1", "PRODUCT_2"]);
    }

    #[test]
    fn merge_item_keeps_first_price() {
        let mut basket = Basket::open("customer-1");

        basket.merge_item(&product("PRODUCT_1", 111), &1.into());
        let item = basket.merge_item(&product("PRODUCT_1", 150), &1.into());

        assert_eq!(item.unit_price, BigInt::from(111));
    }

    #[test]
    fn merge_item_handles_huge_amounts() -> TestResult {
        let mut basket = Basket::open("customer-1");
        let huge: BigInt = "99999999999999999999999999".parse()?;

        basket.merge_item(&product("PRODUCT_1", 1), &huge);
        let item = basket.merge_item(&product("PRODUCT_1", 1), &1.into());

        assert_eq!(item.amount, "100000000000000000000000000".parse::<BigInt>()?);

        Ok(())
    }

    #[test]
    fn close_marks_basket_checked_out() {
        let mut basket = Basket::open("customer-1");

        basket.close();

        assert!(!basket.is_open, "closed baskets are not open");
        assert!(basket.checked_out_at.is_some(), "checkout time is recorded");
    }

    #[test]
    fn promotion_is_attached_once() {
        let mut item = BasketItem::new(&product("PRODUCT_1", 111));
        let first = promotion(2, 10);

        assert!(item.attach_promotion(Arc::clone(&first)), "first attach");
        assert!(!item.attach_promotion(promotion(5, 50)), "second attach");
        assert_eq!(item.promotion, Some(first));
    }

    #[test]
    fn validate_requires_customer_id() {
        for customer_id in [None, Some(String::new()), Some("   ".to_string())] {
            let result = NewBasketItem {
                customer_id: customer_id.clone(),
                product_id: "PRODUCT_1".to_string(),
                amount: Some(1.into()),
            }
            .validate();

            assert!(
                matches!(result, Err(BasketsServiceError::InvalidCustomerId)),
                "expected InvalidCustomerId for {customer_id:?}, got {result:?}"
            );
        }
    }

    #[test]
    fn validate_requires_positive_amount() {
        for amount in [None, Some(0), Some(-1)] {
            let result = NewBasketItem {
                customer_id: Some("customer-1".to_string()),
                product_id: "PRODUCT_1".to_string(),
                amount: amount.map(BigInt::from),
            }
            .validate();

            assert!(
                matches!(result, Err(BasketsServiceError::InvalidAmount)),
                "expected InvalidAmount for {amount:?}, got {result:?}"
            );
        }
    }

    #[test]
    fn validate_checks_customer_before_amount() {
        let result = NewBasketItem {
            customer_id: None,
            product_id: "PRODUCT_1".to_string(),
            amount: None,
        }
        .validate();

        assert!(
            matches!(result, Err(BasketsServiceError::InvalidCustomerId)),
            "expected InvalidCustomerId, got {result:?}"
        );
    }
}
