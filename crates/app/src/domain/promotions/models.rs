//! Promotion Models

use bigdecimal::num_bigint::BigInt;
use jiff::Timestamp;
use num_traits::{One, Signed};

use crate::{
    domain::{catalog::models::Product, promotions::errors::PromotionsServiceError},
    uuids::TypedUuid,
};

/// Promotion UUID
pub type PromotionUuid = TypedUuid<Promotion>;

/// Minimum quantity used for generated example promotions.
const EXAMPLE_MIN_AMOUNT: u32 = 2;

/// Fraction of the unit price granted as discount by example promotions.
const EXAMPLE_DISCOUNT_DIVISOR: u32 = 10;

/// Volume promotion: buying at least `min_amount` units of `product_id` takes
/// `unit_discount` off every unit. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Promotion {
    pub uuid: PromotionUuid,
    pub product_id: String,
    pub min_amount: BigInt,
    pub unit_discount: BigInt,
    pub created_at: Timestamp,
}

impl Promotion {
    /// Whether buying `amount` units reaches this promotion's threshold.
    #[must_use]
    pub fn qualifies(&self, amount: &BigInt) -> bool {
        amount >= &self.min_amount
    }

    /// Total discount for `amount` units.
    #[must_use]
    pub fn discount_for(&self, amount: &BigInt) -> BigInt {
        &self.unit_discount * amount
    }
}

/// Promotion creation request. Quantities are optional so that a missing value
/// is reported as a validation failure rather than a decoding one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPromotion {
    pub product_id: String,
    pub min_amount: Option<BigInt>,
    pub unit_discount: Option<BigInt>,
}

impl NewPromotion {
    /// Check both quantities are present and positive.
    pub fn validate(self) -> Result<PromotionTerms, PromotionsServiceError> {
        let min_amount = self
            .min_amount
            .filter(|amount| amount >= &BigInt::one())
            .ok_or(PromotionsServiceError::InvalidPromotionAmount)?;

        let unit_discount = self
            .unit_discount
            .filter(|discount| discount >= &BigInt::one())
            .ok_or(PromotionsServiceError::InvalidPromotionDiscount)?;

        Ok(PromotionTerms {
            uuid: PromotionUuid::new(),
            product_id: self.product_id,
            min_amount,
            unit_discount,
        })
    }
}

/// Validated promotion, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromotionTerms {
    pub uuid: PromotionUuid,
    pub product_id: String,
    pub min_amount: BigInt,
    pub unit_discount: BigInt,
}

impl PromotionTerms {
    /// Reject a discount larger than the product's unit price.
    pub fn ensure_affordable(&self, product: &Product) -> Result<(), PromotionsServiceError> {
        if self.unit_discount > product.price {
            return Err(PromotionsServiceError::DiscountExceedsPrice);
        }

        Ok(())
    }

    /// Example terms for a product: two or more units take a tenth of the
    /// price (at least 1) off each unit. Free products get none.
    #[must_use]
    pub fn example_for(product: &Product) -> Option<Self> {
        if !product.price.is_positive() {
            return None;
        }

        let unit_discount = (&product.price / EXAMPLE_DISCOUNT_DIVISOR).max(BigInt::one());

        Some(Self {
            uuid: PromotionUuid::new(),
            product_id: product.id.clone(),
            min_amount: BigInt::from(EXAMPLE_MIN_AMOUNT),
            unit_discount,
        })
    }
}
