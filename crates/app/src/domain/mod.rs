//! Checkout Domain Concerns

pub mod baskets;
pub mod catalog;
pub mod pricing;
pub mod promotions;
