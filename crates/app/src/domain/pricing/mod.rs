//! Pricing
//!
//! Derives raw value, discount and total for a basket. Views are computed on
//! every read and never stored.

mod calculator;
pub mod models;

pub use calculator::price_basket;
pub use models::{PricedBasket, PricedBasketItem};
