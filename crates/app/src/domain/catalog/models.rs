//! Catalog Models

use bigdecimal::num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::numeric::integer;

/// Product as reported by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,

    /// Unit price in minor currency units.
    #[serde(with = "integer")]
    pub price: BigInt,
}
