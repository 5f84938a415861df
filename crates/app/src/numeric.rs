//! Arbitrary-precision integers
//!
//! Prices, quantities and discounts are unbounded integers. They are stored as
//! `NUMERIC` columns and exchanged as plain JSON numbers.

use bigdecimal::{BigDecimal, num_bigint::BigInt};
use sqlx::{Row, postgres::PgRow};

/// Convert an integer into a scale-0 `NUMERIC` value for binding.
pub(crate) fn to_numeric(value: &BigInt) -> BigDecimal {
    BigDecimal::new(value.clone(), 0)
}

/// Convert a `NUMERIC` value back into an integer, rejecting fractional values.
pub(crate) fn from_numeric(value: BigDecimal) -> Result<BigInt, String> {
    if !value.is_integer() {
        return Err(format!("expected an integer, found {value}"));
    }

    let (digits, _scale) = value.with_scale(0).into_bigint_and_exponent();

    Ok(digits)
}

pub(crate) fn try_get_integer(row: &PgRow, col: &str) -> Result<BigInt, sqlx::Error> {
    let value: BigDecimal = row.try_get(col)?;

    from_numeric(value).map_err(|message| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: message.into(),
    })
}

/// Serde adapter writing a [`BigInt`] as a JSON number of any size.
pub mod integer {
    use bigdecimal::num_bigint::BigInt;
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _, ser::Error as _};
    use serde_json::Number;

    /// Serialize an integer as a JSON number.
    pub fn serialize<S: Serializer>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
        let number: Number = serde_json::from_str(&value.to_string()).map_err(S::Error::custom)?;

        number.serialize(serializer)
    }

    /// Deserialize an integer from a JSON number, rejecting fractions.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigInt, D::Error> {
        let number = Number::deserialize(deserializer)?;

        number.to_string().parse().map_err(D::Error::custom)
    }
}

/// Serde adapter for an optional [`BigInt`]; `null` and absent fields map to `None`.
pub mod optional_integer {
    use bigdecimal::num_bigint::BigInt;
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};
    use serde_json::Number;

    /// Serialize an optional integer as a JSON number or `null`.
    #[expect(
        clippy::ref_option,
        reason = "serde `with` adapters receive a reference to the field"
    )]
    pub fn serialize<S: Serializer>(
        value: &Option<BigInt>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => super::integer::serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize an optional integer from a JSON number or `null`.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<BigInt>, D::Error> {
        Option::<Number>::deserialize(deserializer)?
            .map(|number| number.to_string().parse().map_err(D::Error::custom))
            .transpose()
    }
}
