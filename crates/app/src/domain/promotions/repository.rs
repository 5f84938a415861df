//! Promotions Repository

use bigdecimal::num_bigint::BigInt;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::{
    domain::promotions::models::{Promotion, PromotionTerms, PromotionUuid},
    numeric::{to_numeric, try_get_integer},
};

const CREATE_PROMOTION_SQL: &str = include_str!("sql/create_promotion.sql");
const FIND_PROMOTION_BY_PRODUCT_SQL: &str = include_str!("sql/find_promotion_by_product.sql");
const FIND_QUALIFYING_PROMOTION_SQL: &str = include_str!("sql/find_qualifying_promotion.sql");
const LIST_PROMOTIONS_SQL: &str = include_str!("sql/list_promotions.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgPromotionsRepository;

impl PgPromotionsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_promotion(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        terms: &PromotionTerms,
    ) -> Result<Promotion, sqlx::Error> {
        query_as::<Postgres, Promotion>(CREATE_PROMOTION_SQL)
            .bind(terms.uuid.into_uuid())
            .bind(&terms.product_id)
            .bind(to_numeric(&terms.min_amount))
            .bind(to_numeric(&terms.unit_discount))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_by_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product_id: &str,
    ) -> Result<Option<Promotion>, sqlx::Error> {
        query_as::<Postgres, Promotion>(FIND_PROMOTION_BY_PRODUCT_SQL)
            .bind(product_id)
            .fetch_optional(&mut **tx)
            .await
    }

    /// The promotion for `product_id` with the greatest threshold not above
    /// `amount`.
    pub(crate) async fn find_by_product_and_amount(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product_id: &str,
        amount: &BigInt,
    ) -> Result<Option<Promotion>, sqlx::Error> {
        query_as::<Postgres, Promotion>(FIND_QUALIFYING_PROMOTION_SQL)
            .bind(product_id)
            .bind(to_numeric(amount))
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn list_promotions(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<Promotion>, sqlx::Error> {
        query_as::<Postgres, Promotion>(LIST_PROMOTIONS_SQL)
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Promotion {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: PromotionUuid::from_uuid(row.try_get("uuid")?),
            product_id: row.try_get("product_id")?,
            min_amount: try_get_integer(row, "min_amount")?,
            unit_discount: try_get_integer(row, "unit_discount")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
