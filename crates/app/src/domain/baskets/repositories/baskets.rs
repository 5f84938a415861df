//! Baskets Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::baskets::models::{Basket, BasketUuid};

const LOCK_CUSTOMER_SQL: &str = include_str!("../sql/lock_customer.sql");
const FIND_OPEN_BASKET_SQL: &str = include_str!("../sql/find_open_basket.sql");
const SAVE_BASKET_SQL: &str = include_str!("../sql/save_basket.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgBasketsRepository;

impl PgBasketsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Serialize the rest of the transaction against any other transaction
    /// working on the same customer. Released on commit or rollback.
    pub(crate) async fn lock_customer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer_id: &str,
    ) -> Result<(), sqlx::Error> {
        query(LOCK_CUSTOMER_SQL)
            .bind(customer_id)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    /// The customer's open basket without its items.
    pub(crate) async fn find_open_basket(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer_id: &str,
    ) -> Result<Option<Basket>, sqlx::Error> {
        query_as::<Postgres, Basket>(FIND_OPEN_BASKET_SQL)
            .bind(customer_id)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn save_basket(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        basket: &Basket,
    ) -> Result<(), sqlx::Error> {
        query(SAVE_BASKET_SQL)
            .bind(basket.uuid.into_uuid())
            .bind(&basket.customer_id)
            .bind(basket.is_open)
            .bind(basket.checked_out_at.map(SqlxTimestamp::from))
            .execute(&mut **tx)
            .await?;

        Ok(())
    }
}

impl<'r> FromRow<'r, PgRow> for Basket {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: BasketUuid::from_uuid(row.try_get("uuid")?),
            customer_id: row.try_get("customer_id")?,
            is_open: row.try_get("is_open")?,
            checked_out_at: row
                .try_get::<Option<SqlxTimestamp>, _>("checked_out_at")?
                .map(SqlxTimestamp::to_jiff),
            items: Vec::new(),
        })
    }
}
