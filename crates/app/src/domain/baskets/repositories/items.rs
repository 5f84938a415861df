//! Basket Items Repository

use std::sync::Arc;

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::{
    domain::{
        baskets::models::{BasketItem, BasketItemUuid, BasketUuid},
        promotions::models::{Promotion, PromotionUuid},
    },
    numeric::{to_numeric, try_get_integer},
};

const GET_BASKET_ITEMS_SQL: &str = include_str!("../sql/get_basket_items.sql");
const SAVE_BASKET_ITEM_SQL: &str = include_str!("../sql/save_basket_item.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgBasketItemsRepository;

impl PgBasketItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Items of a basket in insertion order, with their promotions.
    pub(crate) async fn get_basket_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        basket: BasketUuid,
    ) -> Result<Vec<BasketItem>, sqlx::Error> {
        query_as::<Postgres, BasketItem>(GET_BASKET_ITEMS_SQL)
            .bind(basket.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    /// Upsert every item; an item's position is its index in `items`.
    pub(crate) async fn save_basket_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        basket: BasketUuid,
        items: &[BasketItem],
    ) -> Result<(), sqlx::Error> {
        for (position, item) in items.iter().enumerate() {
            let position =
                i32::try_from(position).map_err(|error| sqlx::Error::Encode(Box::new(error)))?;

            query(SAVE_BASKET_ITEM_SQL)
                .bind(item.uuid.into_uuid())
                .bind(basket.into_uuid())
                .bind(position)
                .bind(&item.product_id)
                .bind(to_numeric(&item.unit_price))
                .bind(to_numeric(&item.amount))
                .bind(
                    item.promotion
                        .as_ref()
                        .map(|promotion| promotion.uuid.into_uuid()),
                )
                .execute(&mut **tx)
                .await?;
        }

        Ok(())
    }
}

impl<'r> FromRow<'r, PgRow> for BasketItem {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let product_id: String = row.try_get("product_id")?;

        let promotion = match row.try_get::<Option<Uuid>, _>("promotion_uuid")? {
            Some(uuid) => Some(Arc::new(Promotion {
                uuid: PromotionUuid::from_uuid(uuid),
                product_id: product_id.clone(),
                min_amount: try_get_integer(row, "promotion_min_amount")?,
                unit_discount: try_get_integer(row, "promotion_unit_discount")?,
                created_at: row
                    .try_get::<SqlxTimestamp, _>("promotion_created_at")?
                    .to_jiff(),
            })),
            None => None,
        };

        Ok(Self {
            uuid: BasketItemUuid::from_uuid(row.try_get("uuid")?),
            product_id,
            unit_price: try_get_integer(row, "unit_price")?,
            amount: try_get_integer(row, "amount")?,
            promotion,
        })
    }
}
