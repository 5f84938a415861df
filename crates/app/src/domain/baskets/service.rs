//! Baskets service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Postgres, Transaction};
use tracing::{Span, info};

use crate::{
    database::Db,
    domain::{
        baskets::{
            errors::BasketsServiceError,
            models::{Basket, NewBasketItem},
            repositories::{PgBasketItemsRepository, PgBasketsRepository},
        },
        catalog::ProductCatalog,
        promotions::repository::PgPromotionsRepository,
    },
};

#[derive(Clone)]
pub struct PgBasketsService {
    db: Db,
    catalog: Arc<dyn ProductCatalog>,
    baskets_repository: PgBasketsRepository,
    items_repository: PgBasketItemsRepository,
    promotions_repository: PgPromotionsRepository,
}

impl PgBasketsService {
    #[must_use]
    pub fn new(db: Db, catalog: Arc<dyn ProductCatalog>) -> Self {
        Self {
            db,
            catalog,
            baskets_repository: PgBasketsRepository::new(),
            items_repository: PgBasketItemsRepository::new(),
            promotions_repository: PgPromotionsRepository::new(),
        }
    }

    /// Load the customer's open basket with its items.
    async fn load_open_basket(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer_id: &str,
    ) -> Result<Option<Basket>, sqlx::Error> {
        let Some(mut basket) = self
            .baskets_repository
            .find_open_basket(tx, customer_id)
            .await?
        else {
            return Ok(None);
        };

        let items = self
            .items_repository
            .get_basket_items(tx, basket.uuid)
            .await?;

        basket.items.extend(items);

        Ok(Some(basket))
    }

    async fn save(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        basket: &Basket,
    ) -> Result<(), sqlx::Error> {
        self.baskets_repository.save_basket(tx, basket).await?;

        self.items_repository
            .save_basket_items(tx, basket.uuid, &basket.items)
            .await
    }
}

impl Debug for PgBasketsService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("PgBasketsService")
            .field("db", &self.db)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl BasketsService for PgBasketsService {
    #[tracing::instrument(
        name = "baskets.service.add_item",
        skip(self, item),
        fields(
            product_id = %item.product_id,
            basket_uuid = tracing::field::Empty,
            promotion_attached = tracing::field::Empty
        ),
        err
    )]
    async fn add_item(&self, item: NewBasketItem) -> Result<Basket, BasketsServiceError> {
        let item = item.validate()?;

        let product = self.catalog.get_product(&item.product_id).await?;

        let mut tx = self.db.begin_transaction().await?;

        self.baskets_repository
            .lock_customer(&mut tx, &item.customer_id)
            .await?;

        let mut basket = match self.load_open_basket(&mut tx, &item.customer_id).await? {
            Some(basket) => basket,
            None => {
                info!(customer_id = %item.customer_id, "opening basket");

                Basket::open(&item.customer_id)
            }
        };

        let span = Span::current();

        span.record("basket_uuid", tracing::field::display(basket.uuid));

        let merged = basket.merge_item(&product, &item.amount);

        let mut promotion_attached = false;

        if !merged.has_promotion()
            && let Some(promotion) = self
                .promotions_repository
                .find_by_product_and_amount(&mut tx, &merged.product_id, &merged.amount)
                .await?
        {
            info!(promotion_uuid = %promotion.uuid, "attaching promotion");

            promotion_attached = merged.attach_promotion(Arc::new(promotion));
        }

        span.record("promotion_attached", promotion_attached);

        info!(amount = %merged.amount, "merged item into basket");

        self.save(&mut tx, &basket).await?;

        tx.commit().await?;

        Ok(basket)
    }

    #[tracing::instrument(name = "baskets.service.checkout", skip(self), err)]
    async fn checkout(&self, customer_id: &str) -> Result<Basket, BasketsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        self.baskets_repository
            .lock_customer(&mut tx, customer_id)
            .await?;

        let mut basket = self
            .load_open_basket(&mut tx, customer_id)
            .await?
            .ok_or(BasketsServiceError::NoOpenBasket)?;

        basket.close();

        self.baskets_repository
            .save_basket(&mut tx, &basket)
            .await?;

        tx.commit().await?;

        info!(basket_uuid = %basket.uuid, item_count = basket.items.len(), "checked out basket");

        Ok(basket)
    }

    #[tracing::instrument(name = "baskets.service.get_open_basket", skip(self), err)]
    async fn get_open_basket(&self, customer_id: &str) -> Result<Basket, BasketsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let basket = self
            .load_open_basket(&mut tx, customer_id)
            .await?
            .ok_or(BasketsServiceError::NoOpenBasket)?;

        tx.commit().await?;

        Ok(basket)
    }
}

#[automock]
#[async_trait]
pub trait BasketsService: Send + Sync {
    /// Add units of a product to the customer's open basket, opening one if
    /// needed, and attach a promotion once the line first qualifies.
    async fn add_item(&self, item: NewBasketItem) -> Result<Basket, BasketsServiceError>;

    /// Close the customer's open basket.
    async fn checkout(&self, customer_id: &str) -> Result<Basket, BasketsServiceError>;

    /// Retrieve the customer's open basket.
    async fn get_open_basket(&self, customer_id: &str) -> Result<Basket, BasketsServiceError>;
}
