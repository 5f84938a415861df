//! Promotions Service

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use async_trait::async_trait;
use bigdecimal::num_bigint::BigInt;
use mockall::automock;
use tracing::{Span, debug, info};

use crate::{
    database::Db,
    domain::{
        catalog::ProductCatalog,
        promotions::{
            PromotionsServiceError,
            models::{NewPromotion, Promotion, PromotionTerms},
            repository::PgPromotionsRepository,
        },
    },
};

#[derive(Clone)]
pub struct PgPromotionsService {
    db: Db,
    catalog: Arc<dyn ProductCatalog>,
    promotions: PgPromotionsRepository,
}

impl PgPromotionsService {
    #[must_use]
    pub fn new(db: Db, catalog: Arc<dyn ProductCatalog>) -> Self {
        Self {
            db,
            catalog,
            promotions: PgPromotionsRepository::new(),
        }
    }
}

impl Debug for PgPromotionsService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("PgPromotionsService")
            .field("db", &self.db)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl PromotionsService for PgPromotionsService {
    #[tracing::instrument(
        name = "promotions.service.create_promotion",
        skip(self, promotion),
        fields(
            product_id = %promotion.product_id,
            promotion_uuid = tracing::field::Empty
        ),
        err
    )]
    async fn create_promotion(
        &self,
        promotion: NewPromotion,
    ) -> Result<Promotion, PromotionsServiceError> {
        let terms = promotion.validate()?;

        let product = self.catalog.get_product(&terms.product_id).await?;

        terms.ensure_affordable(&product)?;

        let mut tx = self.db.begin_transaction().await?;

        if self
            .promotions
            .find_by_product(&mut tx, &terms.product_id)
            .await?
            .is_some()
        {
            return Err(PromotionsServiceError::PromotionAlreadyExists);
        }

        let created = self.promotions.create_promotion(&mut tx, &terms).await?;

        tx.commit().await?;

        Span::current().record("promotion_uuid", tracing::field::display(created.uuid));

        info!(
            promotion_uuid = %created.uuid,
            min_amount = %created.min_amount,
            unit_discount = %created.unit_discount,
            "created promotion"
        );

        Ok(created)
    }

    #[tracing::instrument(
        name = "promotions.service.find_qualifying_promotion",
        skip(self, amount),
        fields(amount = %amount),
        err
    )]
    async fn find_qualifying_promotion(
        &self,
        product_id: &str,
        amount: &BigInt,
    ) -> Result<Option<Promotion>, PromotionsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let promotion = self
            .promotions
            .find_by_product_and_amount(&mut tx, product_id, amount)
            .await?;

        tx.commit().await?;

        Ok(promotion)
    }

    #[tracing::instrument(name = "promotions.service.list_promotions", skip(self), err)]
    async fn list_promotions(&self) -> Result<Vec<Promotion>, PromotionsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let promotions = self.promotions.list_promotions(&mut tx).await?;

        tx.commit().await?;

        Ok(promotions)
    }

    #[tracing::instrument(
        name = "promotions.service.create_example_promotions",
        skip(self),
        fields(created_count = tracing::field::Empty),
        err
    )]
    async fn create_example_promotions(&self) -> Result<Vec<Promotion>, PromotionsServiceError> {
        let products = self.catalog.list_products().await?;

        let mut tx = self.db.begin_transaction().await?;

        let mut created = Vec::new();

        for product in &products {
            if self
                .promotions
                .find_by_product(&mut tx, &product.id)
                .await?
                .is_some()
            {
                debug!(product_id = %product.id, "product already has a promotion");

                continue;
            }

            let Some(terms) = PromotionTerms::example_for(product) else {
                debug!(product_id = %product.id, "product is free, skipping");

                continue;
            };

            created.push(self.promotions.create_promotion(&mut tx, &terms).await?);
        }

        tx.commit().await?;

        Span::current().record("created_count", created.len());

        info!(created_count = created.len(), "created example promotions");

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait PromotionsService: Send + Sync {
    /// Validate and persist a promotion. Each product has at most one.
    async fn create_promotion(
        &self,
        promotion: NewPromotion,
    ) -> Result<Promotion, PromotionsServiceError>;

    /// Find the promotion for `product_id` with the greatest minimum amount
    /// that `amount` reaches, if any.
    async fn find_qualifying_promotion(
        &self,
        product_id: &str,
        amount: &BigInt,
    ) -> Result<Option<Promotion>, PromotionsServiceError>;

    /// All promotions, oldest first.
    async fn list_promotions(&self) -> Result<Vec<Promotion>, PromotionsServiceError>;

    /// Create an example promotion for every catalog product that lacks one.
    async fn create_example_promotions(&self) -> Result<Vec<Promotion>, PromotionsServiceError>;
}
