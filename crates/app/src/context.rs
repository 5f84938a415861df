//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        baskets::{BasketsService, PgBasketsService},
        catalog::{CatalogConfig, CatalogError, HttpProductCatalog, ProductCatalog},
        promotions::{PgPromotionsService, PromotionsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrations(#[source] MigrateError),

    #[error("failed to configure product catalog client")]
    Catalog(#[source] CatalogError),
}

#[derive(Clone)]
pub struct AppContext {
    pub baskets: Arc<dyn BasketsService>,
    pub promotions: Arc<dyn PromotionsService>,
    pub catalog: Arc<dyn ProductCatalog>,
}

impl AppContext {
    /// Connect to the database, bring its schema up to date and wire the
    /// services to the product catalog.
    ///
    /// # Errors
    ///
    /// Returns an error when the database is unreachable, a migration fails or
    /// the catalog configuration is invalid.
    pub async fn connect(database_url: &str, catalog: CatalogConfig) -> Result<Self, AppInitError> {
        let catalog: Arc<dyn ProductCatalog> =
            Arc::new(HttpProductCatalog::new(catalog).map_err(AppInitError::Catalog)?);

        let pool = database::connect(database_url)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrations)?;

        let db = Db::new(pool);

        Ok(Self {
            baskets: Arc::new(PgBasketsService::new(db.clone(), Arc::clone(&catalog))),
            promotions: Arc::new(PgPromotionsService::new(db, Arc::clone(&catalog))),
            catalog,
        })
    }
}
