//! Catalog client.

use std::time::Duration;

use async_trait::async_trait;
use mockall::automock;
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, warn};

use crate::domain::catalog::{errors::CatalogError, models::Product};

/// Configuration for reaching the product catalog API.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Catalog base address, e.g. `"http://localhost:8081"`.
    pub base_url: String,

    /// Per-request timeout.
    pub timeout: Duration,
}

/// HTTP client for the product catalog API.
#[derive(Debug, Clone)]
pub struct HttpProductCatalog {
    base_url: Url,
    http: Client,
}

impl HttpProductCatalog {
    /// Create a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the base URL is invalid or the HTTP client cannot
    /// be built.
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|error| CatalogError::Unavailable(Box::new(error)))?;

        if base_url.cannot_be_a_base() {
            return Err(CatalogError::Unavailable(
                format!("catalog url {base_url} cannot be used as a base").into(),
            ));
        }

        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { base_url, http })
    }

    fn products_url(&self, product_id: Option<&str>) -> Result<Url, CatalogError> {
        let mut url = self.base_url.clone();

        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                CatalogError::Unavailable("catalog url cannot be used as a base".into())
            })?;

            segments.pop_if_empty().push("products");

            if let Some(product_id) = product_id {
                segments.push(product_id);
            }
        }

        Ok(url)
    }
}

#[async_trait]
impl ProductCatalog for HttpProductCatalog {
    #[tracing::instrument(name = "catalog.client.get_product", skip(self), err)]
    async fn get_product(&self, product_id: &str) -> Result<Product, CatalogError> {
        let url = self.products_url(Some(product_id))?;

        let response = self.http.get(url).send().await?;

        check_status(response.status())?;

        let product: Product = response.json().await?;

        debug!(product_id = %product.id, price = %product.price, "resolved product");

        Ok(product)
    }

    #[tracing::instrument(name = "catalog.client.list_products", skip(self), err)]
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        let url = self.products_url(None)?;

        let response = self.http.get(url).send().await?;

        check_status(response.status())?;

        Ok(response.json().await?)
    }
}

/// Classify a catalog response status: 404 means the product does not exist,
/// anything else unsuccessful means the catalog cannot be relied upon.
fn check_status(status: StatusCode) -> Result<(), CatalogError> {
    if status.is_success() {
        return Ok(());
    }

    if status == StatusCode::NOT_FOUND {
        return Err(CatalogError::NotFound);
    }

    warn!(status = status.as_u16(), "unexpected catalog response");

    Err(CatalogError::Unavailable(
        format!("catalog responded with status {status}").into(),
    ))
}

#[automock]
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Resolve a single product by its identifier.
    async fn get_product(&self, product_id: &str) -> Result<Product, CatalogError>;

    /// List every product known to the catalog.
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError>;
}
