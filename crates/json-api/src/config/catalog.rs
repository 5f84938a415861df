//! Product Catalog Config

use std::time::Duration;

use checkout_app::domain::catalog::CatalogConfig;
use clap::Args;

/// Product catalog API settings.
#[derive(Debug, Args)]
pub struct CatalogSettings {
    /// Product catalog base URL
    #[arg(long, env = "CATALOG_URL")]
    pub catalog_url: String,

    /// Product catalog request timeout in milliseconds
    #[arg(long, env = "CATALOG_TIMEOUT_MS", default_value_t = 5_000_u64)]
    pub catalog_timeout_ms: u64,
}

impl CatalogSettings {
    #[must_use]
    pub fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig {
            base_url: self.catalog_url.clone(),
            timeout: Duration::from_millis(self.catalog_timeout_ms),
        }
    }
}
