use std::time::Duration;

use checkout_app::{context::AppContext, domain::catalog::CatalogConfig};
use clap::{Args, Parser, Subcommand};

mod basket;
mod promotion;

#[derive(Debug, Parser)]
#[command(name = "checkout-app", about = "Checkout administration CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Promotion(promotion::PromotionCommand),
    Basket(basket::BasketCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Promotion(command) => promotion::run(command).await,
            Commands::Basket(command) => basket::run(command).await,
        }
    }
}

/// Where the database and the product catalog live.
#[derive(Debug, Args)]
pub(crate) struct ConnectionArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Product catalog base URL
    #[arg(long, env = "CATALOG_URL")]
    catalog_url: String,

    /// Product catalog request timeout in milliseconds
    #[arg(long, env = "CATALOG_TIMEOUT_MS", default_value_t = 5000)]
    catalog_timeout_ms: u64,
}

impl ConnectionArgs {
    pub(crate) async fn context(&self) -> Result<AppContext, String> {
        AppContext::connect(
            &self.database_url,
            CatalogConfig {
                base_url: self.catalog_url.clone(),
                timeout: Duration::from_millis(self.catalog_timeout_ms),
            },
        )
        .await
        .map_err(|error| format!("failed to initialize: {error}"))
    }
}
