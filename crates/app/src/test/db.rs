//! Throwaway PostgreSQL databases for storage-backed tests.
//!
//! One container is started per test binary. Every [`TestDb`] gets its own
//! freshly migrated database inside it, dropped again in the background once
//! the handle goes away.

use std::time::{SystemTime, UNIX_EPOCH};

use once_cell::sync::Lazy;
use sqlx::{Connection, PgConnection, PgPool, query};
use testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres as PostgresImage;
use tokio::sync::{OnceCell, mpsc};

const USER: &str = "checkout_test";
const PASSWORD: &str = "checkout_test_password";
const IMAGE_TAG: &str = "17-alpine";
const MAX_NAME_LEN: usize = 63;

static CONTAINER: Lazy<OnceCell<ContainerAsync<PostgresImage>>> = Lazy::new(OnceCell::new);

static DROP_QUEUE: Lazy<OnceCell<mpsc::UnboundedSender<String>>> = Lazy::new(OnceCell::new);

/// Database names are interpolated into DDL, so only plain identifiers pass.
fn check_database_name(name: &str) -> Result<(), String> {
    if name.is_empty() || name.len() > MAX_NAME_LEN {
        return Err(format!("database name must be 1-{MAX_NAME_LEN} characters"));
    }

    if !name.starts_with(|c: char| c.is_ascii_lowercase() || c == '_') {
        return Err("database name must start with a lowercase letter or underscore".into());
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    {
        return Err("database name may only contain a-z, 0-9 and underscores".into());
    }

    Ok(())
}

async fn start_container() -> ContainerAsync<PostgresImage> {
    PostgresImage::default()
        .with_user(USER)
        .with_password(PASSWORD)
        .with_db_name("checkout_test")
        .with_tag(IMAGE_TAG)
        .start()
        .await
        .expect("failed to start postgres container")
}

async fn server_url(database: &str) -> String {
    let container = CONTAINER.get_or_init(start_container).await;

    let port = container
        .get_host_port_ipv4(5432)
        .await
        .expect("failed to resolve postgres port");

    let host = std::env::var("TESTCONTAINERS_HOST_OVERRIDE").unwrap_or_else(|_| "localhost".into());

    format!("postgresql://{USER}:{PASSWORD}@{host}:{port}/{database}")
}

async fn start_drop_queue() -> mpsc::UnboundedSender<String> {
    let (sender, mut receiver) = mpsc::unbounded_channel::<String>();

    tokio::spawn(async move {
        while let Some(name) = receiver.recv().await {
            if let Err(error) = drop_database(&name).await {
                eprintln!("failed to drop test database {name}: {error}");
            }
        }
    });

    sender
}

async fn drop_database(name: &str) -> Result<(), sqlx::Error> {
    if check_database_name(name).is_err() {
        return Ok(());
    }

    let mut conn = PgConnection::connect(&server_url("postgres").await).await?;

    query(&format!("DROP DATABASE IF EXISTS \"{name}\" WITH (FORCE)"))
        .execute(&mut conn)
        .await?;

    conn.close().await
}

/// An isolated, migrated database. Dropped in the background on `Drop`.
#[derive(Debug, Clone)]
pub struct TestDb {
    pub pool: PgPool,
    pub name: String,
}

impl TestDb {
    pub async fn new() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock before unix epoch")
            .as_nanos();

        let name = format!("checkout_{nanos}_{}", std::process::id());

        Self::with_name(&name).await
    }

    pub async fn with_name(name: &str) -> Self {
        DROP_QUEUE.get_or_init(start_drop_queue).await;

        check_database_name(name).expect("invalid test database name");

        let mut conn = PgConnection::connect(&server_url("postgres").await)
            .await
            .expect("failed to connect to postgres");

        query(&format!("CREATE DATABASE \"{name}\""))
            .execute(&mut conn)
            .await
            .expect("failed to create test database");

        conn.close().await.expect("failed to close connection");

        let pool = PgPool::connect(&server_url(name).await)
            .await
            .expect("failed to connect to test database");

        crate::database::migrate(&pool)
            .await
            .expect("failed to migrate test database");

        Self {
            pool,
            name: name.to_string(),
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        if let Some(sender) = DROP_QUEUE.get() {
            let _ = sender.send(self.name.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_generated_names() {
        assert!(check_database_name("checkout_1760000000_42").is_ok());
        assert!(check_database_name("_scratch").is_ok());
    }

    #[test]
    fn rejects_names_that_need_quoting() {
        for name in ["", "1db", "Upper", "has-dash", "semi;colon", "quote\"d"] {
            assert!(check_database_name(name).is_err(), "{name:?} should be rejected");
        }

        assert!(check_database_name(&"a".repeat(64)).is_err(), "too long");
    }

    #[tokio::test]
    async fn migrated_database_has_schema() {
        let db = TestDb::new().await;

        let tables: i64 = sqlx::query_scalar(
            "SELECT count(*) FROM information_schema.tables \
             WHERE table_name IN ('baskets', 'basket_items', 'promotions')",
        )
        .fetch_one(db.pool())
        .await
        .expect("failed to query schema");

        assert_eq!(tables, 3);
    }
}
