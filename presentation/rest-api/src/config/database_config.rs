use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool};
use sqlx::PgPool;
use std::env;

use super::ConfigError;

/// Initialize database connection pool from environment variables
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
///
/// # Errors
/// Returns error if DATABASE_URL is not set, a value is malformed or connection fails
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url =
        env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVariable("DATABASE_URL"))?;

    let mut config = DatabaseConfig::new(db_url);
    if let Ok(value) = env::var("DATABASE_MAX_CONNECTIONS") {
        let max_connections = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
            name: "DATABASE_MAX_CONNECTIONS",
            value,
        })?;
        config = config.with_max_connections(max_connections);
    }

    let pool = create_postgres_pool(&config)
        .await
        .context("could not open the database pool")?;
    tracing::info!(
        max_connections = config.max_connections,
        "Database pool ready"
    );
    Ok(pool)
}
