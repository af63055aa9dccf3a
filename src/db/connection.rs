//! Database connection management

use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;

use crate::config::DatabaseConfig;

/// Open the PostgreSQL pool
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;

    info!(max_connections = config.max_connections, "Database pool ready");

    Ok(pool)
}

/// Whether the store answers a trivial query
pub async fn ping(pool: &PgPool) -> bool {
    match sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(pool).await {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Database ping failed");
            false
        }
    }
}
