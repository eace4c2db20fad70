use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Match listings run one archetype lookup per candidate on top of the
/// scorer query, so the pool gets more headroom than a plain CRUD service.
const MAX_CONNECTIONS: u32 = 16;
const ACQUIRE_TIMEOUT_SECS: u64 = 5;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(std::time::Duration::from_secs(ACQUIRE_TIMEOUT_SECS))
        .connect(database_url)
        .await?;

    info!("PostgreSQL pool established (max {MAX_CONNECTIONS} connections)");
    Ok(pool)
}
