use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;

use crate::config::DatabaseConfig;

// ============================================================================
// Database Bootstrap
// ============================================================================
//
// Builds the shared connection pool and makes sure the `customer` table
// exists. The same `AnyPool` type is used against Postgres in deployment and
// against SQLite locally and in tests.
//
// ============================================================================

pub const CUSTOMER_SCHEMA: &str = "CREATE TABLE IF NOT EXISTS customer (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    address TEXT NOT NULL
)";

/// Connect to the configured database
pub async fn connect(config: &DatabaseConfig) -> Result<AnyPool, sqlx::Error> {
    sqlx::any::install_default_drivers();

    let options = if config.is_in_memory() {
        // Every new connection would open a fresh, empty database.
        AnyPoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        AnyPoolOptions::new().max_connections(config.max_connections)
    };

    let pool = options.connect(&config.url).await?;

    tracing::info!(
        url = %redact_url(&config.url),
        in_memory = config.is_in_memory(),
        "Connected to database"
    );

    Ok(pool)
}

/// Create the `customer` table if it is missing
pub async fn ensure_schema(pool: &AnyPool) -> Result<(), sqlx::Error> {
    sqlx::query(CUSTOMER_SCHEMA).execute(pool).await?;
    tracing::debug!("customer table ready");
    Ok(())
}

/// Strip the password from a connection URL before it is logged
fn redact_url(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };

    match rest.split_once('@') {
        Some((credentials, host)) => match credentials.split_once(':') {
            Some((user, _password)) => format!("{scheme}://{user}:***@{host}"),
            None => url.to_string(),
        },
        None => url.to_string(),
    }
}
