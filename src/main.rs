use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use customer_service::config::AppConfig;
use customer_service::delivery::start_api_server;
use customer_service::metrics::{self, Metrics};
use customer_service::repository::{CustomerDbRepository, CustomerRepository};
use customer_service::usecase::{CustomerUseCase, CustomerUseCaseImpl};
use customer_service::db;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;

    // Structured logging; RUST_LOG overrides the configured filter
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log.filter)),
        )
        .init();

    tracing::info!("🚀 Starting customer service");

    // === 1. Database pool and schema ===
    let pool = db::connect(&config.database).await?;
    db::ensure_schema(&pool).await?;

    // === 2. Wire the layers bottom-up ===
    let repository: Arc<dyn CustomerRepository> = Arc::new(CustomerDbRepository::new(pool));
    let use_case: Arc<dyn CustomerUseCase> = Arc::new(CustomerUseCaseImpl::new(repository));

    // === 3. Metrics ===
    let metrics = Arc::new(Metrics::new()?);

    // === 4. Serve ===
    let api = start_api_server(&config.server, use_case, metrics.clone());

    if config.metrics.enabled {
        tokio::try_join!(api, metrics::start_metrics_server(&config.metrics, metrics))?;
    } else {
        api.await?;
    }

    tracing::info!("👋 Customer service stopped");
    Ok(())
}
