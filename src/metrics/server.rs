use actix_web::{web, App, HttpResponse, HttpServer};
use std::sync::Arc;

use super::Metrics;
use crate::config::MetricsConfig;

const SERVICE_NAME: &str = "customer-service";

/// Run the scrape listener for `metrics` on its own host and port
pub async fn start_metrics_server(config: &MetricsConfig, metrics: Arc<Metrics>) -> std::io::Result<()> {
    tracing::info!("📊 Starting metrics server on http://{}:{}/metrics", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::from(metrics.clone()))
            .configure(configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

/// `/metrics` and `/health`; expects `web::Data<Metrics>` in app data
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/metrics", web::get().to(scrape))
        .route("/health", web::get().to(health));
}

async fn scrape(metrics: web::Data<Metrics>) -> HttpResponse {
    match metrics.encode_text() {
        Ok(body) => HttpResponse::Ok()
            .content_type(prometheus::TEXT_FORMAT)
            .body(body),
        Err(e) => {
            tracing::error!(error = %e, "Failed to encode metrics");
            HttpResponse::InternalServerError().finish()
        }
    }
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
