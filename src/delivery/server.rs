use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::{from_fn, Next};
use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use std::time::Instant;

use super::controller::CustomerController;
use crate::config::ServerConfig;
use crate::metrics::Metrics;
use crate::usecase::CustomerUseCase;

/// Label for requests that matched no route
pub const UNMATCHED_PATH: &str = "unmatched";

/// Start the customer API server
///
/// Builds one `App` per worker, hands it to the controller to register its
/// routes, and records every response in `metrics`.
pub async fn start_api_server(
    config: &ServerConfig,
    use_case: Arc<dyn CustomerUseCase>,
    metrics: Arc<Metrics>,
) -> std::io::Result<()> {
    tracing::info!("🚀 Starting customer API on http://{}:{}/customer", config.host, config.port);

    HttpServer::new(move || {
        let use_case = use_case.clone();

        App::new()
            .app_data(web::Data::from(metrics.clone()))
            .wrap(from_fn(record_metrics))
            .configure(move |cfg| CustomerController::new(use_case).configure(cfg))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

/// Count and time every response against the route pattern it matched.
///
/// Needs `web::Data<Metrics>` in app data; without it requests pass through
/// unrecorded.
pub async fn record_metrics(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, actix_web::Error> {
    let Some(metrics) = req.app_data::<web::Data<Metrics>>().cloned() else {
        return next.call(req).await;
    };

    let method = req.method().to_string();
    let path = req
        .match_pattern()
        .unwrap_or_else(|| UNMATCHED_PATH.to_string());
    let started = Instant::now();

    let res = next.call(req).await?;
    metrics.record_request(
        &method,
        &path,
        res.status().as_u16(),
        started.elapsed().as_secs_f64(),
    );
    Ok(res)
}
