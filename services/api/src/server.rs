use crate::cli::ServeArgs;
use crate::infra::{load_catalog, AppState};
use crate::routes::with_recommendation_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use card_advisor::config::AppConfig;
use card_advisor::error::AppError;
use card_advisor::recommendations::{RankingService, ValuationConfig};
use card_advisor::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    // The catalog is validated here, before the listener binds, so a bad file never serves.
    let catalog = load_catalog(config.catalog.path.as_deref())?;
    let ranking_service = Arc::new(RankingService::new(
        Arc::new(catalog),
        ValuationConfig::default(),
    ));

    let app = with_recommendation_routes(ranking_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "card advisor ready");

    axum::serve(listener, app).await?;
    Ok(())
}
