use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemorySessionRepository};
use crate::routes::with_underwriting_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;
use underwriting::config::AppConfig;
use underwriting::error::AppError;
use underwriting::telemetry;
use underwriting::workflows::underwriting::UnderwritingService;

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

    let repository = Arc::new(InMemorySessionRepository::default());
    let underwriting_service = Arc::new(UnderwritingService::new(
        repository,
        config.underwriting.clone(),
    ));

    let app = with_underwriting_routes(underwriting_service)
        .layer(Extension(app_state))
        .layer(Extension(config.underwriting.clone()))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        bank_rate = config.underwriting.bank_rate,
        "underwriting assistant ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
