use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use mortgage_intake::applications::MortgageApplicationService;
use mortgage_intake::config::AppConfig;
use mortgage_intake::error::AppError;
use mortgage_intake::telemetry;
use tracing::info;

use crate::cli::ServeArgs;
use crate::infra::{evaluation_config, AppState, InMemoryApplicationRepository};
use crate::routes::with_application_routes;

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

    let repository = Arc::new(InMemoryApplicationRepository::default());
    let service = Arc::new(MortgageApplicationService::new(
        repository,
        evaluation_config(&config.requirements),
    ));

    let app = with_application_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "mortgage intake service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
