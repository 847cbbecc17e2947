use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::dashboard_router;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use taskboard::config::AppConfig;
use taskboard::dashboard::DatasetLoader;
use taskboard::error::AppError;
use taskboard::telemetry;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(data) = args.data.take() {
        config.dashboard.data_file = data;
    }

    telemetry::init(&config.telemetry)?;

    // all-or-nothing: a bad data file means no dashboard at all
    let dataset = Arc::new(DatasetLoader::from_path(&config.dashboard.data_file)?);

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        dataset: Arc::clone(&dataset),
    };

    let app = dashboard_router()
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, records = dataset.len(), "project task dashboard ready");

    axum::serve(listener, app).await?;
    Ok(())
}
