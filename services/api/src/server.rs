use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::api_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;
use workforce_intel::config::AppConfig;
use workforce_intel::error::AppError;
use workforce_intel::{telemetry, SnapshotStore};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(dir) = args.data_dir.take() {
        config.data.dir = dir;
    }

    telemetry::init(&config.telemetry)?;

    let store = Arc::new(SnapshotStore::open(&config.data.dir)?);

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        store,
        data_dir: config.data.dir.clone(),
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = api_routes()
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        data_dir = %config.data.dir.display(),
        "workforce intelligence service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
