use crate::cli::ServeArgs;
use crate::infra::{AppState, LogNotificationPublisher};
use crate::routes::with_vent_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use boss_vent::config::{AppConfig, NotificationTransport};
use boss_vent::error::AppError;
use boss_vent::telemetry;
use boss_vent::workflows::vent::VentService;
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

    let publisher = match config.notification.transport {
        NotificationTransport::Log => Arc::new(LogNotificationPublisher),
    };
    let vent_service = Arc::new(VentService::new(
        publisher,
        config.notification.template.clone(),
    ));

    let app = with_vent_routes(vent_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        transport = ?config.notification.transport,
        "boss vent service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
