//! Server construction and middleware wiring.

mod config;
mod settings;
mod state_builders;

pub use config::ServerConfig;
pub use settings::ServerSettings;

use std::time::Duration;

use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use state_builders::build_http_state;
use tracing::{error, info};

use events_backend::Trace;
#[cfg(debug_assertions)]
use events_backend::doc::ApiDoc;
use events_backend::inbound::http;
use events_backend::inbound::http::health::HealthState;
use events_backend::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(http::configure);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// Marks `health_state` ready once the listener is bound. The returned
/// [`Server`] must be awaited to drive the listener. Actix's own signal
/// handling is disabled; pair the server with [`stop_on_shutdown_signal`].
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = build_http_state(config.db_pool.as_ref());
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(config.bind_addr())?
    .disable_signals()
    .run();

    health_state.mark_ready();
    Ok(server)
}

/// Time the listener keeps serving after probes start failing.
pub const DRAIN_GRACE: Duration = Duration::from_secs(5);

/// Fail the health probes, keep serving for `grace`, then stop gracefully.
pub async fn drain_and_stop(
    health_state: web::Data<HealthState>,
    handle: ServerHandle,
    grace: Duration,
) {
    health_state.mark_unhealthy();
    info!(grace_ms = grace.as_millis(), "draining before shutdown");
    actix_web::rt::time::sleep(grace).await;
    handle.stop(true).await;
}

/// Wait for SIGINT or SIGTERM, then drain and stop the server.
pub async fn stop_on_shutdown_signal(health_state: web::Data<HealthState>, handle: ServerHandle) {
    if let Err(e) = shutdown_signal().await {
        error!(error = %e, "cannot listen for shutdown signals");
        return;
    }
    drain_and_stop(health_state, handle, DRAIN_GRACE).await;
}

#[cfg(unix)]
async fn shutdown_signal() -> std::io::Result<()> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut terminate = signal(SignalKind::terminate())?;
    tokio::select! {
        result = tokio::signal::ctrl_c() => result,
        _ = terminate.recv() => Ok(()),
    }
}

#[cfg(not(unix))]
async fn shutdown_signal() -> std::io::Result<()> {
    tokio::signal::ctrl_c().await
}
