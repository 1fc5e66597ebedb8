//! Backend entry-point: loads settings, prepares the database and serves the
//! reference-data API.

mod server;

use std::io;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use events_backend::inbound::http::health::HealthState;
use events_backend::outbound::persistence::{DbPool, run_pending_migrations};
use server::{ServerConfig, ServerSettings, create_server, stop_on_shutdown_signal};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| io::Error::other(format!("failed to load settings: {e}")))?;

    let mut config = ServerConfig::new(settings.bind_addr());
    match settings.pool_config() {
        Some(pool_config) => {
            info!(database = %pool_config.redacted_url(), "preparing database");
            let applied = run_pending_migrations(pool_config.database_url())
                .await
                .map_err(io::Error::other)?;
            info!(applied, "database schema up to date");
            let pool = DbPool::new(pool_config).await.map_err(io::Error::other)?;
            config = config.with_db_pool(pool);
        }
        None => warn!("EVENTS_DATABASE_URL not set; serving empty fixture data"),
    }

    let health_state = web::Data::new(HealthState::new());
    info!(bind_addr = %config.bind_addr(), "starting server");
    let server = create_server(health_state.clone(), config)?;
    actix_web::rt::spawn(stop_on_shutdown_signal(health_state, server.handle()));
    server.await
}
