//! Service entry-point: loads settings, prepares the store and serves HTTP.

use std::io;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};

use seedling::inbound::http::health::HealthState;
use seedling::outbound::persistence::{DbPool, PoolConfig, apply_migrations};
use seedling::server::{ServerConfig, create_server, drain, shutdown_signal};
use seedling::settings::AppSettings;

#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|err| io::Error::other(format!("failed to load settings: {err}")))?;
    let bind_addr = settings.bind_addr().map_err(io::Error::other)?;
    let list_query = settings.user_list_query().map_err(io::Error::other)?;
    let pool_max_size = settings.pool_max_size().map_err(io::Error::other)?;

    let mut config = ServerConfig::new(bind_addr).with_list_query(list_query);
    if let Some(database_url) = settings.database_url() {
        apply_migrations(database_url)
            .await
            .map_err(io::Error::other)?;
        let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(pool_max_size))
            .await
            .map_err(io::Error::other)?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let handle = server.handle();
    actix_web::rt::spawn(async move {
        match shutdown_signal().await {
            Ok(()) => drain(&health_state, &handle).await,
            Err(err) => error!(error = %err, "failed to listen for shutdown signals"),
        }
    });
    server.await
}
