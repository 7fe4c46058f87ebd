//! Server entry point: configuration, logging, and HTTP bootstrap.

mod server;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{APP_NAME, ServerConfig, Settings};
use sports_manager::inbound::http::health::HealthState;
use sports_manager::outbound::persistence::{DbPool, PoolConfig, run_migrations};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = Settings::load().wrap_err("failed to load configuration")?;
    let bind_addr = settings
        .bind_addr
        .parse()
        .wrap_err_with(|| format!("invalid bind address '{}'", settings.bind_addr))?;

    let mut config = ServerConfig::new(bind_addr);
    if let Some(database_url) = &settings.database_url {
        run_migrations(database_url).wrap_err("failed to apply migrations")?;
        let pool_config =
            PoolConfig::new(database_url).with_max_size(settings.max_connections);
        let pool = DbPool::new(pool_config)
            .await
            .wrap_err("failed to build database pool")?;
        config = config.with_db_pool(pool);
    } else {
        warn!("no database URL configured; serving from in-memory repositories");
    }

    let health_state = web::Data::new(HealthState::new());
    info!(app = APP_NAME, %bind_addr, "starting server");
    let server = server::create_server(health_state, config)?;
    server.await.wrap_err("server terminated abnormally")
}
