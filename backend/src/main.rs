//! Loan application service entry-point: loads settings, prepares the store,
//! and serves the REST API.

mod server;

use actix_web::web;
use color_eyre::eyre::{WrapErr, eyre};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use loanapp::inbound::http::health::HealthState;
use loanapp::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use loanapp::settings::ServerSettings;
use ortho_config::OrthoConfig;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|err| eyre!("failed to load configuration: {err}"))?;
    let bind_addr = settings.bind_addr().wrap_err("resolve bind address")?;

    let mut config = ServerConfig::new(bind_addr);
    match settings.database_url() {
        Some(database_url) => {
            run_pending_migrations(database_url)
                .await
                .wrap_err("apply database migrations")?;
            let pool_config =
                PoolConfig::new(database_url).with_max_size(settings.pool_max_size());
            let pool = DbPool::new(pool_config)
                .await
                .wrap_err("build database pool")?;
            config = config.with_db_pool(pool);
        }
        None => warn!("LOANAPP_DATABASE_URL is not set; records will not survive a restart"),
    }

    info!(bind_addr = %config.bind_addr(), "starting loan application server");
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config).wrap_err("start HTTP server")?;
    server.await.wrap_err("HTTP server failed")?;
    Ok(())
}
