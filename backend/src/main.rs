//! Backend entry-point: loads configuration, wires the invoice actions and
//! serves them over HTTP.

mod server;

use std::io;

use actix_web::web;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::config::DashboardSettings;
use backend::inbound::http::health::{HealthState, InvoiceStore};
use backend::inbound::http::session_config::{BuildMode, session_settings_from_env};
use backend::outbound::persistence::{DbPool, PoolConfig};
use server::{ServerConfig, create_server};

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

    let settings = DashboardSettings::load_from_iter(std::env::args_os())
        .map_err(|e| io::Error::other(format!("failed to load configuration: {e}")))?;
    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .map_err(io::Error::other)?;

    let mut config = ServerConfig::new(session, settings.bind_addr());
    if let Some(url) = settings.database_url() {
        let pool_config = PoolConfig::new(url).with_max_size(settings.db_max_connections());
        let pool = DbPool::new(pool_config)
            .await
            .map_err(io::Error::other)?;
        config = config.with_db_pool(pool);
    }

    let store = if config.db_pool.is_some() {
        InvoiceStore::Database
    } else {
        InvoiceStore::Fixtures
    };
    info!(addr = %settings.bind_addr(), ?store, "starting dashboard server");
    let health_state = web::Data::new(HealthState::new(store));
    create_server(health_state, config)?.await
}
