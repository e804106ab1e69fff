//! Builders for the HTTP state ports.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};
use tracing::info;

use backend::domain::ports::{
    FixtureIdentityProvider, FixtureInvoiceRepository, InvoiceCommand, RouteCache, SignInCommand,
};
use backend::domain::{CredentialsSignInService, InvoiceActionsService};
use backend::inbound::http::state::HttpState;
use backend::outbound::cache::InMemoryRouteCache;
use backend::outbound::persistence::DieselInvoiceRepository;

use super::ServerConfig;

/// Invoice actions backed by PostgreSQL when a pool is configured, otherwise
/// by the no-op fixture repository.
fn build_invoice_command(config: &ServerConfig, clock: Arc<dyn Clock>) -> Arc<dyn InvoiceCommand> {
    match &config.db_pool {
        Some(pool) => Arc::new(InvoiceActionsService::new(
            Arc::new(DieselInvoiceRepository::new(pool.clone())),
            clock,
        )),
        None => {
            info!("no database configured; invoice actions use fixtures");
            Arc::new(InvoiceActionsService::new(
                Arc::new(FixtureInvoiceRepository),
                clock,
            ))
        }
    }
}

/// Build the shared HTTP state for every worker.
pub fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let invoices = build_invoice_command(config, clock);
    let sign_in: Arc<dyn SignInCommand> = Arc::new(CredentialsSignInService::new(Arc::new(
        FixtureIdentityProvider,
    )));
    let route_cache: Arc<dyn RouteCache> = Arc::new(InMemoryRouteCache::new());

    web::Data::new(HttpState::new(invoices, sign_in, route_cache))
}
