//! Shared HTTP adapter state.
//!
//! Handlers receive this via `web::Data` and only see domain ports, so tests
//! can swap in doubles without any I/O.

use std::sync::Arc;

use crate::domain::ports::{InvoiceCommand, RouteCache, SignInCommand};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Invoice form actions.
    pub invoices: Arc<dyn InvoiceCommand>,
    /// Credentials sign-in action.
    pub sign_in: Arc<dyn SignInCommand>,
    /// Revalidation target for successful mutations.
    pub route_cache: Arc<dyn RouteCache>,
}

impl HttpState {
    /// Bundle the ports used by the HTTP handlers.
    pub fn new(
        invoices: Arc<dyn InvoiceCommand>,
        sign_in: Arc<dyn SignInCommand>,
        route_cache: Arc<dyn RouteCache>,
    ) -> Self {
        Self {
            invoices,
            sign_in,
            route_cache,
        }
    }
}
