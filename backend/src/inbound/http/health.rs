//! Readiness and liveness probes.
//!
//! Readiness flips once the listener is bound and reports which invoice
//! store backs the form actions, so a deployment that lost its
//! `DASHBOARD_DATABASE_URL` shows up as `fixtures` rather than silently
//! dropping writes.
use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use serde::Serialize;
use utoipa::ToSchema;

/// Store the invoice actions write through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStore {
    /// PostgreSQL via the connection pool.
    Database,
    /// In-memory fixtures that discard writes.
    Fixtures,
}

/// Readiness probe body.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessReport {
    /// Store behind the invoice actions.
    pub invoice_store: InvoiceStore,
}

/// Probe state shared between the server bootstrap and the handlers.
#[derive(Debug)]
pub struct HealthState {
    listening: AtomicBool,
    invoice_store: InvoiceStore,
}

impl HealthState {
    /// State for a server that has not bound its listener yet.
    pub fn new(invoice_store: InvoiceStore) -> Self {
        Self {
            listening: AtomicBool::new(false),
            invoice_store,
        }
    }

    /// Record that the listener is bound.
    pub fn mark_listening(&self) {
        self.listening.store(true, Ordering::Release);
    }

    /// Whether requests can be served.
    pub fn is_ready(&self) -> bool {
        self.listening.load(Ordering::Acquire)
    }

    /// Store selected at startup.
    pub fn invoice_store(&self) -> InvoiceStore {
        self.invoice_store
    }
}

/// Readiness probe: `200` with the active invoice store once listening,
/// `503` before.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    security([]),
    responses(
        (status = 200, description = "Listening", body = ReadinessReport),
        (status = 503, description = "Listener not bound yet")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    if !state.is_ready() {
        return HttpResponse::ServiceUnavailable()
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .finish();
    }
    HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(ReadinessReport {
            invoice_store: state.invoice_store(),
        })
}

/// Liveness probe: answers `200` whenever a worker can run a handler.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    security([]),
    responses((status = 200, description = "Process is serving requests"))
)]
#[get("/health/live")]
pub async fn live() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish()
}
