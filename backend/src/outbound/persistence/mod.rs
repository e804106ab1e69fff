//! PostgreSQL persistence adapters using Diesel with `diesel-async` and `bb8`.
//!
//! Row models and table definitions are internal; only the repository and the
//! pool are exported.
//!
//! # Example
//!
//! ```ignore
//! use backend::outbound::persistence::{DbPool, DieselInvoiceRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/dashboard")).await?;
//! let repo = DieselInvoiceRepository::new(pool);
//! ```

mod diesel_error_mapping;
mod diesel_invoice_repository;
mod models;
mod pool;
mod schema;

pub use diesel_invoice_repository::DieselInvoiceRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
