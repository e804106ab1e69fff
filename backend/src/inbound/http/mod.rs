//! HTTP inbound adapter exposing the form-action endpoints.

pub mod auth;
pub mod error;
pub mod health;
pub mod invoices;
pub mod navigation;
pub mod schemas;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;
