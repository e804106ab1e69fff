//! Outbound adapters implementing domain ports.
//!
//! - **persistence**: PostgreSQL invoice repository using Diesel.
//! - **cache**: in-process route revision cache.

pub mod cache;
pub mod persistence;
