//! Driven port for marking cached route renderings stale.
use async_trait::async_trait;

use crate::domain::RoutePath;

use super::define_port_error;

define_port_error! {
    /// Errors surfaced by route cache adapters.
    pub enum RouteCacheError {
        /// Cache backend is unavailable.
        Backend { message: String } => "route cache backend failure: {message}",
    }
}

/// Invalidation signal for server-rendered routes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RouteCache: Send + Sync {
    /// Mark the cached data behind `path` as stale so the next read refetches.
    async fn revalidate_path(&self, path: &RoutePath) -> Result<(), RouteCacheError>;
}
