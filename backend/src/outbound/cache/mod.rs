//! In-process route cache adapter.
//!
//! Tracks a revision counter per route that each revalidation bumps. The
//! counter, read through [`InMemoryRouteCache::revision`], is an observable
//! marker for tests and for adapters layered on top; nothing in the request
//! path reads it.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::RoutePath;
use crate::domain::ports::{RouteCache, RouteCacheError};

/// Revision-counter cache shared by every worker.
#[derive(Debug, Default)]
pub struct InMemoryRouteCache {
    revisions: RwLock<HashMap<String, u64>>,
}

impl InMemoryRouteCache {
    /// Create an empty cache; every route starts at revision 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current revision of `path`.
    pub fn revision(&self, path: &RoutePath) -> Result<u64, RouteCacheError> {
        let revisions = self
            .revisions
            .read()
            .map_err(|_| RouteCacheError::backend("route cache lock poisoned"))?;
        Ok(revisions.get(path.as_str()).copied().unwrap_or_default())
    }
}

#[async_trait]
impl RouteCache for InMemoryRouteCache {
    async fn revalidate_path(&self, path: &RoutePath) -> Result<(), RouteCacheError> {
        let mut revisions = self
            .revisions
            .write()
            .map_err(|_| RouteCacheError::backend("route cache lock poisoned"))?;
        let revision = revisions.entry(path.as_str().to_owned()).or_default();
        *revision = revision.wrapping_add(1);
        debug!(path = %path, revision = *revision, "route revalidated");
        Ok(())
    }
}
