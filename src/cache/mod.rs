//! Cached listing views
//!
//! Listing pages are cheap to re-fetch but the dashboard still tracks which
//! of them a successful write has made stale. A handler invalidates the
//! affected path after the persistence call succeeds and before it
//! redirects, so a client landing on the listing never sees pre-write data.

use dashmap::DashMap;

/// Listing paths the action handlers invalidate.
pub const INVOICES_PATH: &str = "/dashboard/invoices";
pub const CUSTOMERS_PATH: &str = "/dashboard/customers";
pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Per-path staleness tracker, shared across requests.
///
/// Each path carries a version counter; a renderer remembers the version it
/// rendered at and re-fetches when the counter has moved on.
#[derive(Debug, Default)]
pub struct ViewCache {
    versions: DashMap<&'static str, u64>,
}

impl ViewCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the listing at `path` stale.
    pub fn invalidate(&self, path: &'static str) {
        *self.versions.entry(path).or_insert(0) += 1;
        tracing::debug!(path, "view cache invalidated");
    }

    /// Current version of `path`; 0 until the first invalidation.
    pub fn version(&self, path: &str) -> u64 {
        self.versions.get(path).map(|v| *v).unwrap_or(0)
    }

    /// Whether `path` changed since the renderer observed `seen_version`.
    pub fn is_stale(&self, path: &str, seen_version: u64) -> bool {
        self.version(path) > seen_version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_cache_has_version_zero() {
        let cache = ViewCache::new();
        assert_eq!(cache.version(INVOICES_PATH), 0);
        assert!(!cache.is_stale(INVOICES_PATH, 0));
    }

    #[test]
    fn invalidation_bumps_only_the_given_path() {
        let cache = ViewCache::new();
        cache.invalidate(INVOICES_PATH);
        assert!(cache.is_stale(INVOICES_PATH, 0));
        assert!(!cache.is_stale(LOGIN_PATH, 0));
    }

    #[test]
    fn repeated_invalidations_keep_counting() {
        let cache = ViewCache::new();
        cache.invalidate(LOGIN_PATH);
        cache.invalidate(LOGIN_PATH);
        assert_eq!(cache.version(LOGIN_PATH), 2);
        assert!(cache.is_stale(LOGIN_PATH, 1));
    }
}
