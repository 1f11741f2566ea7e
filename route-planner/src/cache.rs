//! Caching layer for ranked route results.
//!
//! Ranked itinerary lists are memoized by the full request key. Entries
//! are immutable once written, so concurrent readers share them through
//! an `Arc`. Moka provides TTL expiry and a size bound, and prefix
//! invalidation lets schedule-management code drop every route result
//! for a date when the underlying schedules change; the search core
//! itself never invalidates.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use moka::sync::Cache as MokaCache;

use crate::domain::{Itinerary, Location, OptimizationCriterion, TransportFilter};

/// Cached value: a ranked, truncated itinerary list.
pub type CachedRoutes = Arc<Vec<Itinerary>>;

/// Configuration for the route cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60 * 60),
            max_capacity: 1_000,
        }
    }
}

/// Cache for ranked route search results.
pub struct RouteCache {
    routes: MokaCache<String, CachedRoutes>,
}

impl RouteCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .support_invalidation_closures()
            .build();

        Self { routes }
    }

    /// Build the cache key for a route request.
    ///
    /// Every request input participates, so distinct requests never
    /// collide. The date leads the variable part: schedule changes for
    /// one date can then be dropped with a single prefix invalidation.
    pub fn key(
        origin: &Location,
        destination: &Location,
        date: NaiveDate,
        criterion: OptimizationCriterion,
        filter: TransportFilter,
        max_results: usize,
    ) -> String {
        format!(
            "routes:{date}:{}:{}:{origin}:{destination}:{max_results}",
            filter.as_str(),
            criterion.as_str(),
        )
    }

    /// Get a cached entry, if present and unexpired.
    pub fn get(&self, key: &str) -> Option<CachedRoutes> {
        self.routes.get(key)
    }

    /// Insert a ranked result list.
    pub fn insert(&self, key: String, routes: CachedRoutes) {
        self.routes.insert(key, routes);
    }

    /// Drop every entry whose key starts with `prefix`.
    pub fn invalidate_prefix(&self, prefix: &str) {
        let prefix = prefix.to_string();
        // Cannot fail: invalidation closures are enabled at construction.
        let _ = self
            .routes
            .invalidate_entries_if(move |key, _| key.starts_with(&prefix));
    }

    /// Drop all entries.
    pub fn invalidate_all(&self) {
        self.routes.invalidate_all();
    }

    /// Number of live entries (approximate; moka maintains counts
    /// asynchronously).
    pub fn entry_count(&self) -> u64 {
        self.routes.entry_count()
    }
}
