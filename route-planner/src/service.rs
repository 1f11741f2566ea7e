//! Route planning orchestration.
//!
//! The single entry point external callers use: fetches candidate
//! schedules, builds the graph, runs the search, ranks and truncates the
//! results, and memoizes them. All collaborators are plain values
//! injected at construction; the cache is the only state shared between
//! concurrent requests.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::cache::{CacheConfig, RouteCache};
use crate::domain::{Itinerary, Location, OptimizationCriterion, TransportFilter};
use crate::graph::TransportGraph;
use crate::planner::{
    PathSearchEngine, SearchConfig, deduplicate, rank_itineraries, remove_dominated,
};
use crate::provider::{ProviderError, ScheduleProvider};

/// Error from route planning.
///
/// Both planning failures are recoverable "no results" conditions for
/// the caller, not process faults.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PlanError {
    /// The provider had no schedules for the requested date and filter.
    #[error("no schedules available from {origin} to {destination} on {date}")]
    NoSchedules {
        origin: Location,
        destination: Location,
        date: NaiveDate,
    },

    /// A graph was built, but no itinerary satisfies the connection
    /// rules (disconnected network, infeasible layovers, or an unknown
    /// endpoint).
    #[error("no connecting route from {origin} to {destination} on {date}")]
    NoRouteFound {
        origin: Location,
        destination: Location,
        date: NaiveDate,
    },

    /// The schedule provider failed.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Route planning service.
///
/// Construct one per process and share it. Searches are independent,
/// CPU-bound computations; the result cache is safe for concurrent use
/// and its entries are immutable once written.
pub struct RouteService<P> {
    provider: P,
    cache: RouteCache,
    config: SearchConfig,
}

impl<P: ScheduleProvider> RouteService<P> {
    /// Create a new service over a schedule provider.
    pub fn new(provider: P, config: SearchConfig, cache_config: &CacheConfig) -> Self {
        Self {
            provider,
            cache: RouteCache::new(cache_config),
            config,
        }
    }

    /// Find up to `max_results` itineraries from `origin` to
    /// `destination` on `date`, ranked best-first under `criterion`.
    ///
    /// Results are memoized per request for the cache TTL; a repeated
    /// request inside that window is served without re-searching.
    ///
    /// # Errors
    ///
    /// - [`PlanError::NoSchedules`] if the provider has no legs for the
    ///   date and filter
    /// - [`PlanError::NoRouteFound`] if the network has no feasible
    ///   connection between the endpoints
    /// - [`PlanError::Provider`] if the provider itself fails
    pub fn find_optimal_routes(
        &self,
        origin: &Location,
        destination: &Location,
        date: NaiveDate,
        criterion: OptimizationCriterion,
        filter: TransportFilter,
        max_results: usize,
    ) -> Result<Vec<Itinerary>, PlanError> {
        let key = RouteCache::key(origin, destination, date, criterion, filter, max_results);

        if let Some(cached) = self.cache.get(&key) {
            debug!(%origin, %destination, %date, "route cache hit");
            return Ok(cached.iter().take(max_results).cloned().collect());
        }

        let legs = self.provider.legs_for_day(filter, date)?;
        if legs.is_empty() {
            return Err(PlanError::NoSchedules {
                origin: origin.clone(),
                destination: destination.clone(),
                date,
            });
        }

        let graph = TransportGraph::build(&legs);
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "transport graph built"
        );

        // Over-fetch so ranking has room to pick the true best:
        // discovery order is cost order under the criterion, not the
        // final ranked order.
        let engine = PathSearchEngine::new(&graph, criterion, &self.config);
        let result = engine.search(origin, destination, max_results.saturating_mul(2));

        if result.itineraries.is_empty() {
            return Err(PlanError::NoRouteFound {
                origin: origin.clone(),
                destination: destination.clone(),
                date,
            });
        }

        let itineraries = deduplicate(result.itineraries);
        let itineraries = remove_dominated(itineraries);
        let mut itineraries = rank_itineraries(itineraries, criterion);
        itineraries.truncate(max_results);

        info!(
            %origin,
            %destination,
            %date,
            found = itineraries.len(),
            states = result.states_explored,
            "route search complete"
        );

        self.cache.insert(key, Arc::new(itineraries.clone()));

        Ok(itineraries)
    }

    /// Direct (single-leg) options from `origin` to `destination`,
    /// earliest departure first. Bypasses the graph and search entirely,
    /// for callers that only want non-connecting options.
    ///
    /// # Errors
    ///
    /// - [`PlanError::NoSchedules`] if no direct leg exists — absence of
    ///   routes is always an explicit failure, never an empty success
    /// - [`PlanError::Provider`] if the provider itself fails
    pub fn find_direct_routes(
        &self,
        origin: &Location,
        destination: &Location,
        date: NaiveDate,
    ) -> Result<Vec<Itinerary>, PlanError> {
        let legs = self.provider.legs_between(origin, destination, date)?;
        if legs.is_empty() {
            return Err(PlanError::NoSchedules {
                origin: origin.clone(),
                destination: destination.clone(),
                date,
            });
        }

        let mut itineraries: Vec<Itinerary> =
            legs.into_iter().map(Itinerary::direct).collect();
        itineraries.sort_by_key(Itinerary::departure_time);

        Ok(itineraries)
    }

    /// The underlying result cache, for statistics and for explicit
    /// invalidation when schedule data changes out from under it.
    pub fn cache(&self) -> &RouteCache {
        &self.cache
    }
}
