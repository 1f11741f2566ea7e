//! Best-first route search.
//!
//! Enumerates up to K complete itineraries from origin to destination
//! with a Dijkstra-style K-shortest-paths search: a priority queue of
//! partial routes ordered by accumulated cost, expanded cheapest-first,
//! pruned by connection feasibility, cycle avoidance, a hop ceiling, and
//! an exploration budget.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::sync::Arc;

use tracing::debug;

use crate::domain::{Itinerary, Leg, Location, OptimizationCriterion};
use crate::graph::TransportGraph;

use super::config::SearchConfig;

/// Result of a route search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Found itineraries, in discovery order (cheapest-first under the
    /// search criterion). Criterion ranking happens one layer up.
    pub itineraries: Vec<Itinerary>,

    /// Number of states popped from the frontier.
    pub states_explored: usize,
}

impl SearchResult {
    /// Create an empty result.
    pub fn empty() -> Self {
        Self {
            itineraries: Vec::new(),
            states_explored: 0,
        }
    }
}

/// A partial route on the frontier.
#[derive(Debug, Clone)]
struct SearchState {
    /// Accumulated criterion cost of the legs so far.
    cost: f64,

    /// Current location.
    location: Location,

    /// Legs taken so far.
    legs: Vec<Arc<Leg>>,

    /// Locations already on this path (cycle avoidance).
    visited: HashSet<Location>,

    /// Insertion counter; breaks cost ties deterministically.
    seq: u64,
}

impl PartialEq for SearchState {
    fn eq(&self, other: &Self) -> bool {
        self.cost.total_cmp(&other.cost) == Ordering::Equal && self.seq == other.seq
    }
}

impl Eq for SearchState {}

impl Ord for SearchState {
    // Reversed: BinaryHeap is a max-heap and the search wants the
    // cheapest state first. Equal costs pop in insertion order.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for SearchState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Route search engine over a prepared transport graph.
///
/// Pure: a search reads the graph and mutates nothing shared, so
/// multiple searches may run concurrently on separate graphs.
pub struct PathSearchEngine<'a> {
    graph: &'a TransportGraph,
    criterion: OptimizationCriterion,
    config: &'a SearchConfig,
}

impl<'a> PathSearchEngine<'a> {
    /// Create a new engine for one search request.
    pub fn new(
        graph: &'a TransportGraph,
        criterion: OptimizationCriterion,
        config: &'a SearchConfig,
    ) -> Self {
        Self {
            graph,
            criterion,
            config,
        }
    }

    /// Search for up to `max_results` itineraries from `origin` to
    /// `destination`.
    ///
    /// Returns an empty result (rather than an error) when either
    /// location is absent from the graph; the caller decides how to
    /// report that.
    pub fn search(
        &self,
        origin: &Location,
        destination: &Location,
        max_results: usize,
    ) -> SearchResult {
        if max_results == 0
            || !self.graph.contains_location(origin)
            || !self.graph.contains_location(destination)
        {
            return SearchResult::empty();
        }

        let mut frontier = BinaryHeap::new();
        let mut seq: u64 = 0;

        let mut start_visited = HashSet::new();
        start_visited.insert(origin.clone());
        frontier.push(SearchState {
            cost: 0.0,
            location: origin.clone(),
            legs: Vec::new(),
            visited: start_visited,
            seq,
        });

        let mut itineraries = Vec::new();
        let mut states_explored = 0;

        while itineraries.len() < max_results
            && states_explored < self.config.max_explored_states
        {
            let Some(state) = frontier.pop() else { break };
            states_explored += 1;

            if state.location == *destination && !state.legs.is_empty() {
                if let Ok(itinerary) = Itinerary::new(state.legs.clone()) {
                    itineraries.push(itinerary);
                }
                continue;
            }

            if state.legs.len() >= self.config.max_hops {
                continue;
            }

            for edge in self.graph.neighbors(&state.location) {
                if state.visited.contains(edge.to()) {
                    continue;
                }
                if let Some(prev) = state.legs.last() {
                    if !self.connection_ok(prev, edge.leg()) {
                        continue;
                    }
                }

                seq += 1;
                let mut legs = state.legs.clone();
                legs.push(Arc::clone(edge.leg()));
                let mut visited = state.visited.clone();
                visited.insert(edge.to().clone());

                frontier.push(SearchState {
                    cost: state.cost + self.criterion.edge_cost(edge.leg()),
                    location: edge.to().clone(),
                    legs,
                    visited,
                    seq,
                });
            }
        }

        debug!(
            found = itineraries.len(),
            states_explored, "route search finished"
        );

        SearchResult {
            itineraries,
            states_explored,
        }
    }

    /// A connection is feasible when both legs meet at the same location
    /// and the layover is within the configured bounds.
    fn connection_ok(&self, prev: &Leg, next: &Leg) -> bool {
        if prev.destination() != next.origin() {
            return false;
        }
        let layover = next.departure().signed_duration_since(prev.arrival());
        layover >= self.config.min_connection() && layover <= self.config.max_layover()
    }
}
