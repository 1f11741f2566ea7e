//! Transport graph construction.
//!
//! Turns a flat collection of scheduled legs into an adjacency structure
//! for route search. Nodes are locations; each leg contributes one
//! directed edge, so a location pair may carry many parallel edges with
//! different departure times and operators.
//!
//! The graph is rebuilt fresh for every search request — schedules are
//! date-scoped and filtered per request — so there is no update path and
//! no long-lived mutable state.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{Leg, Location};

/// A directed edge: one scheduled leg, weighted by travel time.
#[derive(Debug, Clone)]
pub struct GraphEdge {
    to: Location,
    leg: Arc<Leg>,
    weight: f64,
}

impl GraphEdge {
    /// Returns the edge destination.
    pub fn to(&self) -> &Location {
        &self.to
    }

    /// Returns the scheduled leg this edge represents.
    pub fn leg(&self) -> &Arc<Leg> {
        &self.leg
    }

    /// Returns the construction-time weight: the leg's wall-clock
    /// duration in minutes. The search engine recomputes a
    /// criterion-specific cost without rebuilding the graph.
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// Directed adjacency structure over locations.
#[derive(Debug, Default)]
pub struct TransportGraph {
    adjacency: HashMap<Location, Vec<GraphEdge>>,
    edge_count: usize,
}

impl TransportGraph {
    /// Build a graph from a leg collection.
    ///
    /// Every leg's origin and destination become nodes; an empty input
    /// yields an empty graph, not an error — callers detect it via the
    /// size queries before searching.
    pub fn build(legs: &[Arc<Leg>]) -> Self {
        let mut adjacency: HashMap<Location, Vec<GraphEdge>> = HashMap::new();
        let mut edge_count = 0;

        for leg in legs {
            adjacency.entry(leg.destination().clone()).or_default();
            adjacency
                .entry(leg.origin().clone())
                .or_default()
                .push(GraphEdge {
                    to: leg.destination().clone(),
                    leg: Arc::clone(leg),
                    weight: leg.duration_minutes() as f64,
                });
            edge_count += 1;
        }

        // Neighbor order must not depend on input order or map iteration
        // order: search results are required to be reproducible.
        for edges in adjacency.values_mut() {
            edges.sort_by(|a, b| {
                a.leg
                    .departure()
                    .cmp(&b.leg.departure())
                    .then_with(|| a.leg.id().cmp(b.leg.id()))
            });
        }

        TransportGraph {
            adjacency,
            edge_count,
        }
    }

    /// Returns the outgoing edges from a location, earliest departure
    /// first. Unknown locations have no edges.
    pub fn neighbors(&self, location: &Location) -> &[GraphEdge] {
        self.adjacency
            .get(location)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns true if the location appears in the current leg set.
    pub fn contains_location(&self, location: &Location) -> bool {
        self.adjacency.contains_key(location)
    }

    /// Returns the number of locations.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns true if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}
