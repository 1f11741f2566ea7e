//! Search configuration for the route planner.

use chrono::Duration;

/// Configuration parameters for route search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Minimum time required for a connection (minutes).
    /// Connections tighter than this are rejected.
    pub min_connection_mins: i64,

    /// Maximum layover allowed at a connection (minutes).
    /// Waits longer than this are rejected.
    pub max_layover_mins: i64,

    /// Maximum number of legs in one itinerary.
    pub max_hops: usize,

    /// Upper bound on states popped from the frontier per search.
    /// Bounds worst-case search time on dense graphs.
    pub max_explored_states: usize,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        min_connection_mins: i64,
        max_layover_mins: i64,
        max_hops: usize,
        max_explored_states: usize,
    ) -> Self {
        Self {
            min_connection_mins,
            max_layover_mins,
            max_hops,
            max_explored_states,
        }
    }

    /// Returns the minimum connection time as a Duration.
    pub fn min_connection(&self) -> Duration {
        Duration::minutes(self.min_connection_mins)
    }

    /// Returns the maximum layover as a Duration.
    pub fn max_layover(&self) -> Duration {
        Duration::minutes(self.max_layover_mins)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_connection_mins: 30,
            max_layover_mins: 12 * 60,
            max_hops: 5,
            max_explored_states: 10_000,
        }
    }
}
