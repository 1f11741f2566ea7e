//! Optimization criteria and transport filters.

use serde::{Deserialize, Serialize};

use super::{Itinerary, Leg, TransportKind};

/// Weighted blend of time and cost.
///
/// Time is taken in hours and cost divided by 100 so the two terms are
/// comparable in magnitude; the scaling is arbitrary but stable.
fn blended(minutes: f64, fare: f64) -> f64 {
    0.6 * (minutes / 60.0) + 0.4 * (fare / 100.0)
}

/// The optimization goal for a route search.
///
/// Selected once per request; drives both the edge cost during search
/// and the final ranking of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimizationCriterion {
    /// Minimize total travel time.
    ShortestTime,
    /// Minimize total fare.
    LowestCost,
    /// Minimize the number of legs.
    FewestHops,
    /// Weighted blend of time and cost.
    Balanced,
}

impl OptimizationCriterion {
    /// Cost contributed by a single leg under this criterion.
    pub fn edge_cost(&self, leg: &Leg) -> f64 {
        match self {
            OptimizationCriterion::ShortestTime => leg.duration_minutes() as f64,
            OptimizationCriterion::LowestCost => leg.fare(),
            OptimizationCriterion::FewestHops => 1.0,
            OptimizationCriterion::Balanced => {
                blended(leg.duration_minutes() as f64, leg.fare())
            }
        }
    }

    /// Ranking score of a complete itinerary under this criterion.
    /// Lower is better.
    pub fn itinerary_score(&self, itinerary: &Itinerary) -> f64 {
        match self {
            OptimizationCriterion::ShortestTime => {
                itinerary.total_duration().num_minutes() as f64
            }
            OptimizationCriterion::LowestCost => itinerary.total_fare(),
            OptimizationCriterion::FewestHops => itinerary.hop_count() as f64,
            OptimizationCriterion::Balanced => blended(
                itinerary.total_duration().num_minutes() as f64,
                itinerary.total_fare(),
            ),
        }
    }

    /// Stable token used in cache keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptimizationCriterion::ShortestTime => "shortest_time",
            OptimizationCriterion::LowestCost => "lowest_cost",
            OptimizationCriterion::FewestHops => "fewest_hops",
            OptimizationCriterion::Balanced => "balanced",
        }
    }
}

/// Which vehicle kinds a search considers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportFilter {
    /// Buses and trains.
    All,
    /// Buses only.
    Bus,
    /// Trains only.
    Train,
}

impl TransportFilter {
    /// Returns true if a leg of the given kind passes this filter.
    pub fn matches(&self, kind: &TransportKind) -> bool {
        match self {
            TransportFilter::All => true,
            TransportFilter::Bus => kind.is_bus(),
            TransportFilter::Train => kind.is_train(),
        }
    }

    /// Stable token used in cache keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportFilter::All => "all",
            TransportFilter::Bus => "bus",
            TransportFilter::Train => "train",
        }
    }
}
