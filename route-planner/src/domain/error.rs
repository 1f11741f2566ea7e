//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They
//! are distinct from provider/planning errors.

use super::Location;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// Invalid leg construction (e.g., arrival before departure)
    #[error("invalid leg: {0}")]
    InvalidLeg(&'static str),

    /// Itinerary has no legs
    #[error("itinerary must contain at least one leg")]
    EmptyItinerary,

    /// Consecutive legs do not meet at the same location
    #[error("legs do not connect: arrival at {0}, next departure from {1}")]
    LegsNotConnected(Location, Location),

    /// A leg departs before the previous leg has arrived
    #[error("leg departing {0} leaves before the previous leg arrives")]
    DepartsBeforeArrival(Location),
}
