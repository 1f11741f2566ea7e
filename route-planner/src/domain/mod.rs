//! Domain types for the journey planner.
//!
//! This module contains the core domain model types that represent
//! validated schedule data. All types enforce their invariants at
//! construction time, so code that receives these types can trust
//! their validity.

mod criterion;
mod error;
mod itinerary;
mod leg;
mod location;

pub use criterion::{OptimizationCriterion, TransportFilter};
pub use error::DomainError;
pub use itinerary::Itinerary;
pub use leg::{Leg, TransportKind};
pub use location::{InvalidLocation, Location};
