//! Schedule provider abstraction.
//!
//! The search core does not own schedule storage. It consumes a provider
//! that returns candidate legs for a date, and stays agnostic about
//! where they come from (database, files, another service).

mod memory;

pub use memory::MemoryScheduleProvider;

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::{Leg, Location, TransportFilter};

/// Error from a schedule provider.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    /// The backing schedule store could not be reached.
    #[error("schedule store unavailable: {0}")]
    Unavailable(String),

    /// The backing store returned data the core could not interpret.
    #[error("malformed schedule data: {0}")]
    Malformed(String),
}

/// Source of scheduled legs.
///
/// `legs_for_day` must return the *whole* day's network for the filter,
/// not just legs touching the requested endpoints — multi-hop search
/// needs legs that neither start at the origin nor end at the
/// destination. No ordering is guaranteed on either method.
pub trait ScheduleProvider {
    /// All legs matching the transport filter on the given date.
    fn legs_for_day(
        &self,
        filter: TransportFilter,
        date: NaiveDate,
    ) -> Result<Vec<Arc<Leg>>, ProviderError>;

    /// Legs running directly from `origin` to `destination` on the date.
    fn legs_between(
        &self,
        origin: &Location,
        destination: &Location,
        date: NaiveDate,
    ) -> Result<Vec<Arc<Leg>>, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ProviderError::Unavailable("connection refused".into());
        assert_eq!(
            err.to_string(),
            "schedule store unavailable: connection refused"
        );

        let err = ProviderError::Malformed("negative capacity".into());
        assert_eq!(err.to_string(), "malformed schedule data: negative capacity");
    }
}
