//! In-memory schedule provider.
//!
//! Serves a fixed leg collection. Used in tests, and for development
//! against sample data without a schedule backend.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::{Leg, Location, TransportFilter};

use super::{ProviderError, ScheduleProvider};

/// Schedule provider over a fixed in-memory leg collection.
#[derive(Debug, Clone, Default)]
pub struct MemoryScheduleProvider {
    legs: Vec<Arc<Leg>>,
}

impl MemoryScheduleProvider {
    /// Create a provider serving the given legs.
    pub fn new(legs: Vec<Leg>) -> Self {
        Self {
            legs: legs.into_iter().map(Arc::new).collect(),
        }
    }

    /// Returns the number of legs held.
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    /// Returns true if the provider holds no legs.
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }
}

impl ScheduleProvider for MemoryScheduleProvider {
    fn legs_for_day(
        &self,
        filter: TransportFilter,
        date: NaiveDate,
    ) -> Result<Vec<Arc<Leg>>, ProviderError> {
        Ok(self
            .legs
            .iter()
            .filter(|leg| leg.departure().date() == date && filter.matches(leg.kind()))
            .cloned()
            .collect())
    }

    fn legs_between(
        &self,
        origin: &Location,
        destination: &Location,
        date: NaiveDate,
    ) -> Result<Vec<Arc<Leg>>, ProviderError> {
        Ok(self
            .legs
            .iter()
            .filter(|leg| {
                leg.departure().date() == date
                    && leg.origin() == origin
                    && leg.destination() == destination
            })
            .cloned()
            .collect())
    }
}
