//! Itinerary type.
//!
//! An `Itinerary` is one complete journey option: an ordered, non-empty
//! sequence of legs where each leg departs from where the previous one
//! arrived, after it arrived. Itineraries are value objects produced by
//! search and never mutated afterwards.

use std::sync::Arc;

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

use super::{DomainError, Leg, Location};

/// A complete journey option from origin to destination.
///
/// # Invariants
///
/// - At least one leg
/// - Consecutive legs connect (destination of one = origin of the next)
/// - Each leg departs strictly after the previous leg arrives
///
/// Layover *bounds* (minimum connection time, maximum layover) are a
/// search policy and enforced by the engine, not here.
#[derive(Debug, Clone, Serialize)]
#[serde(into = "Vec<Leg>")]
pub struct Itinerary {
    legs: Vec<Arc<Leg>>,
}

impl Itinerary {
    /// Construct an itinerary from an ordered leg sequence.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the sequence is empty, consecutive legs do not
    /// meet at the same location, or a leg departs before the previous
    /// leg arrives.
    pub fn new(legs: Vec<Arc<Leg>>) -> Result<Self, DomainError> {
        if legs.is_empty() {
            return Err(DomainError::EmptyItinerary);
        }

        for pair in legs.windows(2) {
            let prev = &pair[0];
            let next = &pair[1];
            if prev.destination() != next.origin() {
                return Err(DomainError::LegsNotConnected(
                    prev.destination().clone(),
                    next.origin().clone(),
                ));
            }
            if next.departure() <= prev.arrival() {
                return Err(DomainError::DepartsBeforeArrival(next.origin().clone()));
            }
        }

        Ok(Itinerary { legs })
    }

    /// Wrap a single leg as a direct itinerary.
    pub fn direct(leg: Arc<Leg>) -> Self {
        Itinerary { legs: vec![leg] }
    }

    /// Returns the legs in travel order.
    pub fn legs(&self) -> &[Arc<Leg>] {
        &self.legs
    }

    /// Returns the number of legs.
    pub fn hop_count(&self) -> usize {
        self.legs.len()
    }

    /// Returns the journey origin.
    pub fn origin(&self) -> &Location {
        self.legs[0].origin()
    }

    /// Returns the journey destination.
    pub fn destination(&self) -> &Location {
        self.legs[self.legs.len() - 1].destination()
    }

    /// Returns the departure instant of the first leg.
    pub fn departure_time(&self) -> NaiveDateTime {
        self.legs[0].departure()
    }

    /// Returns the arrival instant of the last leg.
    pub fn arrival_time(&self) -> NaiveDateTime {
        self.legs[self.legs.len() - 1].arrival()
    }

    /// Returns the sum of the leg fares.
    pub fn total_fare(&self) -> f64 {
        self.legs.iter().map(|leg| leg.fare()).sum()
    }

    /// Returns the end-to-end duration, first departure to last arrival.
    /// Includes layovers.
    pub fn total_duration(&self) -> Duration {
        self.arrival_time().signed_duration_since(self.departure_time())
    }

    /// Returns the layover before each leg after the first.
    pub fn layovers(&self) -> impl Iterator<Item = Duration> + '_ {
        self.legs
            .windows(2)
            .map(|pair| pair[1].departure().signed_duration_since(pair[0].arrival()))
    }
}

impl From<Itinerary> for Vec<Leg> {
    fn from(itinerary: Itinerary) -> Self {
        itinerary.legs.iter().map(|leg| (**leg).clone()).collect()
    }
}
