//! Scheduled leg type.
//!
//! A `Leg` is one scheduled departure of a single vehicle run. Legs are
//! created by the schedule provider and only read by the search core,
//! which shares them as `Arc<Leg>` for cheap cloning during search.

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

use super::{DomainError, Location};

/// The vehicle kind operating a leg, with kind-specific details.
///
/// Bus and train runs carry different operator metadata; a sum type
/// keeps a single `Leg` shape while preserving what each kind knows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TransportKind {
    /// A scheduled bus run.
    Bus {
        /// Operating company, if known.
        company: Option<String>,
        /// Coach type (e.g. "AC", "Non-AC"), if known.
        coach_type: Option<String>,
    },
    /// A scheduled train run.
    Train {
        /// Named train (e.g. "Suborno Express"), if known.
        train_name: Option<String>,
        /// Seating class (e.g. "Shovan", "Snigdha"), if known.
        class: Option<String>,
    },
}

impl TransportKind {
    /// A bus run with no operator details.
    pub fn bus() -> Self {
        TransportKind::Bus {
            company: None,
            coach_type: None,
        }
    }

    /// A train run with no operator details.
    pub fn train() -> Self {
        TransportKind::Train {
            train_name: None,
            class: None,
        }
    }

    /// Returns true for bus runs.
    pub fn is_bus(&self) -> bool {
        matches!(self, TransportKind::Bus { .. })
    }

    /// Returns true for train runs.
    pub fn is_train(&self) -> bool {
        matches!(self, TransportKind::Train { .. })
    }
}

/// One scheduled departure/arrival pair for a single vehicle run.
///
/// # Invariants
///
/// - Arrival is strictly after departure
/// - Fare is finite and non-negative
///
/// # Examples
///
/// ```
/// use route_planner::domain::{Leg, Location, TransportKind};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 4, 10).unwrap();
/// let leg = Leg::new(
///     "BUS-101",
///     Location::parse("Dhaka").unwrap(),
///     Location::parse("Chattogram").unwrap(),
///     date.and_hms_opt(8, 0, 0).unwrap(),
///     date.and_hms_opt(13, 30, 0).unwrap(),
///     850.0,
///     TransportKind::bus(),
///     40,
/// )
/// .unwrap();
///
/// assert_eq!(leg.duration_minutes(), 330);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leg {
    id: String,
    origin: Location,
    destination: Location,
    departure: NaiveDateTime,
    arrival: NaiveDateTime,
    fare: f64,
    kind: TransportKind,
    capacity: u32,
}

impl Leg {
    /// Construct a leg, validating the schedule invariants.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the arrival is not strictly after the departure,
    /// or the fare is negative or not finite.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        origin: Location,
        destination: Location,
        departure: NaiveDateTime,
        arrival: NaiveDateTime,
        fare: f64,
        kind: TransportKind,
        capacity: u32,
    ) -> Result<Self, DomainError> {
        if arrival <= departure {
            return Err(DomainError::InvalidLeg(
                "arrival must be strictly after departure",
            ));
        }
        if !fare.is_finite() || fare < 0.0 {
            return Err(DomainError::InvalidLeg("fare must be non-negative"));
        }

        Ok(Leg {
            id: id.into(),
            origin,
            destination,
            departure,
            arrival,
            fare,
            kind,
            capacity,
        })
    }

    /// Returns the schedule identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the origin location.
    pub fn origin(&self) -> &Location {
        &self.origin
    }

    /// Returns the destination location.
    pub fn destination(&self) -> &Location {
        &self.destination
    }

    /// Returns the departure instant.
    pub fn departure(&self) -> NaiveDateTime {
        self.departure
    }

    /// Returns the arrival instant.
    pub fn arrival(&self) -> NaiveDateTime {
        self.arrival
    }

    /// Returns the fare.
    pub fn fare(&self) -> f64 {
        self.fare
    }

    /// Returns the vehicle kind.
    pub fn kind(&self) -> &TransportKind {
        &self.kind
    }

    /// Returns the available capacity.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Returns the wall-clock travel time.
    pub fn duration(&self) -> Duration {
        self.arrival.signed_duration_since(self.departure)
    }

    /// Returns the wall-clock travel time in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        self.duration().num_minutes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn loc(s: &str) -> Location {
        Location::parse(s).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 4, 10)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn valid_leg() {
        let leg = Leg::new(
            "T-70",
            loc("Dhaka"),
            loc("Sylhet"),
            time(6, 20),
            time(12, 45),
            420.0,
            TransportKind::train(),
            120,
        )
        .unwrap();

        assert_eq!(leg.id(), "T-70");
        assert_eq!(leg.origin().as_str(), "Dhaka");
        assert_eq!(leg.destination().as_str(), "Sylhet");
        assert_eq!(leg.duration_minutes(), 385);
        assert_eq!(leg.fare(), 420.0);
        assert_eq!(leg.capacity(), 120);
        assert!(leg.kind().is_train());
    }

    #[test]
    fn arrival_must_follow_departure() {
        let result = Leg::new(
            "B-1",
            loc("Dhaka"),
            loc("Khulna"),
            time(10, 0),
            time(10, 0),
            300.0,
            TransportKind::bus(),
            40,
        );
        assert!(matches!(result, Err(DomainError::InvalidLeg(_))));

        let result = Leg::new(
            "B-2",
            loc("Dhaka"),
            loc("Khulna"),
            time(10, 0),
            time(9, 0),
            300.0,
            TransportKind::bus(),
            40,
        );
        assert!(matches!(result, Err(DomainError::InvalidLeg(_))));
    }

    #[test]
    fn fare_must_be_non_negative() {
        let result = Leg::new(
            "B-3",
            loc("Dhaka"),
            loc("Khulna"),
            time(10, 0),
            time(14, 0),
            -1.0,
            TransportKind::bus(),
            40,
        );
        assert!(matches!(result, Err(DomainError::InvalidLeg(_))));

        let result = Leg::new(
            "B-4",
            loc("Dhaka"),
            loc("Khulna"),
            time(10, 0),
            time(14, 0),
            f64::NAN,
            TransportKind::bus(),
            40,
        );
        assert!(result.is_err());
    }

    #[test]
    fn zero_fare_is_allowed() {
        let leg = Leg::new(
            "B-5",
            loc("Dhaka"),
            loc("Khulna"),
            time(10, 0),
            time(14, 0),
            0.0,
            TransportKind::bus(),
            40,
        );
        assert!(leg.is_ok());
    }

    #[test]
    fn kind_details_are_preserved() {
        let kind = TransportKind::Bus {
            company: Some("Green Line".to_string()),
            coach_type: Some("AC".to_string()),
        };
        let leg = Leg::new(
            "B-6",
            loc("Dhaka"),
            loc("Chattogram"),
            time(7, 0),
            time(13, 0),
            1200.0,
            kind.clone(),
            36,
        )
        .unwrap();
        assert_eq!(leg.kind(), &kind);
        assert!(leg.kind().is_bus());
        assert!(!leg.kind().is_train());
    }

    #[test]
    fn overnight_leg_crosses_midnight() {
        let dep = NaiveDate::from_ymd_opt(2026, 4, 10)
            .unwrap()
            .and_hms_opt(23, 0, 0)
            .unwrap();
        let arr = NaiveDate::from_ymd_opt(2026, 4, 11)
            .unwrap()
            .and_hms_opt(5, 30, 0)
            .unwrap();
        let leg = Leg::new(
            "T-71",
            loc("Dhaka"),
            loc("Chattogram"),
            dep,
            arr,
            680.0,
            TransportKind::train(),
            200,
        )
        .unwrap();
        assert_eq!(leg.duration_minutes(), 390);
    }
}
