//! Ranking, deduplication, and dominance filtering for search results.
//!
//! The search engine returns itineraries in discovery order, which is
//! cost order under the search criterion but not necessarily the final
//! presentation order. This module produces the ranked list callers see.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::domain::{Itinerary, OptimizationCriterion};

/// Sort itineraries best-first under the criterion.
///
/// Equal scores order by fewer hops, then earlier departure, then
/// earlier arrival, then first leg id. The chain is a total order, so
/// ranking identical inputs always yields identical output.
pub fn rank_itineraries(
    mut itineraries: Vec<Itinerary>,
    criterion: OptimizationCriterion,
) -> Vec<Itinerary> {
    itineraries.sort_by(|a, b| {
        criterion
            .itinerary_score(a)
            .total_cmp(&criterion.itinerary_score(b))
            .then_with(|| a.hop_count().cmp(&b.hop_count()))
            .then_with(|| a.departure_time().cmp(&b.departure_time()))
            .then_with(|| a.arrival_time().cmp(&b.arrival_time()))
            .then_with(|| a.legs()[0].id().cmp(b.legs()[0].id()))
    });

    itineraries
}

/// Collapse itineraries built from the identical leg sequence.
///
/// Over-fetching can surface the same physical route more than once;
/// only the first occurrence is kept.
pub fn deduplicate(itineraries: Vec<Itinerary>) -> Vec<Itinerary> {
    let mut seen: HashSet<Vec<String>> = HashSet::new();

    itineraries
        .into_iter()
        .filter(|itinerary| {
            let key: Vec<String> = itinerary
                .legs()
                .iter()
                .map(|leg| leg.id().to_string())
                .collect();
            seen.insert(key)
        })
        .collect()
}

/// Check if itinerary `a` dominates itinerary `b`: no worse on total
/// fare, total duration, and hop count, and strictly better on at least
/// one of them.
fn dominates(a: &Itinerary, b: &Itinerary) -> bool {
    let fare = a.total_fare().total_cmp(&b.total_fare());
    let duration = a.total_duration().cmp(&b.total_duration());
    let hops = a.hop_count().cmp(&b.hop_count());

    fare != Ordering::Greater
        && duration != Ordering::Greater
        && hops != Ordering::Greater
        && (fare == Ordering::Less || duration == Ordering::Less || hops == Ordering::Less)
}

/// Remove dominated itineraries.
///
/// A dominated option can never rank best under any criterion, so
/// dropping it before ranking only removes noise from the results.
pub fn remove_dominated(itineraries: Vec<Itinerary>) -> Vec<Itinerary> {
    if itineraries.len() <= 1 {
        return itineraries;
    }

    let mut result: Vec<Itinerary> = Vec::with_capacity(itineraries.len());

    for candidate in itineraries {
        if result.iter().any(|kept| dominates(kept, &candidate)) {
            continue;
        }
        // The candidate survives; drop anything it dominates in turn.
        result.retain(|kept| !dominates(&candidate, kept));
        result.push(candidate);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Leg, Location, TransportKind};
    use chrono::{NaiveDate, NaiveDateTime};
    use std::sync::Arc;

    fn loc(s: &str) -> Location {
        Location::parse(s).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 4, 10)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn leg(
        id: &str,
        from: &str,
        to: &str,
        dep: (u32, u32),
        arr: (u32, u32),
        fare: f64,
    ) -> Arc<Leg> {
        Arc::new(
            Leg::new(
                id,
                loc(from),
                loc(to),
                time(dep.0, dep.1),
                time(arr.0, arr.1),
                fare,
                TransportKind::bus(),
                40,
            )
            .unwrap(),
        )
    }

    fn direct(id: &str, dep: (u32, u32), arr: (u32, u32), fare: f64) -> Itinerary {
        Itinerary::direct(leg(id, "Dhaka", "Khulna", dep, arr, fare))
    }

    fn two_hop(ids: (&str, &str), fares: (f64, f64)) -> Itinerary {
        Itinerary::new(vec![
            leg(ids.0, "Dhaka", "Cumilla", (8, 0), (10, 0), fares.0),
            leg(ids.1, "Cumilla", "Khulna", (10, 45), (13, 0), fares.1),
        ])
        .unwrap()
    }

    #[test]
    fn rank_by_fare_under_lowest_cost() {
        let ranked = rank_itineraries(
            vec![
                direct("A", (8, 0), (12, 0), 700.0),
                direct("B", (9, 0), (13, 0), 400.0),
                direct("C", (10, 0), (14, 0), 550.0),
            ],
            OptimizationCriterion::LowestCost,
        );

        let fares: Vec<f64> = ranked.iter().map(Itinerary::total_fare).collect();
        assert_eq!(fares, vec![400.0, 550.0, 700.0]);
    }

    #[test]
    fn rank_by_duration_under_shortest_time() {
        let ranked = rank_itineraries(
            vec![
                direct("A", (8, 0), (14, 0), 100.0),
                direct("B", (9, 0), (12, 0), 900.0),
            ],
            OptimizationCriterion::ShortestTime,
        );

        assert_eq!(ranked[0].legs()[0].id(), "B");
        assert_eq!(ranked[1].legs()[0].id(), "A");
    }

    #[test]
    fn rank_by_hops_under_fewest_hops() {
        let ranked = rank_itineraries(
            vec![
                two_hop(("A", "B"), (100.0, 100.0)),
                direct("C", (8, 0), (13, 0), 900.0),
            ],
            OptimizationCriterion::FewestHops,
        );

        assert_eq!(ranked[0].hop_count(), 1);
        assert_eq!(ranked[1].hop_count(), 2);
    }

    #[test]
    fn equal_scores_tie_break_on_hops_then_departure() {
        // Same total fare; the direct option and the earlier departure
        // must come first.
        let ranked = rank_itineraries(
            vec![
                two_hop(("X", "Y"), (250.0, 250.0)),
                direct("B", (10, 0), (14, 0), 500.0),
                direct("A", (8, 0), (12, 0), 500.0),
            ],
            OptimizationCriterion::LowestCost,
        );

        assert_eq!(ranked[0].legs()[0].id(), "A");
        assert_eq!(ranked[1].legs()[0].id(), "B");
        assert_eq!(ranked[2].hop_count(), 2);
    }

    #[test]
    fn deduplicate_same_leg_sequence() {
        let a = two_hop(("L1", "L2"), (100.0, 100.0));
        let b = two_hop(("L1", "L2"), (100.0, 100.0));
        let c = two_hop(("L1", "L3"), (100.0, 100.0));

        let result = deduplicate(vec![a, b, c]);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn remove_dominated_keeps_pareto_front() {
        // B is dominated by A (same duration shape, higher fare);
        // C trades fare against duration, so it survives.
        let a = direct("A", (8, 0), (12, 0), 400.0);
        let b = direct("B", (8, 0), (12, 0), 600.0);
        let c = direct("C", (8, 0), (11, 0), 500.0);

        let result = remove_dominated(vec![a, b, c]);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|it| it.legs()[0].id() != "B"));
    }

    #[test]
    fn later_candidate_can_displace_kept_ones() {
        let worse = direct("A", (8, 0), (13, 0), 600.0);
        let better = direct("B", (8, 0), (12, 0), 400.0);

        let result = remove_dominated(vec![worse, better]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].legs()[0].id(), "B");
    }

    #[test]
    fn incomparable_itineraries_all_survive() {
        // Cheap-but-slow vs fast-but-expensive: neither dominates.
        let cheap = direct("A", (8, 0), (16, 0), 200.0);
        let fast = direct("B", (8, 0), (10, 0), 900.0);

        let result = remove_dominated(vec![cheap, fast]);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn empty_input() {
        assert!(rank_itineraries(vec![], OptimizationCriterion::LowestCost).is_empty());
        assert!(deduplicate(vec![]).is_empty());
        assert!(remove_dominated(vec![]).is_empty());
    }
}
