//! Property-based tests for haversine distance and proximity ranking.
//!
//! # Invariants tested
//!
//! - **Zero self-distance:** a point is 0 km from itself.
//! - **Symmetry:** `distance(a, b) == distance(b, a)`.
//! - **Bounded:** distances lie between 0 and half the Earth's circumference.
//! - **Cardinality:** ranking neither drops nor duplicates entities.
//! - **Ordering:** ranked distances are non-decreasing.
//! - **Idempotence:** ranking twice gives identical output.

use proptest::prelude::*;
use tablefinder_core::{Coordinate, EARTH_RADIUS_KM, ProximityRanker};

const TOLERANCE_KM: f64 = 1e-6;

fn coordinate_strategy() -> impl Strategy<Value = Coordinate> {
    (-90.0_f64..=90.0, -180.0_f64..=180.0)
        .prop_map(|(latitude, longitude)| Coordinate::new(latitude, longitude))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn point_is_zero_km_from_itself(point in coordinate_strategy()) {
        prop_assert!(point.distance_km(point).abs() < TOLERANCE_KM);
    }

    #[test]
    fn distance_is_symmetric(a in coordinate_strategy(), b in coordinate_strategy()) {
        let there = a.distance_km(b);
        let back = b.distance_km(a);
        prop_assert!((there - back).abs() < TOLERANCE_KM, "{there} != {back}");
    }

    #[test]
    fn distance_is_bounded(a in coordinate_strategy(), b in coordinate_strategy()) {
        let km = a.distance_km(b);
        prop_assert!(km >= 0.0);
        prop_assert!(km <= EARTH_RADIUS_KM * std::f64::consts::PI + TOLERANCE_KM);
    }

    #[test]
    fn ranking_preserves_cardinality_and_order(
        reference in coordinate_strategy(),
        entities in prop::collection::vec(coordinate_strategy(), 0..64),
    ) {
        let ranked = ProximityRanker::new().rank(reference, entities.clone());
        prop_assert_eq!(ranked.len(), entities.len());
        let distances: Vec<f64> = ranked.iter().filter_map(|r| r.distance_km).collect();
        prop_assert_eq!(distances.len(), entities.len());
        prop_assert!(distances.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn ranking_is_idempotent(
        reference in coordinate_strategy(),
        entities in prop::collection::vec(coordinate_strategy(), 0..32),
    ) {
        let ranker = ProximityRanker::new();
        let first = ranker.rank(reference, entities.clone());
        let second = ranker.rank(reference, entities);
        prop_assert_eq!(first, second);
    }
}
