//! Property tests for the refinement invariants.

use data_loader::{Candidate, Coordinate, DietaryPreferences, RefinementRequest};
use pipeline::{distance_miles, refine};
use proptest::prelude::*;
use std::num::NonZeroUsize;

const TAG_POOL: [&str; 5] = ["vegan", "vegetarian", "gluten_free", "halal", "gluten free"];

fn coordinate_strategy() -> impl Strategy<Value = Coordinate> {
    (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lng)| Coordinate::new(lat, lng))
}

fn near_campus_strategy() -> impl Strategy<Value = Option<Coordinate>> {
    let campus = Coordinate::UCI_CAMPUS;
    proptest::option::of(
        (-0.05f64..0.05, -0.05f64..0.05)
            .prop_map(move |(dlat, dlng)| Coordinate::new(campus.lat + dlat, campus.lng + dlng)),
    )
}

/// Ranked candidates with unique ids and non-increasing relevance.
fn candidates_strategy() -> impl Strategy<Value = Vec<Candidate>> {
    proptest::collection::vec(
        (near_campus_strategy(), proptest::collection::vec(any::<bool>(), TAG_POOL.len())),
        0..30,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (coordinate, tag_mask))| {
                let tags = TAG_POOL
                    .iter()
                    .zip(tag_mask)
                    .filter_map(|(tag, keep)| keep.then_some(*tag));
                let mut candidate =
                    Candidate::new(format!("r{i}"), format!("Restaurant {i}"), 1.0 - i as f64 * 0.01)
                        .with_tags(tags);
                candidate.coordinate = coordinate;
                candidate
            })
            .collect()
    })
}

fn preferences_strategy() -> impl Strategy<Value = DietaryPreferences> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>())
        .prop_map(|(h, v, vg, gf)| DietaryPreferences::from_flags(h, v, vg, gf))
}

fn request(prefs: DietaryPreferences, max_distance_miles: f64) -> RefinementRequest {
    RefinementRequest::new(prefs, max_distance_miles, Coordinate::UCI_CAMPUS)
}

fn is_subsequence(output: &[Candidate], input: &[Candidate]) -> bool {
    let mut remaining = input.iter();
    output
        .iter()
        .all(|wanted| remaining.by_ref().any(|candidate| candidate.id == wanted.id))
}

fn ids(candidates: &[Candidate]) -> Vec<String> {
    candidates.iter().map(|c| c.id.clone()).collect()
}

proptest! {
    #[test]
    fn output_is_subsequence_of_input(
        candidates in candidates_strategy(),
        prefs in preferences_strategy(),
        max_distance in 0.0f64..5.0,
        limit in 1usize..40,
    ) {
        let limit = NonZeroUsize::new(limit).unwrap();
        let refined = refine(candidates.clone(), request(prefs, max_distance), limit);
        prop_assert!(refined.len() <= limit.get());
        prop_assert!(is_subsequence(&refined, &candidates));
    }

    #[test]
    fn geocoded_output_is_within_range(
        candidates in candidates_strategy(),
        max_distance in 0.0f64..5.0,
    ) {
        let refined = refine(candidates, request(DietaryPreferences::default(), max_distance), NonZeroUsize::MAX);
        for candidate in &refined {
            if let Some(coordinate) = candidate.coordinate {
                prop_assert!(distance_miles(Coordinate::UCI_CAMPUS, coordinate) <= max_distance);
            }
        }
    }

    #[test]
    fn raising_max_distance_never_removes(
        candidates in candidates_strategy(),
        prefs in preferences_strategy(),
        max_distance in 0.0f64..5.0,
        extra in 0.0f64..5.0,
    ) {
        let narrow = refine(candidates.clone(), request(prefs, max_distance), NonZeroUsize::MAX);
        let wide = refine(candidates, request(prefs, max_distance + extra), NonZeroUsize::MAX);
        prop_assert!(is_subsequence(&narrow, &wide));
    }

    #[test]
    fn missing_coordinates_always_pass_distance(
        candidates in candidates_strategy(),
        max_distance in prop_oneof![Just(0.0f64), 0.0f64..5.0],
    ) {
        let refined = ids(&refine(candidates.clone(), request(DietaryPreferences::default(), max_distance), NonZeroUsize::MAX));
        for candidate in candidates.iter().filter(|c| c.coordinate.is_none()) {
            prop_assert!(refined.contains(&candidate.id));
        }
    }

    #[test]
    fn each_flag_checks_only_its_own_tag(
        candidates in candidates_strategy(),
        prefs in preferences_strategy(),
    ) {
        let soft = prefs.soft;
        let expected: Vec<String> = candidates
            .iter()
            .filter(|c| {
                (!soft.vegan || c.has_tag("vegan"))
                    && (!soft.vegetarian || c.has_tag("vegetarian"))
                    && (!soft.gluten_free || c.has_tag("gluten_free"))
            })
            .map(|c| c.id.clone())
            .collect();

        // Large radius so only the dietary filter is in play
        let refined = refine(candidates, request(prefs, 1000.0), NonZeroUsize::MAX);
        prop_assert_eq!(ids(&refined), expected);
    }

    #[test]
    fn refinement_is_idempotent(
        candidates in candidates_strategy(),
        prefs in preferences_strategy(),
        max_distance in 0.0f64..5.0,
        limit in 1usize..40,
    ) {
        let limit = NonZeroUsize::new(limit).unwrap();
        let req = request(prefs, max_distance);
        let once = refine(candidates, req, limit);
        let twice = refine(once.clone(), req, limit);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn distance_is_symmetric_and_zero_on_identity(
        a in coordinate_strategy(),
        b in coordinate_strategy(),
    ) {
        prop_assert_eq!(distance_miles(a, a), 0.0);
        prop_assert!((distance_miles(a, b) - distance_miles(b, a)).abs() < 1e-6);
    }
}
