//! Filter to keep restaurants within walking range of the reference point.

use crate::distance::distance_miles;
use crate::traits::Filter;
use data_loader::{Candidate, RefinementRequest};

/// Removes geocoded candidates farther than `request.max_distance_miles`.
///
/// ## Algorithm
/// 1. If the candidate has no coordinate, keep it
/// 2. Otherwise keep it when its distance from `request.reference` is at most the threshold
///
/// Candidates without location data are assumed to be in range, so a gap
/// in the service's geocoding never hides a result.
pub struct DistanceFilter;

impl Filter for DistanceFilter {
    fn name(&self) -> &str {
        "DistanceFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, request: &RefinementRequest) -> Vec<Candidate> {
        candidates
            .into_iter()
            .filter(|candidate| match candidate.coordinate {
                Some(coordinate) => {
                    distance_miles(request.reference, coordinate) <= request.max_distance_miles
                }
                None => true,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::{Coordinate, DietaryPreferences};

    /// Miles per degree of latitude on the haversine sphere
    const MILES_PER_DEGREE: f64 = 69.09;

    fn north_of_campus(miles: f64) -> Coordinate {
        let campus = Coordinate::UCI_CAMPUS;
        Coordinate::new(campus.lat + miles / MILES_PER_DEGREE, campus.lng)
    }

    fn request(max_distance_miles: f64) -> RefinementRequest {
        RefinementRequest::new(
            DietaryPreferences::default(),
            max_distance_miles,
            Coordinate::UCI_CAMPUS,
        )
    }

    #[test]
    fn test_distance_filter() {
        let candidates = vec![
            Candidate::new("far", "Far", 0.9).with_coordinate(north_of_campus(3.0)),
            Candidate::new("near", "Near", 0.8).with_coordinate(north_of_campus(0.5)),
            Candidate::new("unknown", "Unknown", 0.7),
            Candidate::new("edge", "Edge", 0.6).with_coordinate(north_of_campus(1.9)),
        ];

        let filtered = DistanceFilter.apply(candidates, &request(2.0));

        let ids: Vec<&str> = filtered.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["near", "unknown", "edge"]);
    }

    #[test]
    fn test_missing_coordinate_survives_zero_distance() {
        let candidates = vec![
            Candidate::new("unknown", "Unknown", 0.9),
            Candidate::new("next_door", "Next Door", 0.8).with_coordinate(north_of_campus(0.01)),
        ];

        let filtered = DistanceFilter.apply(candidates, &request(0.0));

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "unknown");
    }

    #[test]
    fn test_reference_point_itself_passes_zero_distance() {
        let candidates = vec![Candidate::new("here", "Here", 0.9).with_coordinate(Coordinate::UCI_CAMPUS)];
        assert_eq!(DistanceFilter.apply(candidates, &request(0.0)).len(), 1);
    }
}
