//! Great-circle distance on a spherical Earth.

use data_loader::Coordinate;

/// Mean Earth radius in miles.
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Haversine distance between two coordinates, in miles.
///
/// Both coordinates must be in range (see [`Coordinate::is_valid`]). Out of
/// range input is a caller bug: debug builds panic, release builds return
/// whatever the formula yields.
///
/// ## Algorithm
/// `h = sin²(Δφ/2) + cos φ1 · cos φ2 · sin²(Δλ/2)`, distance `= 2R · asin(√h)`
pub fn distance_miles(a: Coordinate, b: Coordinate) -> f64 {
    debug_assert!(a.is_valid(), "coordinate out of range: {a:?}");
    debug_assert!(b.is_valid(), "coordinate out of range: {b:?}");

    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let d_phi = (b.lat - a.lat).to_radians();
    let d_lambda = (b.lng - a.lng).to_radians();

    let h = (d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);

    // Rounding can push h a hair above 1 for antipodal points
    2.0 * EARTH_RADIUS_MILES * h.min(1.0).sqrt().asin()
}
