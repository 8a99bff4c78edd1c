//! Great-circle distance between GPS coordinates.

/// Mean Earth radius in meters.
const EARTH_RADIUS: f64 = 6_371_000.0;

/// Calculate the distance in meters between two GPS points (Haversine formula).
///
/// Inputs are degrees. NaN coordinates propagate as NaN; callers are
/// expected to have validated coordinates already.
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS * c
}
