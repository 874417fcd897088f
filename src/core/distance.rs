use crate::models::Coordinate;

/// Earth's radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two points in kilometers
///
/// The intermediate term `a` is clamped to `[0, 1]`; rounding can push it
/// slightly outside that range for identical or antipodal points, which
/// would otherwise turn the square roots into NaN. NaN inputs still
/// produce a NaN distance.
///
/// # Arguments
/// * `from` - First point in degrees
/// * `to` - Second point in degrees
///
/// # Returns
/// Distance in kilometers
#[inline]
pub fn haversine_distance(from: Coordinate, to: Coordinate) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lon = (to.lng - from.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Render a distance the way facility cards show it, e.g. `1.5 km`
pub fn format_distance(distance_km: f64) -> String {
    format!("{:.1} km", distance_km)
}
