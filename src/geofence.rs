//! Great-circle distance checks for the event geofence.
//!
//! Inputs are degrees; distances are meters. Coordinate range validation is
//! the caller's responsibility — out-of-range values produce a mathematically
//! defined but meaningless result.

/// Mean Earth radius in meters, as used by the standard Haversine formula.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Default permitted radius around the event location, in meters.
pub const DEFAULT_RADIUS_M: f64 = 200.0;

/// The event's fixed location and permitted submission radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeofenceReference {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_m: f64,
}

impl GeofenceReference {
    pub fn new(latitude: f64, longitude: f64, radius_m: f64) -> Self {
        Self {
            latitude,
            longitude,
            radius_m,
        }
    }

    /// True if the given point lies within this fence's radius.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        is_within_radius(
            latitude,
            longitude,
            self.latitude,
            self.longitude,
            self.radius_m,
        )
    }
}

/// Haversine great-circle distance in meters between two points.
pub fn haversine_distance_m(
    user_lat: f64,
    user_lng: f64,
    target_lat: f64,
    target_lng: f64,
) -> f64 {
    let phi1 = user_lat.to_radians();
    let phi2 = target_lat.to_radians();
    let delta_phi = (target_lat - user_lat).to_radians();
    let delta_lambda = (target_lng - user_lng).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// True if the user's point is within `radius_m` meters of the target point.
pub fn is_within_radius(
    user_lat: f64,
    user_lng: f64,
    target_lat: f64,
    target_lng: f64,
    radius_m: f64,
) -> bool {
    haversine_distance_m(user_lat, user_lng, target_lat, target_lng) <= radius_m
}
