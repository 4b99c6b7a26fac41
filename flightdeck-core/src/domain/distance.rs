//! Great-circle distance helpers
//!
//! Used when scheduling a flight so the km and mile figures stay in
//! agreement. Approximate by design; there is no accuracy requirement.

const EARTH_RADIUS_KM: f64 = 6371.0;
const MILES_PER_KM: f64 = 0.621_371;

/// Haversine distance between two coordinates, in kilometers
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

pub fn km_to_miles(km: f64) -> f64 {
    km * MILES_PER_KM
}
