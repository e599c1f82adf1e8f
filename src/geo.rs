//! Great-circle geometry shared by every distance-aware module.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point on the globe, degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(ValidationError::LatitudeOutOfRange(self.lat));
        }
        if !(-180.0..=180.0).contains(&self.lng) {
            return Err(ValidationError::LongitudeOutOfRange(self.lng));
        }
        Ok(())
    }
}

/// Haversine great-circle distance between two points, in kilometers.
///
/// Total over all valid coordinates: symmetric, and zero when both points
/// coincide.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Destination point reached by travelling `distance_km` from `start` along
/// the given initial bearing (degrees, clockwise from north).
pub fn destination(start: GeoPoint, bearing_deg: f64, distance_km: f64) -> GeoPoint {
    let ang = distance_km / EARTH_RADIUS_KM;
    let brg = bearing_deg.to_radians();
    let lat1 = start.lat.to_radians();
    let lng1 = start.lng.to_radians();

    let lat2 = (lat1.sin() * ang.cos() + lat1.cos() * ang.sin() * brg.cos()).asin();
    let lng2 = lng1
        + (brg.sin() * ang.sin() * lat1.cos()).atan2(ang.cos() - lat1.sin() * lat2.sin());

    // Normalize longitude back into [-180, 180].
    let lng2_deg = (lng2.to_degrees() + 540.0).rem_euclid(360.0) - 180.0;
    GeoPoint::new(lat2.to_degrees(), lng2_deg)
}
