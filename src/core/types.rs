//! Core data types for the compass system

use serde::{Deserialize, Serialize};

/// Geographic coordinate in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// A resolved location together with the bearing and distance toward the
/// target. Bearing and distance exist exactly when a coordinate does, so
/// all three travel as one value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationFix {
    /// Device position at fix time
    pub coordinate: GeoCoordinate,
    /// Bearing toward the target, degrees clockwise from true north
    pub bearing_deg: f64,
    /// Great-circle distance to the target (kilometers)
    pub distance_km: u32,
}
