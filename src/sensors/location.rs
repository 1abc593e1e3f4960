//! Location provider trait and request configuration

use crate::core::{GeoCoordinate, LOCATION_TIMEOUT_MS};
use crate::sensors::error::LocationResult;
use serde::{Deserialize, Serialize};

/// Configuration for a one-shot location fetch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRequest {
    /// Ask the platform for its best available accuracy
    pub high_accuracy: bool,
    /// Maximum time to wait for a fix (milliseconds)
    pub timeout_ms: u32,
    /// Oldest cached fix the platform may return (milliseconds, 0 = none)
    pub maximum_age_ms: u32,
}

impl Default for LocationRequest {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout_ms: LOCATION_TIMEOUT_MS,
            maximum_age_ms: 0,
        }
    }
}

/// Platform abstraction for the geolocation source
pub trait LocationProvider {
    /// One-shot position fix. Suspends until the platform resolves a
    /// coordinate or a classified failure, or the request's own timeout
    /// fires.
    fn current_position(&mut self, request: &LocationRequest) -> LocationResult<GeoCoordinate>;
}
