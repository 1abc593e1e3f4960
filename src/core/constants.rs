//! Physical constants and system parameters

use crate::core::types::GeoCoordinate;

/// Latitude of the Kaaba in Mecca (degrees)
pub const KAABA_LATITUDE: f64 = 21.4225;

/// Longitude of the Kaaba in Mecca (degrees)
pub const KAABA_LONGITUDE: f64 = 39.8262;

/// The fixed target every bearing and distance is computed toward
pub const KAABA: GeoCoordinate = GeoCoordinate {
    latitude: KAABA_LATITUDE,
    longitude: KAABA_LONGITUDE,
};

/// Mean Earth radius used by the haversine distance (km)
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Default timeout for a one-shot location fetch (milliseconds)
pub const LOCATION_TIMEOUT_MS: u32 = 10_000;

/// Duration of the calibration animation (milliseconds)
pub const CALIBRATION_DURATION_MS: u64 = 3_000;
