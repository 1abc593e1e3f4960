//! Sensor error types and handling

use std::fmt;

/// Failure of a one-shot location fetch, one variant per platform
/// failure code
#[derive(Debug, Clone, PartialEq)]
pub enum LocationError {
    /// User denied the location permission prompt
    PermissionDenied,
    /// The platform could not produce a position fix
    PositionUnavailable,
    /// The fetch did not resolve within its deadline
    Timeout { timeout_ms: u32 },
    /// Any other platform failure
    Unknown { details: String },
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationError::PermissionDenied => {
                write!(f, "Location permission denied")
            }
            LocationError::PositionUnavailable => {
                write!(f, "Location information unavailable")
            }
            LocationError::Timeout { timeout_ms } => {
                write!(f, "Location request timed out after {}ms", timeout_ms)
            }
            LocationError::Unknown { details } => {
                write!(f, "Unknown location error: {}", details)
            }
        }
    }
}

impl std::error::Error for LocationError {}

/// Result type for location operations
pub type LocationResult<T> = Result<T, LocationError>;

/// Failure of the orientation sensor or its permission flow
#[derive(Debug, Clone, PartialEq)]
pub enum OrientationError {
    /// The device has no orientation sensor
    Unsupported,
    /// User denied the orientation permission prompt
    PermissionDenied,
    /// The permission request itself failed
    RequestFailed { details: String },
}

impl fmt::Display for OrientationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrientationError::Unsupported => {
                write!(f, "Device orientation not supported")
            }
            OrientationError::PermissionDenied => {
                write!(f, "Orientation permission denied")
            }
            OrientationError::RequestFailed { details } => {
                write!(f, "Unable to access device orientation: {}", details)
            }
        }
    }
}

impl std::error::Error for OrientationError {}

/// Result type for orientation operations
pub type OrientationResult<T> = Result<T, OrientationError>;
