//! Acquisition state and error taxonomy

use crate::core::{GeoCoordinate, LocationFix};
use crate::sensors::{LocationError, OrientationError};
use std::fmt;

/// Why the current acquisition attempt failed.
///
/// Every kind is terminal for the attempt but never for the process; the
/// user can always retry via refresh. Sensor kinds (`SensorUnsupported`,
/// `PermissionRequestFailed`) leave an existing fix in place and only keep
/// the live heading absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquisitionError {
    PermissionDenied,
    PositionUnavailable,
    Timeout,
    SensorUnsupported,
    PermissionRequestFailed,
    Unknown,
}

impl fmt::Display for AcquisitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AcquisitionError::PermissionDenied => write!(f, "Location permission denied"),
            AcquisitionError::PositionUnavailable => {
                write!(f, "Location information unavailable")
            }
            AcquisitionError::Timeout => write!(f, "Location request timed out"),
            AcquisitionError::SensorUnsupported => {
                write!(f, "Device orientation not supported")
            }
            AcquisitionError::PermissionRequestFailed => {
                write!(f, "Unable to access device orientation")
            }
            AcquisitionError::Unknown => write!(f, "Unknown location error"),
        }
    }
}

impl std::error::Error for AcquisitionError {}

impl From<LocationError> for AcquisitionError {
    fn from(error: LocationError) -> Self {
        match error {
            LocationError::PermissionDenied => AcquisitionError::PermissionDenied,
            LocationError::PositionUnavailable => AcquisitionError::PositionUnavailable,
            LocationError::Timeout { .. } => AcquisitionError::Timeout,
            LocationError::Unknown { .. } => AcquisitionError::Unknown,
        }
    }
}

impl From<OrientationError> for AcquisitionError {
    fn from(error: OrientationError) -> Self {
        match error {
            OrientationError::Unsupported => AcquisitionError::SensorUnsupported,
            OrientationError::PermissionDenied => AcquisitionError::PermissionDenied,
            OrientationError::RequestFailed { .. } => AcquisitionError::PermissionRequestFailed,
        }
    }
}

/// Combined sensor state published by the acquisition service.
///
/// The coordinate, bearing and distance travel together inside `fix`, so
/// they are present exactly when a fetch has succeeded. Only the service
/// mutates this; the presentation layer reads snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct AcquisitionState {
    /// Latest successful fix with its derived bearing and distance
    pub fix: Option<LocationFix>,
    /// Latest compass heading, degrees clockwise from north
    pub heading_deg: Option<f64>,
    /// A fetch is in flight
    pub loading: bool,
    /// Last failure of the current attempt
    pub error: Option<AcquisitionError>,
}

impl AcquisitionState {
    /// The state a fresh service starts from: nothing known, fetch pending
    pub fn pending() -> Self {
        Self {
            fix: None,
            heading_deg: None,
            loading: true,
            error: None,
        }
    }

    pub fn coordinate(&self) -> Option<GeoCoordinate> {
        self.fix.map(|fix| fix.coordinate)
    }

    pub fn bearing_deg(&self) -> Option<f64> {
        self.fix.map(|fix| fix.bearing_deg)
    }

    pub fn distance_km(&self) -> Option<u32> {
        self.fix.map(|fix| fix.distance_km)
    }
}
