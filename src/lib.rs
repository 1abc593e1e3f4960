//! Qibla Compass Core
//!
//! Determines the device's location, computes the great-circle bearing and
//! distance toward the Kaaba, and reconciles the live device heading into
//! a single needle rotation for the presentation layer.

pub mod acquisition;
pub mod app;
pub mod core;
pub mod geodesy;
pub mod needle;
pub mod prefs;
pub mod sensors;
pub mod timing;
pub mod utils;

// Re-export commonly used types
pub use acquisition::{
    AcquisitionError, AcquisitionService, AcquisitionState, ConsoleNotifier, NotificationSink,
    NullNotifier, RecordingNotifier,
};
pub use app::CompassController;
pub use crate::core::{GeoCoordinate, LocationFix, KAABA};
pub use geodesy::{bearing, distance_km, format_coordinate, normalize_degrees, Axis};
pub use needle::{needle_rotation, CalibrationState, NeedleController};
pub use prefs::{
    JsonFilePreferenceStore, MemoryPreferenceStore, PreferenceStore, Theme, ThemeManager,
};
pub use sensors::{
    LocationError, LocationProvider, LocationRequest, MockLocationProvider,
    MockOrientationProvider, OrientationProvider, OrientationSample, SubscriptionToken,
};
pub use timing::{Clock, ManualClock, MonotonicClock, TaskScheduler, TimerHandle};
pub use utils::{CompassConfig, ConfigError};
