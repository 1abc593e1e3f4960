//! Platform sensor abstraction layer
//!
//! This module wraps the host platform's geolocation and device-orientation
//! providers behind traits: a one-shot fetch for location and a cancellable
//! pull subscription for the heading stream.

pub mod error;
pub mod location;
pub mod mock;
pub mod orientation;

pub use error::{LocationError, LocationResult, OrientationError, OrientationResult};
pub use location::{LocationProvider, LocationRequest};
pub use mock::{MockLocationProvider, MockOrientationProvider};
pub use orientation::{
    OrientationProvider, OrientationSample, PermissionDecision, PermissionRequirement,
    SubscriptionToken,
};
