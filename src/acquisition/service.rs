//! Acquisition service bridging the sensor providers into one state
//!
//! Owns the location and orientation providers, runs the one-shot fetch
//! and permission flow, and publishes the combined `AcquisitionState`.
//! Everything runs on the single event loop; `process()` is the per-turn
//! pump that drains the heading stream.

use crate::acquisition::notify::NotificationSink;
use crate::acquisition::state::{AcquisitionError, AcquisitionState};
use crate::core::{GeoCoordinate, LocationFix, KAABA};
use crate::geodesy;
use crate::sensors::{
    LocationProvider, LocationRequest, OrientationProvider, PermissionDecision,
    PermissionRequirement, SubscriptionToken,
};

/// Bridges the platform sensor sources into `AcquisitionState`
pub struct AcquisitionService {
    location: Box<dyn LocationProvider>,
    orientation: Box<dyn OrientationProvider>,
    notifier: Box<dyn NotificationSink>,
    request: LocationRequest,
    target: GeoCoordinate,
    state: AcquisitionState,
    subscription: Option<SubscriptionToken>,
}

impl AcquisitionService {
    /// Create a service pointed at the Kaaba with the default fetch
    /// configuration
    pub fn new(
        location: Box<dyn LocationProvider>,
        orientation: Box<dyn OrientationProvider>,
        notifier: Box<dyn NotificationSink>,
    ) -> Self {
        Self {
            location,
            orientation,
            notifier,
            request: LocationRequest::default(),
            target: KAABA,
            state: AcquisitionState::pending(),
            subscription: None,
        }
    }

    /// Override the target coordinate
    pub fn with_target(mut self, target: GeoCoordinate) -> Self {
        self.target = target;
        self
    }

    /// Override the location fetch configuration
    pub fn with_request(mut self, request: LocationRequest) -> Self {
        self.request = request;
        self
    }

    /// Read-only view of the combined sensor state
    pub fn state(&self) -> &AcquisitionState {
        &self.state
    }

    /// Owned copy of the state for the presentation layer
    pub fn snapshot(&self) -> AcquisitionState {
        self.state.clone()
    }

    pub fn target(&self) -> GeoCoordinate {
        self.target
    }

    /// Initial acquisition: fetch a position once, then attach the
    /// heading listener. A heading failure never discards the fix.
    pub fn start(&mut self) {
        self.state.loading = true;

        match self.location.current_position(&self.request) {
            Ok(coordinate) => {
                self.apply_fix(coordinate);
                self.attach_heading_listener();
            }
            Err(error) => {
                let kind = AcquisitionError::from(error);
                self.notifier.error(&kind.to_string());
                self.state.loading = false;
                self.state.error = Some(kind);
            }
        }
    }

    /// Re-issue the one-shot fetch. Clears the previous error first, keeps
    /// the previous fix on failure, and never re-runs the permission flow.
    pub fn refresh(&mut self) {
        self.state.loading = true;
        self.state.error = None;

        match self.location.current_position(&self.request) {
            Ok(coordinate) => {
                self.apply_fix(coordinate);
                self.notifier.success("Location updated successfully");
            }
            Err(error) => {
                self.notifier.error("Failed to update location");
                self.state.loading = false;
                self.state.error = Some(AcquisitionError::from(error));
            }
        }
    }

    /// Drain queued orientation samples into the heading field. Samples
    /// without a usable alpha are skipped. Returns how many samples were
    /// drained.
    pub fn process(&mut self) -> u32 {
        let token = match self.subscription {
            Some(token) => token,
            None => return 0,
        };

        let mut processed = 0;
        while let Some(sample) = self.orientation.poll_sample(token) {
            if let Some(alpha) = sample.alpha_deg {
                // Alpha is the device-frame rotation; the compass heading
                // runs clockwise the other way.
                self.state.heading_deg = Some(360.0 - alpha);
            }
            processed += 1;
        }

        processed
    }

    /// Release the heading subscription
    pub fn shutdown(&mut self) {
        if let Some(token) = self.subscription.take() {
            self.orientation.unsubscribe(token);
        }
    }

    fn apply_fix(&mut self, coordinate: GeoCoordinate) {
        self.state.fix = Some(LocationFix {
            coordinate,
            bearing_deg: geodesy::bearing(&coordinate, &self.target),
            distance_km: geodesy::distance_km(&coordinate, &self.target),
        });
        self.state.loading = false;
        self.state.error = None;
    }

    fn attach_heading_listener(&mut self) {
        if !self.orientation.supported() {
            self.record_sensor_failure(AcquisitionError::SensorUnsupported);
            return;
        }

        if self.orientation.permission_requirement() == PermissionRequirement::UserPrompt {
            match self.orientation.request_permission() {
                Ok(PermissionDecision::Granted) => {}
                Ok(PermissionDecision::Denied) => {
                    self.notifier.error("Orientation permission denied");
                    self.state.error = Some(AcquisitionError::PermissionDenied);
                    return;
                }
                Err(error) => {
                    self.record_sensor_failure(AcquisitionError::from(error));
                    return;
                }
            }
        }

        match self.orientation.subscribe() {
            Ok(token) => self.subscription = Some(token),
            Err(error) => self.record_sensor_failure(AcquisitionError::from(error)),
        }
    }

    fn record_sensor_failure(&mut self, kind: AcquisitionError) {
        self.notifier.error(&kind.to_string());
        self.state.error = Some(kind);
    }
}
