//! Compass controller facade
//!
//! The single owning context for acquisition state, calibration state and
//! the timer scheduler. The presentation layer calls `tick()` once per
//! event-loop turn and reads snapshots; it never mutates state directly.

use crate::acquisition::{AcquisitionService, AcquisitionState, NotificationSink};
use crate::geodesy::{self, Axis};
use crate::needle::{needle_rotation, CalibrationState, NeedleController};
use crate::sensors::{LocationProvider, OrientationProvider};
use crate::timing::TaskScheduler;
use crate::utils::config::{CompassConfig, ConfigError};
use std::time::Duration;

/// Owns the acquisition service, the needle controller and the scheduler
pub struct CompassController {
    service: AcquisitionService,
    needle: NeedleController,
    scheduler: TaskScheduler,
}

impl CompassController {
    /// Controller with the default configuration (Kaaba target, 10 s
    /// location timeout, 3 s calibration)
    pub fn new(
        location: Box<dyn LocationProvider>,
        orientation: Box<dyn OrientationProvider>,
        notifier: Box<dyn NotificationSink>,
    ) -> Self {
        Self {
            service: AcquisitionService::new(location, orientation, notifier),
            needle: NeedleController::new(),
            scheduler: TaskScheduler::new(),
        }
    }

    /// Controller from a validated configuration
    pub fn with_config(
        location: Box<dyn LocationProvider>,
        orientation: Box<dyn OrientationProvider>,
        notifier: Box<dyn NotificationSink>,
        config: &CompassConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let service = AcquisitionService::new(location, orientation, notifier)
            .with_target(config.target)
            .with_request(config.location.clone());
        let needle = NeedleController::new()
            .with_duration(Duration::from_millis(config.calibration_duration_ms));

        Ok(Self {
            service,
            needle,
            scheduler: TaskScheduler::new(),
        })
    }

    /// Swap in a scheduler, e.g. one over a manually advanced clock
    pub fn with_scheduler(mut self, scheduler: TaskScheduler) -> Self {
        self.scheduler = scheduler;
        self
    }

    /// Begin the initial acquisition
    pub fn start(&mut self) {
        self.service.start();
    }

    /// Re-fetch the location on user request
    pub fn refresh(&mut self) {
        self.service.refresh();
    }

    /// Begin the timed calibration animation
    pub fn calibrate(&mut self) {
        self.needle.begin_calibration(&mut self.scheduler);
    }

    /// One event-loop turn: drain sensor samples, then fire due timers.
    /// Returns how many orientation samples were drained.
    pub fn tick(&mut self) -> u32 {
        let processed = self.service.process();

        for handle in self.scheduler.run_due() {
            self.needle.handle_timer(handle);
        }

        processed
    }

    /// Read-only acquisition state
    pub fn acquisition(&self) -> &AcquisitionState {
        self.service.state()
    }

    /// Read-only calibration state
    pub fn calibration(&self) -> &CalibrationState {
        self.needle.calibration()
    }

    /// Rendering hint for the dial animation
    pub fn dial_spinning(&self) -> bool {
        self.needle.dial_spinning()
    }

    /// Needle rotation from the latest bearing and heading, `None` when
    /// no fix exists yet
    pub fn rotation(&self) -> Option<f64> {
        let state = self.service.state();
        needle_rotation(state.bearing_deg(), state.heading_deg)
    }

    /// Current coordinate formatted as degree/minute/second strings
    /// (latitude, longitude)
    pub fn formatted_position(&self) -> Option<(String, String)> {
        self.service.state().coordinate().map(|coordinate| {
            (
                geodesy::format_coordinate(coordinate.latitude, Axis::Latitude),
                geodesy::format_coordinate(coordinate.longitude, Axis::Longitude),
            )
        })
    }

    /// Release sensor subscriptions and cancel pending timers
    pub fn shutdown(&mut self) {
        self.service.shutdown();
        self.needle.teardown(&mut self.scheduler);
    }
}
