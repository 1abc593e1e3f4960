//! Needle rotation reconciliation and the calibration state machine

use crate::core::CALIBRATION_DURATION_MS;
use crate::geodesy::normalize_degrees;
use crate::timing::{TaskScheduler, TimerHandle};
use std::time::{Duration, Instant};

/// Needle rotation from the latest bearing and heading, in [0, 360).
///
/// With both inputs the needle points at the target relative to where the
/// device faces; with only a bearing it points at the target relative to
/// north; with neither the rotation is undefined and the presentation
/// layer shows its neutral state.
pub fn needle_rotation(bearing_deg: Option<f64>, heading_deg: Option<f64>) -> Option<f64> {
    match (bearing_deg, heading_deg) {
        (Some(bearing), Some(heading)) => Some(normalize_degrees(bearing - heading)),
        (Some(bearing), None) => Some(bearing),
        (None, _) => None,
    }
}

/// Timed calibration indicator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationState {
    pub active: bool,
    pub started_at: Option<Instant>,
}

impl CalibrationState {
    pub fn idle() -> Self {
        Self {
            active: false,
            started_at: None,
        }
    }
}

/// Drives the calibration state machine and the dial animation hint.
///
/// Entering calibration arms a one-shot timer; the only effect of the
/// timer firing is the transition back to idle. Teardown cancels a pending
/// timer so it can never fire into a dead owner.
pub struct NeedleController {
    calibration: CalibrationState,
    duration: Duration,
    timer: Option<TimerHandle>,
}

impl NeedleController {
    pub fn new() -> Self {
        Self {
            calibration: CalibrationState::idle(),
            duration: Duration::from_millis(CALIBRATION_DURATION_MS),
            timer: None,
        }
    }

    /// Override the calibration duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn calibration(&self) -> &CalibrationState {
        &self.calibration
    }

    pub fn is_calibrating(&self) -> bool {
        self.calibration.active
    }

    /// Rendering hint: spin the dial while calibrating
    pub fn dial_spinning(&self) -> bool {
        self.calibration.active
    }

    /// Enter calibration and arm the expiry timer. A request while one is
    /// already running is a no-op; the timer is not re-armed.
    pub fn begin_calibration(&mut self, scheduler: &mut TaskScheduler) {
        if self.calibration.active {
            return;
        }

        self.calibration = CalibrationState {
            active: true,
            started_at: Some(scheduler.now()),
        };
        self.timer = Some(scheduler.schedule(self.duration));
    }

    /// Timer dispatch from the event loop. Returns whether the handle was
    /// this controller's calibration timer.
    pub fn handle_timer(&mut self, handle: TimerHandle) -> bool {
        if self.timer != Some(handle) {
            return false;
        }

        self.timer = None;
        self.calibration = CalibrationState::idle();
        true
    }

    /// Cancel a pending calibration timer and drop back to idle
    pub fn teardown(&mut self, scheduler: &mut TaskScheduler) {
        if let Some(handle) = self.timer.take() {
            scheduler.cancel(handle);
        }
        self.calibration = CalibrationState::idle();
    }
}

impl Default for NeedleController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::ManualClock;

    fn simulated_scheduler() -> (ManualClock, TaskScheduler) {
        let clock = ManualClock::new();
        let scheduler = TaskScheduler::with_clock(Box::new(clock.clone()));
        (clock, scheduler)
    }

    fn tick(controller: &mut NeedleController, scheduler: &mut TaskScheduler) {
        for handle in scheduler.run_due() {
            controller.handle_timer(handle);
        }
    }

    #[test]
    fn test_rotation_with_bearing_and_heading() {
        assert_eq!(needle_rotation(Some(90.0), Some(45.0)), Some(45.0));
    }

    #[test]
    fn test_rotation_wraps_around_north() {
        assert_eq!(needle_rotation(Some(10.0), Some(350.0)), Some(20.0));
        assert_eq!(needle_rotation(Some(350.0), Some(10.0)), Some(340.0));
    }

    #[test]
    fn test_rotation_without_heading_is_bearing() {
        assert_eq!(needle_rotation(Some(118.5), None), Some(118.5));
    }

    #[test]
    fn test_rotation_without_bearing_is_undefined() {
        assert_eq!(needle_rotation(None, Some(45.0)), None);
        assert_eq!(needle_rotation(None, None), None);
    }

    #[test]
    fn test_calibration_activates_on_request() {
        let (_clock, mut scheduler) = simulated_scheduler();
        let mut controller = NeedleController::new();

        assert!(!controller.is_calibrating());
        controller.begin_calibration(&mut scheduler);

        assert!(controller.is_calibrating());
        assert!(controller.dial_spinning());
        assert!(controller.calibration().started_at.is_some());
        assert_eq!(scheduler.pending_count(), 1);
    }

    #[test]
    fn test_calibration_expires_after_three_seconds() {
        let (clock, mut scheduler) = simulated_scheduler();
        let mut controller = NeedleController::new();

        controller.begin_calibration(&mut scheduler);

        clock.advance(Duration::from_millis(2999));
        tick(&mut controller, &mut scheduler);
        assert!(controller.is_calibrating());

        clock.advance(Duration::from_millis(1));
        tick(&mut controller, &mut scheduler);
        assert!(!controller.is_calibrating());
        assert!(controller.calibration().started_at.is_none());
    }

    #[test]
    fn test_reentrant_request_does_not_rearm_timer() {
        let (clock, mut scheduler) = simulated_scheduler();
        let mut controller = NeedleController::new();

        controller.begin_calibration(&mut scheduler);
        clock.advance(Duration::from_millis(2000));
        controller.begin_calibration(&mut scheduler);

        assert_eq!(scheduler.pending_count(), 1);

        // The original timer still fires 3s after the first request
        clock.advance(Duration::from_millis(1000));
        tick(&mut controller, &mut scheduler);
        assert!(!controller.is_calibrating());
    }

    #[test]
    fn test_teardown_cancels_pending_timer() {
        let (clock, mut scheduler) = simulated_scheduler();
        let mut controller = NeedleController::new();

        controller.begin_calibration(&mut scheduler);
        controller.teardown(&mut scheduler);

        assert!(!controller.is_calibrating());
        assert_eq!(scheduler.pending_count(), 0);

        clock.advance(Duration::from_secs(5));
        assert!(scheduler.run_due().is_empty());
    }

    #[test]
    fn test_foreign_timer_is_ignored() {
        let (clock, mut scheduler) = simulated_scheduler();
        let mut controller = NeedleController::new();

        let foreign = scheduler.schedule(Duration::from_millis(10));
        controller.begin_calibration(&mut scheduler);

        clock.advance(Duration::from_millis(10));
        assert!(!controller.handle_timer(foreign));
        assert!(controller.is_calibrating());
    }

    #[test]
    fn test_custom_duration() {
        let (clock, mut scheduler) = simulated_scheduler();
        let mut controller = NeedleController::new().with_duration(Duration::from_millis(100));

        controller.begin_calibration(&mut scheduler);
        clock.advance(Duration::from_millis(100));
        tick(&mut controller, &mut scheduler);

        assert!(!controller.is_calibrating());
    }
}
