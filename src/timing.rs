//! Timer scheduling for the event loop
//!
//! One-shot cancellable timers over an injectable clock. Production code
//! uses the monotonic system clock; tests drive a manually advanced clock
//! to simulate elapsed time. `run_due` is called once per event-loop turn
//! and hands back the handles whose deadline has passed.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of the current instant
pub trait Clock {
    fn now(&self) -> Instant;
}

/// The system's monotonic clock
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually advanced clock for simulated time in tests.
///
/// Clones share the same offset, so a test can keep one handle while the
/// scheduler owns another.
#[derive(Clone)]
pub struct ManualClock {
    epoch: Instant,
    offset: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
            offset: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    /// Move the clock forward
    pub fn advance(&self, delta: Duration) {
        self.offset.set(self.offset.get() + delta);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.epoch + self.offset.get()
    }
}

/// Handle identifying a scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u32);

impl TimerHandle {
    pub fn id(&self) -> u32 {
        self.0
    }
}

/// One-shot timer scheduler driven by the event loop
pub struct TaskScheduler {
    clock: Box<dyn Clock>,
    timer_counter: u32,
    pending: Vec<(TimerHandle, Instant)>,
}

impl TaskScheduler {
    pub fn new() -> Self {
        Self::with_clock(Box::new(MonotonicClock))
    }

    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            clock,
            timer_counter: 0,
            pending: Vec::new(),
        }
    }

    /// The scheduler's current instant
    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Arm a one-shot timer firing after `delay`
    pub fn schedule(&mut self, delay: Duration) -> TimerHandle {
        self.timer_counter += 1;
        let handle = TimerHandle(self.timer_counter);
        self.pending.push((handle, self.clock.now() + delay));
        handle
    }

    /// Disarm a timer before it fires. Returns whether it was pending.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|(pending, _)| *pending != handle);
        self.pending.len() != before
    }

    /// Pop every timer whose deadline has passed, in deadline order
    pub fn run_due(&mut self) -> Vec<TimerHandle> {
        let now = self.clock.now();

        let mut due: Vec<(TimerHandle, Instant)> = Vec::new();
        self.pending.retain(|entry| {
            if entry.1 <= now {
                due.push(*entry);
                false
            } else {
                true
            }
        });

        due.sort_by_key(|(_, deadline)| *deadline);
        due.into_iter().map(|(handle, _)| handle).collect()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

impl Default for TaskScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_fires_after_deadline() {
        let clock = ManualClock::new();
        let mut scheduler = TaskScheduler::with_clock(Box::new(clock.clone()));

        let handle = scheduler.schedule(Duration::from_millis(500));
        assert!(scheduler.run_due().is_empty());

        clock.advance(Duration::from_millis(499));
        assert!(scheduler.run_due().is_empty());

        clock.advance(Duration::from_millis(1));
        assert_eq!(scheduler.run_due(), vec![handle]);

        // A one-shot timer fires exactly once
        assert!(scheduler.run_due().is_empty());
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn test_timers_fire_in_deadline_order() {
        let clock = ManualClock::new();
        let mut scheduler = TaskScheduler::with_clock(Box::new(clock.clone()));

        let late = scheduler.schedule(Duration::from_millis(300));
        let early = scheduler.schedule(Duration::from_millis(100));

        clock.advance(Duration::from_millis(300));
        assert_eq!(scheduler.run_due(), vec![early, late]);
    }

    #[test]
    fn test_cancelled_timer_never_fires() {
        let clock = ManualClock::new();
        let mut scheduler = TaskScheduler::with_clock(Box::new(clock.clone()));

        let handle = scheduler.schedule(Duration::from_millis(100));
        assert!(scheduler.cancel(handle));
        assert!(!scheduler.cancel(handle));

        clock.advance(Duration::from_millis(200));
        assert!(scheduler.run_due().is_empty());
    }

    #[test]
    fn test_manual_clock_advances() {
        let clock = ManualClock::new();
        let start = clock.now();

        clock.advance(Duration::from_secs(3));
        assert_eq!(clock.now() - start, Duration::from_secs(3));
    }
}
