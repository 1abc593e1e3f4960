//! User-facing notification sink
//!
//! Fire-and-forget success/error messages. Purely informational; nothing
//! here affects acquisition correctness.

use std::cell::RefCell;
use std::rc::Rc;

/// Sink for transient user-visible messages
pub trait NotificationSink {
    fn success(&mut self, message: &str);
    fn error(&mut self, message: &str);
}

/// Sink that discards every message
pub struct NullNotifier;

impl NotificationSink for NullNotifier {
    fn success(&mut self, _message: &str) {}

    fn error(&mut self, _message: &str) {}
}

/// Sink that prints to the console, for the demo binary
pub struct ConsoleNotifier;

impl NotificationSink for ConsoleNotifier {
    fn success(&mut self, message: &str) {
        println!("{}", message);
    }

    fn error(&mut self, message: &str) {
        eprintln!("{}", message);
    }
}

#[derive(Default)]
struct NotificationLog {
    successes: Vec<String>,
    errors: Vec<String>,
}

/// Sink that records every message behind a cloneable handle, so a test
/// can keep one clone while the service owns another
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    log: Rc<RefCell<NotificationLog>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn successes(&self) -> Vec<String> {
        self.log.borrow().successes.clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.log.borrow().errors.clone()
    }
}

impl NotificationSink for RecordingNotifier {
    fn success(&mut self, message: &str) {
        self.log.borrow_mut().successes.push(message.to_string());
    }

    fn error(&mut self, message: &str) {
        self.log.borrow_mut().errors.push(message.to_string());
    }
}
