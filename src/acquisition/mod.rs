//! Location and orientation acquisition
//!
//! Merges the asynchronous location and heading sources into one coherent
//! state object, owning the permission flow and the error taxonomy.

pub mod notify;
pub mod service;
pub mod state;

pub use notify::{ConsoleNotifier, NotificationSink, NullNotifier, RecordingNotifier};
pub use service::AcquisitionService;
pub use state::{AcquisitionError, AcquisitionState};
