//! Weekly submission monitoring.

pub mod service;

pub use service::{MonitoringService, SubmissionStatus};
