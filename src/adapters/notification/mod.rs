//! Notification adapters.

mod log_notifier;

pub use log_notifier::LogNotificationService;
