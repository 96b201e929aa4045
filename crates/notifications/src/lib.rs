//! Notifications triggered by order status changes.

pub mod service;

pub use service::NotificationService;
