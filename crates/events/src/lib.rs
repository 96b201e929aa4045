//! Status-change notification mechanics.
//!
//! Subscribers are plain callbacks delivered to synchronously, in-process, in
//! registration order. There is no queue and no transport.

pub mod observer;

pub use observer::{ObserverList, SubscriptionId};
