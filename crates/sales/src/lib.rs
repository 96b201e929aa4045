//! Sales orders domain module.
//!
//! An [`Order`] aggregates products into a total cost and exposes a
//! status-change notification point; the [`OrderProcessor`] reports the total
//! and announces the processed status.

pub mod order;
pub mod processor;

pub use order::Order;
pub use processor::{DEFAULT_PROCESSED_STATUS, OrderProcessor};
