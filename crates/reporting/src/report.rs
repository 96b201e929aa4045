use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use orderflow_core::OrderNumber;

/// A message emitted by order processing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    /// Emitted by the order processor before the status change.
    OrderTotal {
        order_number: OrderNumber,
        total_cost: Decimal,
    },
    /// Emitted by the notification service for each status change it observes.
    Notification { status: String },
}

impl Report {
    pub fn order_total(order_number: OrderNumber, total_cost: Decimal) -> Self {
        Self::OrderTotal {
            order_number,
            total_cost,
        }
    }

    pub fn notification(status: impl Into<String>) -> Self {
        Self::Notification {
            status: status.into(),
        }
    }

    /// Short machine-readable name (used as a log field).
    pub fn kind(&self) -> &'static str {
        match self {
            Report::OrderTotal { .. } => "order_total",
            Report::Notification { .. } => "notification",
        }
    }
}

impl core::fmt::Display for Report {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Report::OrderTotal {
                order_number,
                total_cost,
            } => write!(f, "order #{order_number}, total cost = {total_cost:.2}"),
            Report::Notification { status } => write!(f, "notification: {status}"),
        }
    }
}
