//! Order processing: report the total, then announce the processed status.

use std::rc::Rc;

use orderflow_reporting::{Report, ReportError, Reporter};

use crate::order::Order;

/// Status text announced after an order is processed, unless configured otherwise.
pub const DEFAULT_PROCESSED_STATUS: &str = "order processed";

/// Reports an order's total and triggers its status change.
pub struct OrderProcessor {
    reporter: Rc<dyn Reporter>,
    processed_status: String,
}

impl OrderProcessor {
    pub fn new(reporter: Rc<dyn Reporter>) -> Self {
        Self {
            reporter,
            processed_status: DEFAULT_PROCESSED_STATUS.to_string(),
        }
    }

    /// Override the status text announced by [`OrderProcessor::process_order`].
    pub fn with_processed_status(mut self, status: impl Into<String>) -> Self {
        self.processed_status = status.into();
        self
    }

    pub fn processed_status(&self) -> &str {
        &self.processed_status
    }

    /// Report the order total, then call `order.change_status` with the
    /// processed status.
    ///
    /// The order's products are only read. If the reporter fails, the error is
    /// returned and no status change is announced.
    pub fn process_order(&self, order: &Order) -> Result<(), ReportError> {
        let span = tracing::info_span!("process_order", order_number = %order.order_number());
        let _guard = span.enter();

        let total_cost = order.total_cost();
        tracing::info!(products = order.len(), %total_cost, "processing order");

        self.reporter
            .report(&Report::order_total(order.order_number(), total_cost))
            .inspect_err(|err| tracing::error!(error = %err, "failed to report order total"))?;

        let delivered = order.change_status(&self.processed_status);
        tracing::info!(status = %self.processed_status, delivered, "order processed");
        Ok(())
    }
}

impl core::fmt::Debug for OrderProcessor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OrderProcessor")
            .field("processed_status", &self.processed_status)
            .finish_non_exhaustive()
    }
}
