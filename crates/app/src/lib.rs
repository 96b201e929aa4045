//! `orderflow` driver: wires products, an order, the processor and the
//! notification service to a report sink.

pub mod config;
pub mod demo;

use std::rc::Rc;

use anyhow::Context;

use orderflow_notifications::NotificationService;
use orderflow_reporting::{JsonLinesReporter, Reporter, TextReporter, TracingReporter};
use orderflow_sales::{Order, OrderProcessor};

pub use config::{AppConfig, ConfigError, OutputFormat};

/// Build the report sink selected by `output`.
pub fn reporter_for(output: OutputFormat) -> Rc<dyn Reporter> {
    match output {
        OutputFormat::Text => Rc::new(TextReporter::stdout()),
        OutputFormat::Json => Rc::new(JsonLinesReporter::stdout()),
        OutputFormat::Log => Rc::new(TracingReporter),
    }
}

/// Subscribe a notification service to `order` and process it.
pub fn process(config: &AppConfig, order: &mut Order, reporter: Rc<dyn Reporter>) -> anyhow::Result<()> {
    let notifications = NotificationService::new(Rc::clone(&reporter));
    notifications.subscribe_to(order);

    OrderProcessor::new(reporter)
        .with_processed_status(config.processed_status.clone())
        .process_order(order)
        .with_context(|| format!("failed to process order #{}", order.order_number()))
}

/// Build the sample order and process it.
pub fn run(config: &AppConfig, reporter: Rc<dyn Reporter>) -> anyhow::Result<()> {
    let mut order =
        demo::sample_order(config.order_number).context("failed to build sample order")?;
    tracing::info!(
        order_number = %order.order_number(),
        products = order.len(),
        "sample order built"
    );
    process(config, &mut order, reporter)
}
