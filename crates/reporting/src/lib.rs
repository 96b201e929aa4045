//! Output collaborator for order processing.
//!
//! The domain never writes to a terminal directly; it hands [`Report`]s to a
//! [`Reporter`], and the sink decides where they go.

pub mod report;
pub mod reporter;

pub use report::Report;
pub use reporter::{
    JsonLinesReporter, MemoryReporter, ReportError, Reporter, TextReporter, TracingReporter,
};
