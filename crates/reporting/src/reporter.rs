//! Report sinks.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use thiserror::Error;

use crate::report::Report;

/// Failure of the output collaborator.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The sink cannot accept reports right now (closed, misconfigured, ...).
    #[error("reporter unavailable: {0}")]
    Unavailable(String),
}

/// Receives reports from order processing.
///
/// Takes `&self` so one sink can be shared (via `Rc`) by the processor and the
/// notification service. Implementations use interior mutability where they
/// keep state.
pub trait Reporter {
    fn report(&self, report: &Report) -> Result<(), ReportError>;
}

impl<R> Reporter for Rc<R>
where
    R: Reporter + ?Sized,
{
    fn report(&self, report: &Report) -> Result<(), ReportError> {
        (**self).report(report)
    }
}

/// Writes each report as one human-readable line.
#[derive(Debug)]
pub struct TextReporter<W: Write> {
    out: RefCell<W>,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl TextReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn report(&self, report: &Report) -> Result<(), ReportError> {
        let mut out = self.out.borrow_mut();
        writeln!(out, "{report}")?;
        out.flush()?;
        Ok(())
    }
}

/// Writes each report as one JSON object per line.
#[derive(Debug)]
pub struct JsonLinesReporter<W: Write> {
    out: RefCell<W>,
}

impl<W: Write> JsonLinesReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl JsonLinesReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Reporter for JsonLinesReporter<W> {
    fn report(&self, report: &Report) -> Result<(), ReportError> {
        let line = serde_json::to_string(report)?;
        let mut out = self.out.borrow_mut();
        writeln!(out, "{line}")?;
        out.flush()?;
        Ok(())
    }
}

/// Emits each report as a `tracing` event at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, report: &Report) -> Result<(), ReportError> {
        tracing::info!(kind = report.kind(), report = %report, "report");
        Ok(())
    }
}

/// Collects reports in memory, in arrival order.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    reports: RefCell<Vec<Report>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<Report> {
        self.reports.borrow().clone()
    }

    /// Reports rendered as text lines.
    pub fn lines(&self) -> Vec<String> {
        self.reports.borrow().iter().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.reports.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.borrow().is_empty()
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, report: &Report) -> Result<(), ReportError> {
        self.reports.borrow_mut().push(report.clone());
        Ok(())
    }
}
