//! The `ReportWriter` trait implemented by all report backends.

use fc_sim::EquilibriumResult;

use crate::OutputResult;

/// Trait implemented by the CSV and JSON writers.
pub trait ReportWriter {
    /// Write the report for the search's best day.
    fn write_report(&mut self, result: &EquilibriumResult) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
