//! `fc-output` — report writers for the fleet charging simulator.
//!
//! Every writer consumes the [`EquilibriumResult`] of a finished search and
//! reports its best day:
//!
//! | Writer                | Files created                                                    |
//! |-----------------------|------------------------------------------------------------------|
//! | [`CsvReportWriter`]   | `truck_charging_simulation.csv`, `truck_charging_load_profile.csv` |
//! | [`JsonSummaryWriter`] | `summary.json`                                                   |
//!
//! Both implement [`ReportWriter`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use fc_output::{CsvReportWriter, ReportWriter};
//!
//! let result = EquilibriumSearch::new(&config, &schedule).run()?;
//! let mut writer = CsvReportWriter::new(Path::new("./output"), config.num_trucks)?;
//! writer.write_report(&result)?;
//! writer.finish()?;
//! ```
//!
//! [`EquilibriumResult`]: fc_sim::EquilibriumResult

pub mod csv;
pub mod error;
pub mod json;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::{CsvReportWriter, LOAD_PROFILE_FILE, TRACE_FILE};
pub use error::{OutputError, OutputResult};
pub use json::{JsonSummaryWriter, RunSummary, SUMMARY_FILE};
pub use writer::ReportWriter;
