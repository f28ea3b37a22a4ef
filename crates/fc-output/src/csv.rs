//! CSV report backend.
//!
//! Creates two files in the configured output directory:
//! - `truck_charging_simulation.csv`: one row per minute of the best day,
//!   then a blank row and per-status hour totals.
//! - `truck_charging_load_profile.csv`: one row per hour, then a blank row
//!   and the day's total energy.

use std::fs::File;
use std::path::Path;

use csv::Writer;
use fc_core::{TruckStatus, HOURS_PER_DAY};
use fc_sim::EquilibriumResult;

use crate::row::{decimal, load_profile_row, status_total_row, trace_header, trace_row};
use crate::writer::ReportWriter;
use crate::{OutputError, OutputResult};

pub const TRACE_FILE: &str = "truck_charging_simulation.csv";
pub const LOAD_PROFILE_FILE: &str = "truck_charging_load_profile.csv";

/// Writes the best day's minute trace and load profile to two CSV files.
pub struct CsvReportWriter {
    trace:       Writer<File>,
    load:        Writer<File>,
    truck_count: usize,
    finished:    bool,
}

impl CsvReportWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path, truck_count: usize) -> OutputResult<Self> {
        let mut trace = Writer::from_path(dir.join(TRACE_FILE))?;
        trace.write_record(trace_header(truck_count))?;

        let mut load = Writer::from_path(dir.join(LOAD_PROFILE_FILE))?;
        load.write_record(["hour", "peak_power", "total_energy"])?;

        Ok(Self { trace, load, truck_count, finished: false })
    }
}

impl ReportWriter for CsvReportWriter {
    fn write_report(&mut self, result: &EquilibriumResult) -> OutputResult<()> {
        let day = &result.day;
        if day.truck_count() != self.truck_count {
            return Err(OutputError::TruckCountMismatch {
                expected: self.truck_count,
                got:      day.truck_count(),
            });
        }

        for record in &day.records {
            self.trace.write_record(trace_row(record))?;
        }
        let width = trace_header(self.truck_count).len();
        self.trace.write_record(vec![""; width])?;
        let mut title = vec![""; width];
        title[0] = "Total Times";
        self.trace.write_record(title)?;
        for status in TruckStatus::ALL {
            self.trace.write_record(status_total_row(&day.counters, status))?;
        }

        for hour in 0..HOURS_PER_DAY {
            self.load.write_record(load_profile_row(hour, day.load_profile.hour(hour)))?;
        }
        self.load.write_record(["", "", ""])?;
        let total = decimal(day.total_energy());
        self.load.write_record(["Total Energy", "", total.as_str()])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trace.flush()?;
        self.load.flush()?;
        Ok(())
    }
}
