//! JSON summary backend.
//!
//! Writes `summary.json`: the search outcome, per-truck status minutes and
//! the hourly load profile of the best day.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use fc_core::{TruckId, TruckStatus};
use fc_sim::EquilibriumResult;
use serde::Serialize;

use crate::writer::ReportWriter;
use crate::OutputResult;

pub const SUMMARY_FILE: &str = "summary.json";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TruckMinutes {
    pub truck:    String,
    pub running:  u32,
    pub charging: u32,
    pub waiting:  u32,
    pub idle:     u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HourSummary {
    pub hour:          usize,
    pub peak_power_kw: f64,
    pub total_energy:  f64,
}

/// Serializable digest of an [`EquilibriumResult`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunSummary {
    pub best_day:          usize,
    pub best_drift:        f64,
    pub days_searched:     usize,
    pub drifts:            Vec<f64>,
    pub total_energy:      f64,
    pub peak_power_kw:     f64,
    pub status_minutes:    Vec<TruckMinutes>,
    pub load_profile:      Vec<HourSummary>,
}

impl RunSummary {
    pub fn from_result(result: &EquilibriumResult) -> Self {
        let day = &result.day;
        let status_minutes = (0..day.truck_count() as u32)
            .map(TruckId)
            .map(|truck| TruckMinutes {
                truck:    truck.label(),
                running:  day.counters.minutes(truck, TruckStatus::Running),
                charging: day.counters.minutes(truck, TruckStatus::Charging),
                waiting:  day.counters.minutes(truck, TruckStatus::Waiting),
                idle:     day.counters.minutes(truck, TruckStatus::Idle),
            })
            .collect();
        let load_profile = day
            .load_profile
            .hours()
            .iter()
            .enumerate()
            .map(|(hour, load)| HourSummary {
                hour,
                peak_power_kw: load.peak_power_kw,
                total_energy:  load.total_energy,
            })
            .collect();

        Self {
            best_day:       result.best_day,
            best_drift:     result.best_drift,
            days_searched:  result.drifts.len(),
            drifts:         result.drifts.clone(),
            total_energy:   day.total_energy(),
            peak_power_kw:  day.load_profile.peak_power_kw(),
            status_minutes,
            load_profile,
        }
    }
}

/// Writes a pretty-printed [`RunSummary`] to `summary.json`.
pub struct JsonSummaryWriter {
    path: PathBuf,
    out:  Option<BufWriter<File>>,
}

impl JsonSummaryWriter {
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let path = dir.join(SUMMARY_FILE);
        let out = BufWriter::new(File::create(&path)?);
        Ok(Self { path, out: Some(out) })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportWriter for JsonSummaryWriter {
    fn write_report(&mut self, result: &EquilibriumResult) -> OutputResult<()> {
        if let Some(out) = self.out.as_mut() {
            serde_json::to_writer_pretty(&mut *out, &RunSummary::from_result(result))?;
            out.write_all(b"\n")?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if let Some(mut out) = self.out.take() {
            out.flush()?;
        }
        Ok(())
    }
}
