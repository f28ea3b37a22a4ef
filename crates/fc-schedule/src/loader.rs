//! CSV schedule loader.
//!
//! # CSV format
//!
//! One row per phase interval, in priority order.
//!
//! ```csv
//! phase,start,end
//! Break,00:00,00:15
//! Work,00:15,03:20
//! Break,23:30,00:00
//! ```
//!
//! `phase` is `Work` or `Break` (case-insensitive); `start`/`end` are
//! `HH:MM` and `end` may be `24:00`.  An `end` before `start` wraps past
//! midnight; an `end` equal to `start` gives an empty entry.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use fc_core::ClockTime;

use crate::phase::{Phase, Schedule, ScheduleEntry};
use crate::ScheduleError;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ScheduleRecord {
    phase: String,
    start: String,
    end:   String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`Schedule`] from a CSV file.
pub fn load_schedule_csv(path: &Path) -> Result<Schedule, ScheduleError> {
    let file = std::fs::File::open(path)
        .map_err(ScheduleError::Io)?;
    load_schedule_reader(file)
}

/// Like [`load_schedule_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded schedules.
pub fn load_schedule_reader<R: Read>(reader: R) -> Result<Schedule, ScheduleError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut entries = Vec::new();
    for (line, result) in csv_reader.deserialize::<ScheduleRecord>().enumerate() {
        let row = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;
        entries.push(parse_entry(&row).map_err(|e| {
            ScheduleError::Parse(format!("row {}: {e}", line + 1))
        })?);
    }

    if entries.is_empty() {
        return Err(ScheduleError::Parse("schedule contains no entries".into()));
    }
    Ok(Schedule::new(entries))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_entry(row: &ScheduleRecord) -> Result<ScheduleEntry, ScheduleError> {
    let phase: Phase = row.phase.parse()?;
    let start: ClockTime = row.start.parse()?;
    let end: ClockTime = row.end.parse()?;
    if start == ClockTime::END_OF_DAY {
        return Err(ScheduleError::Parse("start may not be 24:00".into()));
    }
    Ok(ScheduleEntry::new(phase, start, end))
}
