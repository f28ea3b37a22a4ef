//! Cell formatting shared by the CSV report files.
//!
//! Numbers are rounded to two decimals; state of charge is a whole
//! percentage with a `%` suffix.

use fc_core::{TruckId, TruckStatus};
use fc_sim::{HourLoad, MinuteRecord, StatusCounters};

/// Columns per truck in the minute trace.
pub const TRUCK_COLUMNS: usize = 7;

/// Leading fleet-wide columns in the minute trace.
pub const LEAD_COLUMNS: usize = 3;

#[inline]
pub fn decimal(value: f64) -> String {
    format!("{value:.2}")
}

#[inline]
pub fn percent(value: f64) -> String {
    format!("{}%", value.round() as i64)
}

/// Header of the minute trace for `truck_count` trucks.
pub fn trace_header(truck_count: usize) -> Vec<String> {
    let mut header = vec!["minute".to_owned(), "schedule".to_owned(), "total_power_given".to_owned()];
    for truck in (0..truck_count as u32).map(TruckId) {
        let label = truck.label();
        header.extend(
            [
                "status",
                "battery_start",
                "battery_end",
                "charging_power_demand",
                "power_given",
                "state_of_charge",
                "assigned_gun",
            ]
            .map(|col| format!("{label}_{col}")),
        );
    }
    header
}

/// One minute of the trace.
pub fn trace_row(record: &MinuteRecord) -> Vec<String> {
    let mut row = Vec::with_capacity(LEAD_COLUMNS + TRUCK_COLUMNS * record.trucks.len());
    row.push(record.time.to_string());
    row.push(record.phase.as_str().to_owned());
    row.push(decimal(record.total_delivered));
    for m in &record.trucks {
        row.push(m.status.as_str().to_owned());
        row.push(decimal(m.battery_start));
        row.push(decimal(m.battery_end));
        row.push(decimal(m.requested_power));
        row.push(decimal(m.delivered_power));
        row.push(percent(m.state_of_charge));
        row.push(m.slot.map(|s| s.to_string()).unwrap_or_default());
    }
    row
}

/// `status` hours per truck, placed under each truck's status column.
pub fn status_total_row(counters: &StatusCounters, status: TruckStatus) -> Vec<String> {
    let trucks = counters.truck_count();
    let mut row = vec![String::new(); LEAD_COLUMNS + TRUCK_COLUMNS * trucks];
    row[0] = status.as_str().to_owned();
    for truck in (0..trucks as u32).map(TruckId) {
        row[LEAD_COLUMNS + TRUCK_COLUMNS * truck.index()] = decimal(counters.hours(truck, status));
    }
    row
}

pub fn load_profile_row(hour: usize, load: &HourLoad) -> [String; 3] {
    [format!("{hour:02}"), decimal(load.peak_power_kw), decimal(load.total_energy)]
}
