//! Integration tests for fc-output.

use fc_core::SimulationConfig;
use fc_schedule::Schedule;
use fc_sim::{EquilibriumResult, EquilibriumSearch};

fn small_result(trucks: usize) -> EquilibriumResult {
    let mut config = SimulationConfig::new(trucks, 300.0, 90.0, 1, 1);
    config.search_days = 2;
    EquilibriumSearch::new(&config, &Schedule::default_daily())
        .run()
        .unwrap()
}

#[cfg(test)]
mod row_tests {
    use fc_core::{ChargerId, ClockTime, SlotId, TruckStatus};
    use fc_schedule::Phase;
    use fc_sim::{MinuteRecord, TruckMinute};

    use crate::row::{decimal, percent, trace_header, trace_row};

    #[test]
    fn numbers_round_to_two_decimals() {
        assert_eq!(decimal(15.0), "15.00");
        assert_eq!(decimal(3.333_333), "3.33");
        assert_eq!(percent(54.6), "55%");
        assert_eq!(percent(100.0), "100%");
    }

    #[test]
    fn header_has_seven_columns_per_truck() {
        let header = trace_header(2);
        assert_eq!(header.len(), 3 + 7 * 2);
        assert_eq!(header[..4], ["minute", "schedule", "total_power_given", "truck1_status"]);
        assert_eq!(header[16], "truck2_assigned_gun");
    }

    #[test]
    fn trace_row_formats_every_field() {
        let record = MinuteRecord {
            time:            ClockTime::from_hm(8, 5).unwrap(),
            phase:           Phase::Break,
            trucks:          vec![
                TruckMinute {
                    status:          TruckStatus::Charging,
                    battery_start:   40.0,
                    battery_end:     50.0,
                    requested_power: 10.0,
                    delivered_power: 10.0,
                    state_of_charge: 50.0,
                    slot:            Some(SlotId::new(ChargerId(1), 0)),
                },
                TruckMinute {
                    status:          TruckStatus::Waiting,
                    battery_start:   12.5,
                    battery_end:     12.5,
                    requested_power: 0.0,
                    delivered_power: 0.0,
                    state_of_charge: 12.5,
                    slot:            None,
                },
            ],
            total_delivered: 10.0,
        };
        let row = trace_row(&record);
        assert_eq!(row.len(), 17);
        assert_eq!(row[..3], ["08:05", "Break", "10.00"]);
        assert_eq!(row[3..10], ["Charging", "40.00", "50.00", "10.00", "10.00", "50%", "C2-G1"]);
        assert_eq!(row[10], "Waiting");
        assert_eq!(row[15], "13%");
        assert_eq!(row[16], "");
    }
}

#[cfg(test)]
mod csv_tests {
    use fc_core::{TruckId, TruckStatus};
    use tempfile::TempDir;

    use super::small_result;
    use crate::csv::{CsvReportWriter, LOAD_PROFILE_FILE, TRACE_FILE};
    use crate::writer::ReportWriter;
    use crate::OutputError;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvReportWriter::new(dir.path(), 2).unwrap();
        assert!(dir.path().join(TRACE_FILE).exists());
        assert!(dir.path().join(LOAD_PROFILE_FILE).exists());
    }

    #[test]
    fn trace_has_minutes_then_status_totals() {
        let dir = tmp();
        let result = small_result(2);
        let mut w = CsvReportWriter::new(dir.path(), 2).unwrap();
        w.write_report(&result).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(TRACE_FILE)).unwrap();
        assert_eq!(rdr.headers().unwrap().len(), 17);
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1440 + 2 + 4);

        assert_eq!(&rows[0][0], "00:00");
        assert_eq!(&rows[0][1], "Break");
        assert_eq!(&rows[1439][0], "23:59");
        assert!(rows[1440].iter().all(str::is_empty));
        assert_eq!(&rows[1441][0], "Total Times");

        for (offset, status) in TruckStatus::ALL.into_iter().enumerate() {
            let row = &rows[1442 + offset];
            assert_eq!(&row[0], status.as_str());
            for truck in 0..2u32 {
                let hours: f64 = row[3 + 7 * truck as usize].parse().unwrap();
                let expected = result.day.counters.hours(TruckId(truck), status);
                assert!((hours - expected).abs() <= 0.005);
            }
        }
    }

    #[test]
    fn load_profile_has_24_hours_and_total() {
        let dir = tmp();
        let result = small_result(2);
        let mut w = CsvReportWriter::new(dir.path(), 2).unwrap();
        w.write_report(&result).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(LOAD_PROFILE_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["hour", "peak_power", "total_energy"]);

        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 24 + 2);
        assert_eq!(&rows[0][0], "00");
        assert_eq!(&rows[23][0], "23");
        assert_eq!(&rows[25][0], "Total Energy");
        assert_eq!(&rows[25][1], "");
        let total: f64 = rows[25][2].parse().unwrap();
        assert!((total - result.day.total_energy()).abs() <= 0.005);
    }

    #[test]
    fn truck_count_mismatch_is_rejected() {
        let dir = tmp();
        let mut w = CsvReportWriter::new(dir.path(), 3).unwrap();
        let err = w.write_report(&small_result(2)).unwrap_err();
        assert!(matches!(err, OutputError::TruckCountMismatch { expected: 3, got: 2 }));
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvReportWriter::new(dir.path(), 1).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod json_tests {
    use tempfile::TempDir;

    use super::small_result;
    use crate::json::{JsonSummaryWriter, RunSummary, SUMMARY_FILE};
    use crate::writer::ReportWriter;

    #[test]
    fn summary_digests_best_day() {
        let result = small_result(3);
        let summary = RunSummary::from_result(&result);

        assert_eq!(summary.best_day, result.best_day);
        assert_eq!(summary.days_searched, 2);
        assert_eq!(summary.status_minutes.len(), 3);
        assert_eq!(summary.status_minutes[0].truck, "truck1");
        for m in &summary.status_minutes {
            assert_eq!(m.running + m.charging + m.waiting + m.idle, 1440);
        }
        assert_eq!(summary.load_profile.len(), 24);
        assert_eq!(summary.total_energy, result.day.total_energy());
    }

    #[test]
    fn summary_file_is_valid_json() {
        let dir: TempDir = tempfile::tempdir().expect("create temp dir");
        let result = small_result(2);
        let mut w = JsonSummaryWriter::new(dir.path()).unwrap();
        assert_eq!(w.path(), dir.path().join(SUMMARY_FILE));
        w.write_report(&result).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();

        let text = std::fs::read_to_string(dir.path().join(SUMMARY_FILE)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["best_day"], result.best_day);
        assert_eq!(value["status_minutes"].as_array().unwrap().len(), 2);
        assert_eq!(value["load_profile"].as_array().unwrap().len(), 24);
        assert_eq!(value["drifts"].as_array().unwrap().len(), 2);
    }
}
