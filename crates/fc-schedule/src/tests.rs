//! Unit tests for fc-schedule.

use std::io::Cursor;

use fc_core::ClockTime;

use crate::{load_schedule_reader, Phase, Schedule, ScheduleEntry};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn t(s: &str) -> ClockTime {
    s.parse().unwrap()
}

fn entry(phase: Phase, start: &str, end: &str) -> ScheduleEntry {
    ScheduleEntry::new(phase, t(start), t(end))
}

// ── ScheduleEntry ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod entry_tests {
    use super::*;

    #[test]
    fn half_open_interval() {
        let e = entry(Phase::Work, "08:15", "11:30");
        assert!(!e.contains(t("08:14")));
        assert!(e.contains(t("08:15")));
        assert!(e.contains(t("11:29")));
        assert!(!e.contains(t("11:30")));
        assert_eq!(e.duration_minutes(), 195);
    }

    #[test]
    fn wrapping_interval() {
        let e = entry(Phase::Break, "23:30", "00:15");
        assert!(e.wraps());
        assert!(e.contains(t("23:30")));
        assert!(e.contains(t("23:59")));
        assert!(e.contains(t("00:00")));
        assert!(e.contains(t("00:14")));
        assert!(!e.contains(t("00:15")));
        assert!(!e.contains(t("12:00")));
        assert_eq!(e.duration_minutes(), 45);
    }

    #[test]
    fn equal_bounds_cover_nothing() {
        let e = entry(Phase::Work, "08:00", "08:00");
        assert!(!e.wraps());
        assert!(!e.contains(t("08:00")));
        assert!(!e.contains(t("03:00")));
        assert!(!e.contains(t("23:59")));
        assert_eq!(e.duration_minutes(), 0);
    }
}

// ── Schedule ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod schedule_tests {
    use super::*;

    #[test]
    fn default_daily_has_thirteen_entries() {
        let s = Schedule::default_daily();
        assert_eq!(s.len(), 13);
        assert_eq!(s.entries()[0], entry(Phase::Break, "00:00", "00:15"));
        assert_eq!(s.entries()[12], entry(Phase::Break, "23:30", "00:00"));
    }

    #[test]
    fn default_daily_resolution() {
        let s = Schedule::default_daily();
        assert_eq!(s.resolve(t("00:00")), Phase::Break);
        assert_eq!(s.resolve(t("00:15")), Phase::Work);
        assert_eq!(s.resolve(t("03:19")), Phase::Work);
        assert_eq!(s.resolve(t("03:20")), Phase::Break);
        assert_eq!(s.resolve(t("12:19")), Phase::Break);
        assert_eq!(s.resolve(t("12:20")), Phase::Work);
        assert_eq!(s.resolve(t("23:29")), Phase::Work);
        assert_eq!(s.resolve(t("23:45")), Phase::Break);
    }

    #[test]
    fn default_daily_work_minutes() {
        // 185 + 190 + 195 + 200 + 195 + 180
        let s = Schedule::default_daily();
        assert_eq!(s.minutes_in(Phase::Work), 1_145);
        assert_eq!(s.minutes_in(Phase::Break), 1_440 - 1_145);
    }

    #[test]
    fn gap_falls_back_to_break() {
        let s = Schedule::new(vec![entry(Phase::Work, "08:00", "12:00")]);
        assert_eq!(s.resolve(t("07:59")), Phase::Break);
        assert_eq!(s.resolve(t("09:00")), Phase::Work);
        assert_eq!(s.resolve(t("12:00")), Phase::Break);
    }

    #[test]
    fn empty_schedule_is_all_break() {
        let s = Schedule::new(vec![]);
        assert!(s.is_empty());
        assert_eq!(s.minutes_in(Phase::Break), 1_440);
    }

    #[test]
    fn first_match_wins_on_overlap() {
        let s = Schedule::new(vec![
            entry(Phase::Break, "10:00", "11:00"),
            entry(Phase::Work, "08:00", "18:00"),
        ]);
        assert_eq!(s.resolve(t("10:30")), Phase::Break);
        assert_eq!(s.resolve(t("11:00")), Phase::Work);
    }

    #[test]
    fn constant_schedule_covers_whole_day() {
        let s = Schedule::constant(Phase::Work);
        assert_eq!(s.minutes_in(Phase::Work), 1_440);
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader_tests {
    use super::*;

    #[test]
    fn loads_entries_in_order() {
        let csv = "phase,start,end\nbreak,00:00,06:00\nWork, 06:00 ,18:00\nBreak,18:00,24:00\n";
        let s = load_schedule_reader(Cursor::new(csv)).unwrap();
        assert_eq!(s.len(), 3);
        assert_eq!(s.entries()[1], entry(Phase::Work, "06:00", "18:00"));
        assert_eq!(s.resolve(t("23:59")), Phase::Break);
    }

    #[test]
    fn zero_length_row_leaves_day_on_break() {
        let csv = "phase,start,end\nWork,08:00,08:00\n";
        let s = load_schedule_reader(Cursor::new(csv)).unwrap();
        assert_eq!(s.len(), 1);
        assert_eq!(s.resolve(t("03:00")), Phase::Break);
        assert_eq!(s.resolve(t("08:00")), Phase::Break);
        assert_eq!(s.minutes_in(Phase::Work), 0);
        assert_eq!(s.minutes_in(Phase::Break), 1_440);
    }

    #[test]
    fn invalid_phase_is_parse_error() {
        let csv = "phase,start,end\nLunch,00:00,01:00\n";
        let err = load_schedule_reader(Cursor::new(csv)).unwrap_err();
        assert!(err.to_string().contains("row 1"), "{err}");
    }

    #[test]
    fn invalid_time_is_parse_error() {
        let csv = "phase,start,end\nWork,00:00,25:00\n";
        assert!(load_schedule_reader(Cursor::new(csv)).is_err());
    }

    #[test]
    fn empty_file_rejected() {
        let csv = "phase,start,end\n";
        assert!(load_schedule_reader(Cursor::new(csv)).is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = crate::load_schedule_csv(std::path::Path::new("/nonexistent/schedule.csv"))
            .unwrap_err();
        assert!(matches!(err, crate::ScheduleError::Io(_)));
    }
}
