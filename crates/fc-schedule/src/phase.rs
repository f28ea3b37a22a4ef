//! Core schedule types: `Phase`, `ScheduleEntry`, and `Schedule`.
//!
//! # Interval model
//!
//! Each entry covers the half-open wall-clock interval `[start, end)`.  An
//! entry whose `end < start` wraps past midnight and covers
//! `[start, 24:00) ∪ [00:00, end)`.  `start == end` is empty.  Entries are kept in the order given and
//! the first match wins, so overlapping entries resolve to the earlier one.

use std::fmt;
use std::str::FromStr;

use fc_core::ClockTime;

use crate::ScheduleError;

// ── Phase ─────────────────────────────────────────────────────────────────────

/// Operating mode of the whole fleet during an interval.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Trucks run their routes; only critically low trucks charge.
    Work,
    /// Trucks are parked; anything below full may charge.
    #[default]
    Break,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Work  => "Work",
            Phase::Break => "Break",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Phase {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "work"  => Ok(Phase::Work),
            "break" => Ok(Phase::Break),
            other   => Err(ScheduleError::Parse(format!(
                "invalid phase {other:?}: expected \"Work\" or \"Break\""
            ))),
        }
    }
}

// ── ScheduleEntry ─────────────────────────────────────────────────────────────

/// One phase interval of the daily schedule.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleEntry {
    pub phase: Phase,
    pub start: ClockTime,
    /// Exclusive.  `end < start` wraps past midnight; `end == start` is empty.
    pub end:   ClockTime,
}

impl ScheduleEntry {
    pub fn new(phase: Phase, start: ClockTime, end: ClockTime) -> Self {
        Self { phase, start, end }
    }

    /// `true` if this entry spills over midnight.
    #[inline]
    pub fn wraps(&self) -> bool {
        self.end < self.start
    }

    /// Half-open containment test.
    #[inline]
    pub fn contains(&self, t: ClockTime) -> bool {
        if self.wraps() {
            t >= self.start || t < self.end
        } else {
            self.start <= t && t < self.end
        }
    }

    /// Interval length in minutes.
    pub fn duration_minutes(&self) -> u16 {
        if self.wraps() {
            ClockTime::END_OF_DAY.0 - self.start.0 + self.end.0
        } else {
            self.end.0 - self.start.0
        }
    }
}

// ── Schedule ──────────────────────────────────────────────────────────────────

/// An ordered list of phase intervals for one operating day.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedule {
    entries: Vec<ScheduleEntry>,
}

impl Schedule {
    /// Build a schedule from entries in priority order.
    pub fn new(entries: Vec<ScheduleEntry>) -> Self {
        Self { entries }
    }

    /// The depot's standard day: six work shifts separated by breaks.
    pub fn default_daily() -> Self {
        const DAY: [(Phase, u16, u16, u16, u16); 13] = [
            (Phase::Break,  0,  0,  0, 15),
            (Phase::Work,   0, 15,  3, 20),
            (Phase::Break,  3, 20,  4, 30),
            (Phase::Work,   4, 30,  7, 40),
            (Phase::Break,  7, 40,  8, 15),
            (Phase::Work,   8, 15, 11, 30),
            (Phase::Break, 11, 30, 12, 20),
            (Phase::Work,  12, 20, 15, 40),
            (Phase::Break, 15, 40, 16, 15),
            (Phase::Work,  16, 15, 19, 30),
            (Phase::Break, 19, 30, 20, 30),
            (Phase::Work,  20, 30, 23, 30),
            (Phase::Break, 23, 30,  0,  0),
        ];
        let entries = DAY
            .iter()
            .map(|&(phase, sh, sm, eh, em)| {
                ScheduleEntry::new(phase, ClockTime(sh * 60 + sm), ClockTime(eh * 60 + em))
            })
            .collect();
        Self { entries }
    }

    /// A schedule with a single phase covering the whole day.
    pub fn constant(phase: Phase) -> Self {
        Self::new(vec![ScheduleEntry::new(phase, ClockTime::MIDNIGHT, ClockTime::END_OF_DAY)])
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The phase active at `t`, or [`Phase::Break`] if no entry covers it.
    pub fn resolve(&self, t: ClockTime) -> Phase {
        self.entries
            .iter()
            .find(|e| e.contains(t))
            .map_or(Phase::Break, |e| e.phase)
    }

    /// Total minutes per day resolved to `phase` (gaps count as `Break`).
    pub fn minutes_in(&self, phase: Phase) -> usize {
        ClockTime::day_ticks().filter(|&t| self.resolve(t) == phase).count()
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self::default_daily()
    }
}
