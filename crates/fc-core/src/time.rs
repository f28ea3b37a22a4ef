//! Time-of-day model.
//!
//! # Design
//!
//! The simulator advances in fixed one-minute ticks over a single operating
//! day.  A `ClockTime` is the number of minutes since midnight, so schedule
//! arithmetic is exact integer comparison (no string or float compares).
//!
//! Valid values are `0..=1440`.  `1440` is only meaningful as an exclusive
//! interval end (`24:00`); every simulated tick lies in `0..1440`.

use std::fmt;
use std::str::FromStr;

use crate::FcError;

/// Number of one-minute ticks in one simulated day.
pub const MINUTES_PER_DAY: u16 = 1_440;

/// Number of hourly buckets in a day (load profile length).
pub const HOURS_PER_DAY: usize = 24;

/// Minutes since midnight.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClockTime(pub u16);

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime(0);
    /// End-of-day sentinel, rendered as `24:00`.
    pub const END_OF_DAY: ClockTime = ClockTime(MINUTES_PER_DAY);

    /// Build from an hour and minute.  Returns `None` outside `00:00..=24:00`.
    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if minute >= 60 {
            return None;
        }
        let total = hour.checked_mul(60)?.checked_add(minute)?;
        (total <= MINUTES_PER_DAY).then_some(ClockTime(total))
    }

    /// Hour of day, `0..24` for tick times.
    #[inline]
    pub fn hour(self) -> usize {
        (self.0 / 60) as usize
    }

    #[inline]
    pub fn minute_of_hour(self) -> u16 {
        self.0 % 60
    }

    /// Every tick of one day in order: `00:00`, `00:01`, … `23:59`.
    pub fn day_ticks() -> impl Iterator<Item = ClockTime> {
        (0..MINUTES_PER_DAY).map(ClockTime)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl FromStr for ClockTime {
    type Err = FcError;

    /// Parse `HH:MM` (24-hour clock, `24:00` allowed as end of day).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || FcError::Parse(format!("invalid clock time {s:?}: expected HH:MM"));
        let (h, m) = s.trim().split_once(':').ok_or_else(bad)?;
        let hour: u16 = h.parse().map_err(|_| bad())?;
        let minute: u16 = m.parse().map_err(|_| bad())?;
        if m.len() != 2 {
            return Err(bad());
        }
        ClockTime::from_hm(hour, minute).ok_or_else(bad)
    }
}
