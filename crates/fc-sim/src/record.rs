//! Per-minute records and per-day aggregates produced by [`DaySimulator`].
//!
//! Energy fields on [`TruckMinute`] and [`MinuteRecord`] are kWh moved in
//! that one minute.  [`HourLoad::peak_power_kw`] converts back to kW.
//!
//! [`DaySimulator`]: crate::DaySimulator

use fc_core::config::MINUTES_PER_HOUR;
use fc_core::{ChargerId, ClockTime, SlotId, TruckId, TruckStatus, HOURS_PER_DAY};
use fc_schedule::Phase;

// ── TruckMinute ───────────────────────────────────────────────────────────────

/// What one truck did in one minute.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TruckMinute {
    pub status:          TruckStatus,
    pub battery_start:   f64,
    pub battery_end:     f64,
    /// Energy requested from the charger this minute, kWh.  Zero for a truck
    /// that was plugged in from the wait queue at the end of the minute: it
    /// draws power from the next minute on.
    pub requested_power: f64,
    pub delivered_power: f64,
    /// `battery_end` as a percentage of capacity.
    pub state_of_charge: f64,
    pub slot:            Option<SlotId>,
}

impl TruckMinute {
    pub(crate) fn starting_at(battery: f64) -> Self {
        Self {
            status:          TruckStatus::Running,
            battery_start:   battery,
            battery_end:     battery,
            requested_power: 0.0,
            delivered_power: 0.0,
            state_of_charge: 0.0,
            slot:            None,
        }
    }
}

// ── MinuteRecord ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct MinuteRecord {
    pub time:            ClockTime,
    pub phase:           Phase,
    /// Indexed by `TruckId`.
    pub trucks:          Vec<TruckMinute>,
    /// Σ delivered energy across all chargers, kWh.
    pub total_delivered: f64,
}

impl MinuteRecord {
    #[inline]
    pub fn truck(&self, truck: TruckId) -> &TruckMinute {
        &self.trucks[truck.index()]
    }

    pub fn count_in(&self, status: TruckStatus) -> usize {
        self.trucks.iter().filter(|m| m.status == status).count()
    }

    /// Energy delivered through `charger`'s guns this minute.
    pub fn delivered_on(&self, charger: ChargerId) -> f64 {
        self.trucks
            .iter()
            .filter(|m| m.slot.is_some_and(|s| s.charger == charger))
            .map(|m| m.delivered_power)
            .sum()
    }
}

// ── StatusCounters ────────────────────────────────────────────────────────────

/// Minutes each truck spent in each status over one day.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatusCounters {
    minutes: Vec<[u32; 4]>,
}

impl StatusCounters {
    pub fn new(truck_count: usize) -> Self {
        Self { minutes: vec![[0; 4]; truck_count] }
    }

    pub fn truck_count(&self) -> usize {
        self.minutes.len()
    }

    #[inline]
    pub fn record(&mut self, truck: TruckId, status: TruckStatus) {
        self.minutes[truck.index()][status.index()] += 1;
    }

    pub fn minutes(&self, truck: TruckId, status: TruckStatus) -> u32 {
        self.minutes[truck.index()][status.index()]
    }

    pub fn hours(&self, truck: TruckId, status: TruckStatus) -> f64 {
        f64::from(self.minutes(truck, status)) / MINUTES_PER_HOUR
    }

    /// Minutes summed over every truck.
    pub fn fleet_minutes(&self, status: TruckStatus) -> u64 {
        self.minutes
            .iter()
            .map(|m| u64::from(m[status.index()]))
            .sum()
    }
}

// ── LoadProfile ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HourLoad {
    /// Largest single-minute fleet draw within the hour, expressed in kW.
    pub peak_power_kw: f64,
    /// Energy delivered over the hour, kWh.
    pub total_energy:  f64,
}

/// Hourly charging load, 24 entries indexed by hour of day.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadProfile {
    hours: [HourLoad; HOURS_PER_DAY],
}

impl Default for LoadProfile {
    fn default() -> Self {
        Self { hours: [HourLoad::default(); HOURS_PER_DAY] }
    }
}

impl LoadProfile {
    /// Fold one minute's fleet-wide delivered energy (kWh) into its hour.
    pub fn record(&mut self, time: ClockTime, delivered: f64) {
        let hour = &mut self.hours[time.hour()];
        hour.total_energy += delivered;
        hour.peak_power_kw = hour.peak_power_kw.max(delivered * MINUTES_PER_HOUR);
    }

    pub fn hour(&self, hour: usize) -> &HourLoad {
        &self.hours[hour]
    }

    pub fn hours(&self) -> &[HourLoad] {
        &self.hours
    }

    pub fn total_energy(&self) -> f64 {
        self.hours.iter().map(|h| h.total_energy).sum()
    }

    pub fn peak_power_kw(&self) -> f64 {
        self.hours.iter().map(|h| h.peak_power_kw).fold(0.0, f64::max)
    }
}

// ── DayResult ─────────────────────────────────────────────────────────────────

/// Everything one simulated day produced.
#[derive(Clone, Debug)]
pub struct DayResult {
    pub start_batteries: Vec<f64>,
    pub end_batteries:   Vec<f64>,
    /// One record per minute, `00:00` first.
    pub records:         Vec<MinuteRecord>,
    pub counters:        StatusCounters,
    pub load_profile:    LoadProfile,
}

impl DayResult {
    /// Σ |end − start| battery over all trucks, kWh.
    pub fn drift(&self) -> f64 {
        self.start_batteries
            .iter()
            .zip(&self.end_batteries)
            .map(|(s, e)| (e - s).abs())
            .sum()
    }

    pub fn total_energy(&self) -> f64 {
        self.load_profile.total_energy()
    }

    pub fn truck_count(&self) -> usize {
        self.start_batteries.len()
    }
}
