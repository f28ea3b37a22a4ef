//! Fluent builder for constructing a [`DaySimulator`].

use fc_core::{SimulationConfig, TruckId, TruckStatus};
use fc_fleet::FleetBuilder;
use fc_schedule::Schedule;

use crate::{DaySimulator, SimError, SimResult};

/// Fluent builder for [`DaySimulator`].
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                          |
/// |--------------------------|----------------------------------|
/// | `.initial_batteries(v)`  | Every truck full                 |
/// | `.initial_statuses(v)`   | Every truck `Running`            |
/// | `.day_index(n)`          | `0` (reported to the observer)   |
///
/// # Example
///
/// ```rust,ignore
/// let sim = SimBuilder::new(&config, &schedule)
///     .initial_batteries(batteries)
///     .build()?;
/// let day = sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<'a> {
    config:    &'a SimulationConfig,
    schedule:  &'a Schedule,
    batteries: Option<Vec<f64>>,
    statuses:  Option<Vec<TruckStatus>>,
    day:       usize,
}

impl<'a> SimBuilder<'a> {
    pub fn new(config: &'a SimulationConfig, schedule: &'a Schedule) -> Self {
        Self { config, schedule, batteries: None, statuses: None, day: 0 }
    }

    /// Starting battery per truck, kWh (must be length `num_trucks`).
    pub fn initial_batteries(mut self, batteries: Vec<f64>) -> Self {
        self.batteries = Some(batteries);
        self
    }

    /// Starting status per truck (must be length `num_trucks`).
    ///
    /// A truck starting in `Charging` is treated as mid-session and keeps
    /// its slot reservation through the first minute.
    pub fn initial_statuses(mut self, statuses: Vec<TruckStatus>) -> Self {
        self.statuses = Some(statuses);
        self
    }

    pub fn day_index(mut self, day: usize) -> Self {
        self.day = day;
        self
    }

    /// Validate inputs and return a simulator positioned at `00:00`.
    pub fn build(self) -> SimResult<DaySimulator<'a>> {
        self.config.validate()?;
        let n = self.config.num_trucks;

        let mut fleet = FleetBuilder::new(n, self.config.max_battery_capacity);
        if let Some(b) = self.batteries {
            check_len(b.len(), n, "initial batteries")?;
            let capacity = self.config.max_battery_capacity;
            if let Some((i, &battery)) = b
                .iter()
                .enumerate()
                .find(|&(_, kwh)| !(0.0..=capacity).contains(kwh))
            {
                return Err(SimError::InvalidBattery { truck: TruckId(i as u32), battery, capacity });
            }
            fleet = fleet.batteries(b);
        }
        if let Some(s) = self.statuses {
            check_len(s.len(), n, "initial statuses")?;
            fleet = fleet.statuses(s);
        }

        Ok(DaySimulator::new(self.config, self.schedule, fleet.build()?, self.day))
    }
}

fn check_len(got: usize, expected: usize, what: &'static str) -> SimResult<()> {
    if got != expected {
        return Err(SimError::TruckCountMismatch { expected, got, what });
    }
    Ok(())
}
