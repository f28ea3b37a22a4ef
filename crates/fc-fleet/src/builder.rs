//! Fluent builder for constructing a `FleetStore`.
//!
//! # Usage
//!
//! ```rust
//! use fc_core::SimRng;
//! use fc_fleet::FleetBuilder;
//!
//! let mut rng = SimRng::new(42);
//! let fleet = FleetBuilder::new(8, 500.0)
//!     .random_batteries(&mut rng, (0.4, 0.8))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(fleet.count, 8);
//! assert!(fleet.battery.iter().all(|&b| (200.0..=400.0).contains(&b)));
//! ```

use fc_core::{FcError, FcResult, SimRng, TruckStatus};

use crate::FleetStore;

/// Fluent builder for [`FleetStore`].
///
/// Without an explicit battery source every truck starts full.  Every truck
/// starts in [`TruckStatus::Running`] unless statuses are supplied.
pub struct FleetBuilder {
    count:     usize,
    capacity:  f64,
    batteries: Option<Vec<f64>>,
    statuses:  Option<Vec<TruckStatus>>,
}

impl FleetBuilder {
    pub fn new(count: usize, capacity: f64) -> Self {
        Self { count, capacity, batteries: None, statuses: None }
    }

    /// Supply explicit starting batteries, kWh (must be length `count`).
    pub fn batteries(mut self, batteries: Vec<f64>) -> Self {
        self.batteries = Some(batteries);
        self
    }

    /// Draw each battery uniformly from `soc_range` (fractions of capacity).
    pub fn random_batteries(mut self, rng: &mut SimRng, soc_range: (f64, f64)) -> Self {
        let (lo, hi) = soc_range;
        let batteries = (0..self.count)
            .map(|_| rng.gen_range(lo..=hi) * self.capacity)
            .collect();
        self.batteries = Some(batteries);
        self
    }

    /// Supply explicit starting statuses (must be length `count`).
    pub fn statuses(mut self, statuses: Vec<TruckStatus>) -> Self {
        self.statuses = Some(statuses);
        self
    }

    /// Validate inputs and construct the store.
    pub fn build(self) -> FcResult<FleetStore> {
        if !(self.capacity.is_finite() && self.capacity > 0.0) {
            return Err(FcError::Config(format!(
                "battery capacity must be positive, got {}",
                self.capacity
            )));
        }

        let battery = match self.batteries {
            Some(b) => {
                check_len(b.len(), self.count, "initial batteries")?;
                if let Some((i, &kwh)) = b
                    .iter()
                    .enumerate()
                    .find(|&(_, &kwh)| !(0.0..=self.capacity).contains(&kwh))
                {
                    return Err(FcError::Config(format!(
                        "initial battery {kwh} of truck {} outside [0, {}]",
                        i + 1,
                        self.capacity
                    )));
                }
                b
            }
            None => vec![self.capacity; self.count],
        };

        let status = match self.statuses {
            Some(s) => {
                check_len(s.len(), self.count, "initial statuses")?;
                s
            }
            None => vec![TruckStatus::Running; self.count],
        };

        Ok(FleetStore::new(self.capacity, battery, status))
    }
}

fn check_len(got: usize, expected: usize, what: &str) -> FcResult<()> {
    if got != expected {
        return Err(FcError::Config(format!(
            "{what} length {got} does not match truck count {expected}"
        )));
    }
    Ok(())
}
