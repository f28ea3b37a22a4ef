//! Multi-day search for the fleet's steady-state day.
//!
//! Day 0 starts from random batteries; every following day starts where the
//! previous one ended.  The day whose batteries moved least over its 24 hours
//! (smallest drift) is the best approximation of a repeating daily cycle.

use fc_core::{FcError, SimRng, SimulationConfig};
use fc_fleet::FleetBuilder;
use fc_schedule::Schedule;
use tracing::{debug, info};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{DayResult, NoopObserver, SimBuilder, SimObserver, SimResult};

/// Outcome of an [`EquilibriumSearch`].
#[derive(Clone, Debug)]
pub struct EquilibriumResult {
    /// Zero-based index of the retained day.
    pub best_day:   usize,
    pub best_drift: f64,
    /// The retained day in full.
    pub day:        DayResult,
    /// Drift of every simulated day, in order.
    pub drifts:     Vec<f64>,
}

pub struct EquilibriumSearch<'a> {
    config:   &'a SimulationConfig,
    schedule: &'a Schedule,
}

impl<'a> EquilibriumSearch<'a> {
    pub fn new(config: &'a SimulationConfig, schedule: &'a Schedule) -> Self {
        Self { config, schedule }
    }

    pub fn run(&self) -> SimResult<EquilibriumResult> {
        self.run_with(&mut NoopObserver)
    }

    /// Seed day 0 from `config.seed` and search `config.search_days` days.
    pub fn run_with<O: SimObserver>(&self, observer: &mut O) -> SimResult<EquilibriumResult> {
        self.config.validate()?;
        let mut rng = SimRng::new(self.config.seed);
        let fleet = FleetBuilder::new(self.config.num_trucks, self.config.max_battery_capacity)
            .random_batteries(&mut rng, self.config.initial_soc)
            .build()?;
        self.run_from(fleet.batteries(), observer)
    }

    /// Search starting from explicit day-0 batteries.
    pub fn run_from<O: SimObserver>(
        &self,
        initial:  Vec<f64>,
        observer: &mut O,
    ) -> SimResult<EquilibriumResult> {
        let days = self.config.search_days;
        let mut drifts = Vec::with_capacity(days);
        let mut best: Option<(usize, f64, DayResult)> = None;
        let mut start = initial;

        for day in 0..days {
            let result = SimBuilder::new(self.config, self.schedule)
                .initial_batteries(start)
                .day_index(day)
                .build()?
                .run(observer);
            let drift = result.drift();
            debug!(day, drift, energy = result.total_energy(), "simulated day");

            drifts.push(drift);
            start = result.end_batteries.clone();
            if best.as_ref().is_none_or(|&(_, best_drift, _)| drift < best_drift) {
                best = Some((day, drift, result));
            }
        }

        let (best_day, best_drift, day) = best
            .ok_or_else(|| FcError::Config("search_days must be positive".into()))?;
        info!(days, best_day, best_drift, "equilibrium search finished");
        observer.on_search_end(best_day, best_drift);

        Ok(EquilibriumResult { best_day, best_drift, day, drifts })
    }
}

/// Run one independent search per seed.  Results are in `seeds` order.
///
/// With the `parallel` feature the searches run on Rayon's thread pool.
pub fn run_batch(
    config:   &SimulationConfig,
    schedule: &Schedule,
    seeds:    &[u64],
) -> SimResult<Vec<EquilibriumResult>> {
    let run_one = |&seed: &u64| {
        let config = SimulationConfig { seed, ..config.clone() };
        EquilibriumSearch::new(&config, schedule).run()
    };

    #[cfg(feature = "parallel")]
    let results = seeds.par_iter().map(run_one).collect();
    #[cfg(not(feature = "parallel"))]
    let results = seeds.iter().map(run_one).collect();

    results
}
