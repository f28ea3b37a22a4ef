//! `fc-sim` — minute loop orchestrator for the fleet charging simulator.
//!
//! # Minute loop
//!
//! ```text
//! for t in 00:00..24:00:
//!   ① Phase      — resolve Work/Break from the schedule.
//!   ② Trucks     — in ascending TruckId order apply the state machine:
//!                    run / idle / request a slot (→ Charging or Waiting).
//!   ③ Distribute — ration each charger's budget; add energy to batteries.
//!   ④ Drain      — hand any still-free slots to the wait queue head(s);
//!                  they charge from the next minute on.
//!   ⑤ Record     — counters, load profile, MinuteRecord.
//! ```
//!
//! [`EquilibriumSearch`] replays the day, chaining end batteries into the
//! next day's start, and keeps the day with the least battery drift.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs [`run_batch`] searches on Rayon's thread pool.    |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use fc_core::SimulationConfig;
//! use fc_schedule::Schedule;
//! use fc_sim::EquilibriumSearch;
//!
//! let config = SimulationConfig::new(10, 500.0, 100.0, 2, 2);
//! let schedule = Schedule::default_daily();
//! let result = EquilibriumSearch::new(&config, &schedule).run()?;
//! println!("best day {} drift {:.2}", result.best_day, result.best_drift);
//! ```

pub mod builder;
pub mod day;
pub mod equilibrium;
pub mod error;
pub mod observer;
pub mod record;


pub use builder::SimBuilder;
pub use day::DaySimulator;
pub use equilibrium::{run_batch, EquilibriumResult, EquilibriumSearch};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use record::{DayResult, HourLoad, LoadProfile, MinuteRecord, StatusCounters, TruckMinute};
