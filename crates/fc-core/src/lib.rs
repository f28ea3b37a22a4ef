//! `fc-core` — foundational types for the fleet charging simulator.
//!
//! This crate is a dependency of every other `fc-*` crate.  It has no `fc-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`ids`]    | `TruckId`, `ChargerId`, `SlotId`                          |
//! | [`time`]   | `ClockTime`, `MINUTES_PER_DAY`, `HOURS_PER_DAY`           |
//! | [`rng`]    | `SimRng` (seeded)                                         |
//! | [`status`] | `TruckStatus` enum                                        |
//! | [`config`] | `SimulationConfig`, `PowerTiers`, policy defaults         |
//! | [`error`]  | `FcError`, `FcResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod status;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{PowerTiers, SimulationConfig};
pub use error::{FcError, FcResult};
pub use ids::{ChargerId, SlotId, TruckId};
pub use rng::SimRng;
pub use status::TruckStatus;
pub use time::{ClockTime, HOURS_PER_DAY, MINUTES_PER_DAY};
