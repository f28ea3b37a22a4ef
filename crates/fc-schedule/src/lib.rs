//! `fc-schedule` — the depot's daily operating schedule.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`phase`]  | `Phase`, `ScheduleEntry`, `Schedule`                      |
//! | [`loader`] | `load_schedule_csv`, `load_schedule_reader`               |
//! | [`error`]  | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Resolution model (summary)
//!
//! ```text
//! phase(t) = phase of the first entry with start <= t < end
//!            (end < start means the entry wraps past midnight)
//!          | Break, if no entry matches
//! ```
//!
//! Falling back to `Break` keeps trucks off the road in any gap a
//! hand-written schedule leaves open.

pub mod error;
pub mod loader;
pub mod phase;

#[cfg(test)]
mod tests;

pub use error::{ScheduleError, ScheduleResult};
pub use loader::{load_schedule_csv, load_schedule_reader};
pub use phase::{Phase, Schedule, ScheduleEntry};
