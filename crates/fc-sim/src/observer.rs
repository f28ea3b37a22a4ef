//! Simulation observer trait for progress reporting and data collection.

use crate::MinuteRecord;

/// Callbacks invoked by [`DaySimulator::run`][crate::DaySimulator::run] and
/// [`EquilibriumSearch`][crate::EquilibriumSearch] at key points.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — drift printer
///
/// ```rust,ignore
/// struct DriftPrinter;
///
/// impl SimObserver for DriftPrinter {
///     fn on_day_end(&mut self, day: usize, drift: f64) {
///         println!("day {day}: drift {drift:.2} kWh");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after every simulated minute with that minute's record.
    fn on_minute_end(&mut self, _record: &MinuteRecord) {}

    /// Called once a day has run all 1440 minutes.  `drift` is the day's
    /// Σ |end − start| battery, kWh.
    fn on_day_end(&mut self, _day: usize, _drift: f64) {}

    /// Called once after the equilibrium search picks its best day.
    fn on_search_end(&mut self, _best_day: usize, _best_drift: f64) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
