//! Simulation configuration.
//!
//! `SimulationConfig` is immutable for the duration of a run.  Only the five
//! fleet/site inputs are required; the charging policy constants default to
//! the values used for the depot study (see the `DEFAULT_*` constants).
//!
//! Units: battery energy in kWh, power in kW.  One tick is one minute, so a
//! power `p` kW moves `p / 60` kWh per tick.

use crate::{FcError, FcResult};

pub const DEFAULT_CRITICAL_LEVEL:    f64 = 0.10;
pub const DEFAULT_OK_LEVEL:          f64 = 0.50;
pub const DEFAULT_MAX_CHARGER_POWER: f64 = 600.0;
pub const DEFAULT_SEARCH_DAYS:       usize = 100;
pub const DEFAULT_SEED:              u64 = 42;

/// Minutes per hour, used for kW ↔ kWh-per-tick conversion.
pub const MINUTES_PER_HOUR: f64 = 60.0;

// ── PowerTiers ────────────────────────────────────────────────────────────────

/// Requested charging power by state of charge.
///
/// The tiers taper as the battery fills: `low_kw` applies to the *lowest*
/// state of charge and is the largest wattage.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PowerTiers {
    /// kW requested while SoC ≤ `medium_above`.
    pub low_kw:       f64,
    /// kW requested while `medium_above` < SoC ≤ `high_above`.
    pub medium_kw:    f64,
    /// kW requested above `high_above`.
    pub high_kw:      f64,
    /// SoC fraction breakpoint between the low and medium tiers.
    pub medium_above: f64,
    /// SoC fraction breakpoint between the medium and high tiers.
    pub high_above:   f64,
}

impl Default for PowerTiers {
    fn default() -> Self {
        Self {
            low_kw:       600.0,
            medium_kw:    450.0,
            high_kw:      150.0,
            medium_above: 0.85,
            high_above:   0.95,
        }
    }
}

// ── SimulationConfig ──────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically loaded from a TOML file by the application crate and passed to
/// the equilibrium search.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig {
    pub num_trucks: usize,

    /// Battery capacity of every truck, kWh.
    pub max_battery_capacity: f64,

    /// Flat energy drain while running, kWh per hour.
    pub average_consumption_per_hour: f64,

    pub num_chargers: usize,

    pub guns_per_charger: usize,

    /// Fraction of capacity at or below which a working truck must charge.
    #[cfg_attr(feature = "serde", serde(default = "default_critical_level"))]
    pub critical_level: f64,

    /// Fraction of capacity at which a working truck stops charging.
    #[cfg_attr(feature = "serde", serde(default = "default_ok_level"))]
    pub ok_level: f64,

    #[cfg_attr(feature = "serde", serde(default))]
    pub power_tiers: PowerTiers,

    /// Power cap of one charger shared by all its guns, kW.
    #[cfg_attr(feature = "serde", serde(default = "default_max_charger_power"))]
    pub max_charger_power: f64,

    /// Days replayed by the equilibrium search.
    #[cfg_attr(feature = "serde", serde(default = "default_search_days"))]
    pub search_days: usize,

    /// Seed for the day-0 battery draw.  The same seed always produces
    /// identical results.
    #[cfg_attr(feature = "serde", serde(default = "default_seed"))]
    pub seed: u64,

    /// Day-0 batteries are drawn uniformly from this SoC fraction range.
    #[cfg_attr(feature = "serde", serde(default = "default_initial_soc"))]
    pub initial_soc: (f64, f64),
}

#[cfg(feature = "serde")]
fn default_critical_level() -> f64 { DEFAULT_CRITICAL_LEVEL }
#[cfg(feature = "serde")]
fn default_ok_level() -> f64 { DEFAULT_OK_LEVEL }
#[cfg(feature = "serde")]
fn default_max_charger_power() -> f64 { DEFAULT_MAX_CHARGER_POWER }
#[cfg(feature = "serde")]
fn default_search_days() -> usize { DEFAULT_SEARCH_DAYS }
#[cfg(feature = "serde")]
fn default_seed() -> u64 { DEFAULT_SEED }
#[cfg(feature = "serde")]
fn default_initial_soc() -> (f64, f64) { (0.4, 0.8) }

impl SimulationConfig {
    /// A config with the five required inputs and default policy constants.
    pub fn new(
        num_trucks:                   usize,
        max_battery_capacity:         f64,
        average_consumption_per_hour: f64,
        num_chargers:                 usize,
        guns_per_charger:             usize,
    ) -> Self {
        Self {
            num_trucks,
            max_battery_capacity,
            average_consumption_per_hour,
            num_chargers,
            guns_per_charger,
            critical_level:    DEFAULT_CRITICAL_LEVEL,
            ok_level:          DEFAULT_OK_LEVEL,
            power_tiers:       PowerTiers::default(),
            max_charger_power: DEFAULT_MAX_CHARGER_POWER,
            search_days:       DEFAULT_SEARCH_DAYS,
            seed:              DEFAULT_SEED,
            initial_soc:       (0.4, 0.8),
        }
    }

    /// Battery level (kWh) at or below which a working truck must charge.
    #[inline]
    pub fn critical_energy(&self) -> f64 {
        self.critical_level * self.max_battery_capacity
    }

    /// Battery level (kWh) at which a working truck stops charging.
    #[inline]
    pub fn ok_energy(&self) -> f64 {
        self.ok_level * self.max_battery_capacity
    }

    /// Energy drained per running minute, kWh.
    #[inline]
    pub fn consumption_per_minute(&self) -> f64 {
        self.average_consumption_per_hour / MINUTES_PER_HOUR
    }

    /// Energy one charger can deliver per minute, kWh.
    #[inline]
    pub fn charger_budget_per_minute(&self) -> f64 {
        self.max_charger_power / MINUTES_PER_HOUR
    }

    /// Fleet-wide slot count.
    #[inline]
    pub fn total_slots(&self) -> usize {
        self.num_chargers * self.guns_per_charger
    }

    /// Reject configurations that would yield undefined numeric results.
    ///
    /// Called by every simulation entry point before the first tick.
    pub fn validate(&self) -> FcResult<()> {
        let fail = |msg: String| Err(FcError::Config(msg));

        if self.num_trucks == 0 {
            return fail("num_trucks must be > 0".into());
        }
        if self.num_chargers == 0 {
            return fail("num_chargers must be > 0".into());
        }
        if self.guns_per_charger == 0 {
            return fail("guns_per_charger must be > 0".into());
        }
        if u16::try_from(self.num_chargers).is_err() || u16::try_from(self.guns_per_charger).is_err() {
            return fail("num_chargers and guns_per_charger must fit in u16".into());
        }
        if !(self.max_battery_capacity.is_finite() && self.max_battery_capacity > 0.0) {
            return fail(format!(
                "max_battery_capacity must be positive, got {}",
                self.max_battery_capacity
            ));
        }
        if !(self.average_consumption_per_hour.is_finite() && self.average_consumption_per_hour >= 0.0) {
            return fail(format!(
                "average_consumption_per_hour must be non-negative, got {}",
                self.average_consumption_per_hour
            ));
        }
        if !(self.max_charger_power.is_finite() && self.max_charger_power > 0.0) {
            return fail(format!(
                "max_charger_power must be positive, got {}",
                self.max_charger_power
            ));
        }
        for (name, level) in [("critical_level", self.critical_level), ("ok_level", self.ok_level)] {
            if !(0.0..=1.0).contains(&level) {
                return fail(format!("{name} must be within [0, 1], got {level}"));
            }
        }

        let t = &self.power_tiers;
        for (name, kw) in [("low_kw", t.low_kw), ("medium_kw", t.medium_kw), ("high_kw", t.high_kw)] {
            if !(kw.is_finite() && kw > 0.0) {
                return fail(format!("power_tiers.{name} must be positive, got {kw}"));
            }
        }
        if !(0.0 <= t.medium_above && t.medium_above <= t.high_above && t.high_above <= 1.0) {
            return fail(format!(
                "power tier breakpoints must satisfy 0 <= {} <= {} <= 1",
                t.medium_above, t.high_above
            ));
        }

        if self.search_days == 0 {
            return fail("search_days must be > 0".into());
        }
        let (lo, hi) = self.initial_soc;
        if !(0.0 <= lo && lo < hi && hi <= 1.0) {
            return fail(format!("initial_soc range ({lo}, {hi}) must satisfy 0 <= lo < hi <= 1"));
        }
        Ok(())
    }
}
