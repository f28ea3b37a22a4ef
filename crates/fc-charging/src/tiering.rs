//! State-of-charge → requested charging power.

use fc_core::config::MINUTES_PER_HOUR;
use fc_core::PowerTiers;

/// Requested charging power in kW for a battery at `battery` of `capacity`.
///
/// Breakpoints are inclusive on the lower tier: exactly 85 % still requests
/// `low_kw`, exactly 95 % still requests `medium_kw`.
pub fn demand_kw(tiers: &PowerTiers, battery: f64, capacity: f64) -> f64 {
    let soc = battery / capacity;
    if soc <= tiers.medium_above {
        tiers.low_kw
    } else if soc <= tiers.high_above {
        tiers.medium_kw
    } else {
        tiers.high_kw
    }
}

/// Requested energy for one minute, kWh.
#[inline]
pub fn demand_per_minute(tiers: &PowerTiers, battery: f64, capacity: f64) -> f64 {
    demand_kw(tiers, battery, capacity) / MINUTES_PER_HOUR
}
