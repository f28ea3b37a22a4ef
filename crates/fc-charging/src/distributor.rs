//! Splits each charger's per-minute budget among its assigned trucks.
//!
//! ```text
//! demand = Σ requested on the charger
//! demand ≤ budget  → every truck gets its request
//! demand > budget  → every truck gets budget × requested / demand
//! ```
//!
//! The rationed shares sum to `budget` (up to rounding), so a charger never delivers
//! more than `max_charger_power / 60` in one minute.

use fc_core::{SlotId, TruckId};

use crate::ChargerBank;

/// Energy actually handed to one truck this minute.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Delivery {
    pub truck:     TruckId,
    pub slot:      SlotId,
    pub requested: f64,
    pub delivered: f64,
}

/// Compute deliveries for every assignment in `bank`, in charger then gun
/// order.
pub fn distribute(bank: &ChargerBank) -> Vec<Delivery> {
    let budget = bank.budget_per_minute();
    let mut out = Vec::with_capacity(bank.occupied());

    for (charger, assignments) in bank.chargers() {
        let demand = bank.demand(charger);
        let scale = if demand > budget { budget / demand } else { 1.0 };
        out.extend(assignments.iter().map(|a| Delivery {
            truck:     a.truck,
            slot:      a.slot,
            requested: a.requested,
            delivered: a.requested * scale,
        }));
    }
    out
}
