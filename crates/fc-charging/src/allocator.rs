//! `ChargerBank` — the per-minute charger/gun assignment table.
//!
//! # Selection rule
//!
//! For every charger with a free gun:
//!
//! ```text
//! available = budget_per_minute − Σ requested already assigned this minute
//! ```
//!
//! The charger with the strictly largest `available` wins; the scan runs in
//! ascending charger index and only a strictly larger value replaces the
//! current best, so ties go to the lowest index.  The truck takes the next
//! gun on that charger.
//!
//! Each charger holds at most `guns_per_charger` trucks, which also bounds
//! the fleet-wide total at `num_chargers × guns_per_charger`.

use fc_core::{ChargerId, SimulationConfig, SlotId, TruckId};

/// One truck plugged into one gun for the current minute.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Assignment {
    pub truck:     TruckId,
    pub slot:      SlotId,
    /// Requested energy this minute, kWh.
    pub requested: f64,
}

/// Charger slot table for one minute.  Reused across minutes via
/// [`clear`](Self::clear) to avoid reallocating.
#[derive(Clone, Debug)]
pub struct ChargerBank {
    chargers:         Vec<Vec<Assignment>>,
    guns_per_charger: usize,
    budget:           f64,
    occupied:         usize,
}

impl ChargerBank {
    /// `budget_per_minute` is the energy (kWh) one charger can deliver in a
    /// minute, i.e. `max_charger_power / 60`.
    pub fn new(num_chargers: usize, guns_per_charger: usize, budget_per_minute: f64) -> Self {
        Self {
            chargers: (0..num_chargers)
                .map(|_| Vec::with_capacity(guns_per_charger))
                .collect(),
            guns_per_charger,
            budget: budget_per_minute,
            occupied: 0,
        }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(
            config.num_chargers,
            config.guns_per_charger,
            config.charger_budget_per_minute(),
        )
    }

    /// Release every slot.
    pub fn clear(&mut self) {
        for c in &mut self.chargers {
            c.clear();
        }
        self.occupied = 0;
    }

    #[inline]
    pub fn num_chargers(&self) -> usize {
        self.chargers.len()
    }

    #[inline]
    pub fn budget_per_minute(&self) -> f64 {
        self.budget
    }

    #[inline]
    pub fn total_slots(&self) -> usize {
        self.chargers.len() * self.guns_per_charger
    }

    #[inline]
    pub fn occupied(&self) -> usize {
        self.occupied
    }

    #[inline]
    pub fn free_slots(&self) -> usize {
        self.total_slots() - self.occupied
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.occupied >= self.total_slots()
    }

    /// Assignments on `charger`, in gun order.
    pub fn assignments(&self, charger: ChargerId) -> &[Assignment] {
        &self.chargers[charger.index()]
    }

    /// All chargers with their assignments, in charger order.
    pub fn chargers(&self) -> impl Iterator<Item = (ChargerId, &[Assignment])> + '_ {
        self.chargers
            .iter()
            .enumerate()
            .map(|(i, a)| (ChargerId(i as u16), a.as_slice()))
    }

    /// Σ requested energy on `charger` this minute.
    pub fn demand(&self, charger: ChargerId) -> f64 {
        self.chargers[charger.index()].iter().map(|a| a.requested).sum()
    }

    /// Spare budget on `charger`; negative when oversubscribed.
    pub fn available(&self, charger: ChargerId) -> f64 {
        self.budget - self.demand(charger)
    }

    /// The charger a new truck would be routed to, or `None` if every gun is
    /// taken.
    pub fn best_charger(&self) -> Option<ChargerId> {
        let mut best: Option<(ChargerId, f64)> = None;
        for (i, assigned) in self.chargers.iter().enumerate() {
            if assigned.len() >= self.guns_per_charger {
                continue;
            }
            let id = ChargerId(i as u16);
            let available = self.available(id);
            match best {
                Some((_, best_available)) if available <= best_available => {}
                _ => best = Some((id, available)),
            }
        }
        best.map(|(id, _)| id)
    }

    /// Plug `truck` into the best charger's next free gun.
    ///
    /// Returns `None` (and changes nothing) when every gun is taken.
    pub fn assign(&mut self, truck: TruckId, requested: f64) -> Option<SlotId> {
        let charger = self.best_charger()?;
        let guns = &mut self.chargers[charger.index()];
        let slot = SlotId::new(charger, guns.len() as u16);
        guns.push(Assignment { truck, slot, requested });
        self.occupied += 1;
        Some(slot)
    }
}
