//! Core truck storage.
//!
//! Every `Vec` field has exactly `count` elements and the `TruckId` value is
//! the index into all of them:
//!
//! ```ignore
//! let kwh = fleet.battery[truck.index()];
//! ```
//!
//! The store is owned by exactly one day simulation at a time; batteries are
//! handed to the next day through [`FleetStore::batteries`].

use fc_core::{TruckId, TruckStatus};

/// Structure-of-Arrays storage for all truck state.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetStore {
    /// Number of trucks.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Battery capacity shared by every truck, kWh.
    pub capacity: f64,

    /// Current battery energy, kWh, always within `[0, capacity]`.
    pub battery: Vec<f64>,

    /// Status at the end of the most recent minute.
    pub status: Vec<TruckStatus>,
}

impl FleetStore {
    pub(crate) fn new(capacity: f64, battery: Vec<f64>, status: Vec<TruckStatus>) -> Self {
        debug_assert_eq!(battery.len(), status.len());
        Self { count: battery.len(), capacity, battery, status }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `TruckId`s in ascending index order.
    pub fn truck_ids(&self) -> impl Iterator<Item = TruckId> + use<> {
        (0..self.count as u32).map(TruckId)
    }

    /// Snapshot of all batteries, indexed by `TruckId`.
    pub fn batteries(&self) -> Vec<f64> {
        self.battery.clone()
    }

    /// Number of trucks currently in `status`.
    pub fn count_in(&self, status: TruckStatus) -> usize {
        self.status.iter().filter(|&&s| s == status).count()
    }

    /// Add `delta` kWh (may be negative) and clamp into `[0, capacity]`.
    ///
    /// Returns the new level.
    #[inline]
    pub fn adjust_battery(&mut self, truck: TruckId, delta: f64) -> f64 {
        let slot = &mut self.battery[truck.index()];
        *slot = (*slot + delta).clamp(0.0, self.capacity);
        *slot
    }

    /// State of charge as a fraction of capacity.
    #[inline]
    pub fn soc(&self, truck: TruckId) -> f64 {
        self.battery[truck.index()] / self.capacity
    }
}
