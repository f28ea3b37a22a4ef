//! Truck operating status shared by the fleet, charging, and sim crates.

/// What a truck is doing during one simulated minute.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TruckStatus {
    /// Driving its route and draining the battery (default state).
    #[default]
    Running,
    /// Holding a charger slot.
    Charging,
    /// Wants a slot but none was free; sits in the wait queue.
    Waiting,
    /// Parked with a full battery during a break.
    Idle,
}

impl TruckStatus {
    /// All variants in report order.
    pub const ALL: [TruckStatus; 4] = [
        TruckStatus::Running,
        TruckStatus::Charging,
        TruckStatus::Waiting,
        TruckStatus::Idle,
    ];

    /// Dense index into per-status counter arrays.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            TruckStatus::Running  => 0,
            TruckStatus::Charging => 1,
            TruckStatus::Waiting  => 2,
            TruckStatus::Idle     => 3,
        }
    }

    /// Label used in CSV cells and JSON keys.
    pub fn as_str(self) -> &'static str {
        match self {
            TruckStatus::Running  => "Running",
            TruckStatus::Charging => "Charging",
            TruckStatus::Waiting  => "Waiting",
            TruckStatus::Idle     => "Idle",
        }
    }
}

impl std::fmt::Display for TruckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
