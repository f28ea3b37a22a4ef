//! Strongly typed, zero-cost identifier wrappers.
//!
//! IDs are `Copy + Ord + Hash`.  The inner integer is `pub` so SoA `Vec`s can
//! be indexed with `id.0 as usize`, but callers should prefer `.index()`.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Index of a truck in fleet storage.  Iteration order over trucks is
    /// ascending `TruckId`, which is also the allocation priority order.
    pub struct TruckId(u32);
}

typed_id! {
    /// Index of a charging station.
    pub struct ChargerId(u16);
}

impl TruckId {
    /// Report label used as the column prefix in exported tables: `truck1`,
    /// `truck2`, … (1-based).
    pub fn label(self) -> String {
        format!("truck{}", self.0 + 1)
    }
}

// ── SlotId ────────────────────────────────────────────────────────────────────

/// One (charger, gun) pair.  `gun` is zero-based internally; both parts are
/// rendered 1-based (`C1-G1`) to match operator-facing labels.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotId {
    pub charger: ChargerId,
    pub gun:     u16,
}

impl SlotId {
    #[inline]
    pub fn new(charger: ChargerId, gun: u16) -> Self {
        Self { charger, gun }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{}-G{}", self.charger.0 as u32 + 1, self.gun as u32 + 1)
    }
}
