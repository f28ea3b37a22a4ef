//! `fc-charging` — per-minute charger contention.
//!
//! # Crate layout
//!
//! | Module          | Contents                                               |
//! |-----------------|--------------------------------------------------------|
//! | [`tiering`]     | `demand_kw`, `demand_per_minute`                       |
//! | [`allocator`]   | `ChargerBank` (greedy slot assignment), `Assignment`   |
//! | [`distributor`] | `distribute`, `Delivery` (proportional rationing)      |
//! | [`wait_queue`]  | `WaitQueue` (FIFO, one entry per truck)                |
//!
//! # Per-minute flow
//!
//! ```text
//! bank.clear()
//! for truck in fleet (ascending TruckId):
//!     requested = demand_per_minute(battery)
//!     bank.assign(truck, requested)      → Some(slot) | None (→ wait_queue)
//! deliveries = distribute(&bank)         → battery += delivered
//! while bank has free slots: bank.assign(wait_queue.pop_front())
//! ```
//!
//! Everything here is plain data plus pure functions; the day simulator in
//! `fc-sim` owns the instances and decides who may request a slot.

pub mod allocator;
pub mod distributor;
pub mod tiering;
pub mod wait_queue;


pub use allocator::{Assignment, ChargerBank};
pub use distributor::{distribute, Delivery};
pub use tiering::{demand_kw, demand_per_minute};
pub use wait_queue::WaitQueue;
