//! `fc-fleet` — Structure-of-Arrays truck storage.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`store`]   | `FleetStore` (SoA battery/status arrays)                  |
//! | [`builder`] | `FleetBuilder` (explicit or seeded-random batteries)      |

pub mod builder;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::FleetBuilder;
pub use store::FleetStore;
