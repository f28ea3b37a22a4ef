use fc_core::{FcError, TruckId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] FcError),

    #[error("{what} length {got} does not match truck count {expected}")]
    TruckCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("initial battery {battery} kWh of {} outside [0, {capacity}]", .truck.label())]
    InvalidBattery {
        truck:    TruckId,
        battery:  f64,
        capacity: f64,
    },
}

pub type SimResult<T> = Result<T, SimError>;
