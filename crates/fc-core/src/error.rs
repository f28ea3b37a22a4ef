//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `FcError` as one variant
//! (see `fc_sim::SimError::Core`), so configuration failures surface with the
//! same classification no matter which layer rejected them.

use thiserror::Error;

/// The top-level error type for `fc-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum FcError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `fc-*` crates.
pub type FcResult<T> = Result<T, FcError>;
