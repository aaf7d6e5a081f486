//! Kernel error type.
//!
//! Sub-crates define their own error enums and wrap `EpError` as one variant
//! via `#[from]`, so configuration failures surface unchanged at every layer.

use thiserror::Error;

use crate::AgentId;

/// The top-level error type for `ep-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum EpError {
    /// Out-of-range or semantically invalid configuration.  Rejected before a
    /// run starts; never partially applied.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An internal invariant does not hold (e.g. an agent sits in two
    /// partitions).  This is a programming error, not a user error.
    #[error("inconsistent state: {0}")]
    InconsistentState(String),

    #[error("agent {0} not found")]
    AgentNotFound(AgentId),
}

/// Shorthand result type for all `ep-*` crates.
pub type EpResult<T> = Result<T, EpError>;
