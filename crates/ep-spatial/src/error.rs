//! Dataset-subsystem error type.

use thiserror::Error;

/// Errors produced by `ep-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
