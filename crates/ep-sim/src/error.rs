use ep_core::EpError;
use ep_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Invalid configuration or a broken kernel invariant.
    #[error(transparent)]
    Kernel(#[from] EpError),

    #[error("dataset error: {0}")]
    Dataset(#[from] SpatialError),

    #[error("dataset has {0} nodes; at most u32::MAX agents are supported")]
    PopulationTooLarge(usize),
}

pub type SimResult<T> = Result<T, SimError>;
