use crate::ShuffleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExperimentError {
    #[error("invalid experiment config: {0}")]
    InvalidConfig(String),
    #[error("shuffle failed: {0}")]
    Shuffle(#[from] ShuffleError),
    #[error("worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, ExperimentError>;
