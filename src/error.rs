//! Errors for the run driver. The simulation core itself has no recoverable errors.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("config IO: {0}")]
    Io(#[from] io::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
