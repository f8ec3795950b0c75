//! High-level error types

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Export error: {0}")]
    Export(#[from] datafeed_core::Error),

    #[error("Source error: {0}")]
    Source(#[from] datafeed_source::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid worker state: {0}")]
    InvalidState(String),

    #[error("Data feed worker failed: {0}")]
    WorkerFailed(String),
}
