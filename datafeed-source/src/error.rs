//! Feed source errors

use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Not connected")]
    NotConnected,

    #[error("Already connected")]
    AlreadyConnected,

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Feed unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid source configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Check if error is recoverable (next cycle might succeed)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Timeout | Self::Unavailable(_) | Self::Io(_))
    }
}
