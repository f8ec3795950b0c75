//! Feed source layer for datafeed
//!
//! A feed source hides how records are fetched from the remote server
//! (authentication, session handling, paging through the feed). The worker
//! only sees one `FeedResult` per call to `fetch`.

pub mod error;
pub mod memory;

pub use error::{Error, Result};
pub use memory::MemorySource;

use async_trait::async_trait;
use datafeed_types::FeedResult;

/// Source of data feed results
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Authenticate and open a session
    async fn connect(&mut self) -> Result<()>;

    /// Close the session
    ///
    /// Calling this on a disconnected source is a no-op.
    async fn disconnect(&mut self) -> Result<()>;

    /// Check if connected
    fn is_connected(&self) -> bool;

    /// Fetch the records added since the previous call
    ///
    /// Returns an empty result when nothing new is available.
    async fn fetch(&mut self) -> Result<FeedResult>;

    /// Human readable description (server, database, ...)
    fn describe(&self) -> String;
}
