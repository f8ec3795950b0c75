//! In-memory feed source

use std::collections::VecDeque;

use async_trait::async_trait;
use datafeed_types::FeedResult;
use tracing::{debug, trace};

use crate::{error::*, FeedSource};

/// Feed source replaying queued results
///
/// Each `fetch` pops the next queued result; once the queue is drained it
/// keeps returning empty results, like a live feed with nothing new.
#[derive(Debug, Default)]
pub struct MemorySource {
    name: String,
    pending: VecDeque<FeedResult>,
    connected: bool,
    fetches: usize,
}

impl MemorySource {
    /// Create empty source
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Queue results to replay
    pub fn with_results(mut self, results: impl IntoIterator<Item = FeedResult>) -> Self {
        self.pending.extend(results);
        self
    }

    /// Number of results not fetched yet
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    /// Number of successful fetches so far
    pub fn fetch_count(&self) -> usize {
        self.fetches
    }
}

#[async_trait]
impl FeedSource for MemorySource {
    async fn connect(&mut self) -> Result<()> {
        if self.connected {
            return Err(Error::AlreadyConnected);
        }

        debug!("Connected to {}", self.describe());
        self.connected = true;
        Ok(())
    }

    async fn disconnect(&mut self) -> Result<()> {
        if self.connected {
            debug!("Disconnecting from {}...", self.describe());
        }
        self.connected = false;
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    async fn fetch(&mut self) -> Result<FeedResult> {
        if !self.connected {
            return Err(Error::NotConnected);
        }

        let result = self.pending.pop_front().unwrap_or_default();
        self.fetches += 1;

        trace!("Fetched {} ({} queued)", result, self.pending.len());

        Ok(result)
    }

    fn describe(&self) -> String {
        format!("memory://{}", self.name)
    }
}
