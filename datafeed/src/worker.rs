//! Data feed acquisition worker
//!
//! The worker connects to its feed source, then runs cycles of
//! fetch + export until a stop is requested. A stop request never interrupts
//! a cycle in flight: it is only observed between cycles and while waiting
//! for the next one, so CSV files are never left half written.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use datafeed_core::CsvExporter;
use datafeed_source::FeedSource;

use crate::error::{Error, Result};
use crate::lifecycle::WorkerState;

/// Acquisition worker, run on its own task by the lifecycle coordinator
pub struct FeedWorker {
    source: Box<dyn FeedSource>,
    exporter: CsvExporter,
    poll_interval: Duration,
    state: Arc<watch::Sender<WorkerState>>,
}

impl FeedWorker {
    pub fn new(
        source: Box<dyn FeedSource>,
        exporter: CsvExporter,
        poll_interval: Duration,
        state: Arc<watch::Sender<WorkerState>>,
    ) -> Self {
        Self {
            source,
            exporter,
            poll_interval,
            state,
        }
    }

    /// Run until stopped
    ///
    /// Publishes `Stopped` on a clean exit and `Failed` when the source
    /// could not be connected or failed with a non-recoverable error.
    pub async fn run(mut self) -> Result<()> {
        // Lifecycle::start already published Starting
        self.transition(WorkerState::Idle, WorkerState::Starting);

        info!("Connecting to {}...", self.source.describe());

        let outcome = match self.source.connect().await {
            Ok(()) => self.poll().await,
            Err(e) => Err(e.into()),
        };

        if let Err(e) = self.source.disconnect().await {
            warn!("Failed to disconnect from {}: {}", self.source.describe(), e);
        }

        match &outcome {
            Ok(()) => {
                self.state.send_replace(WorkerState::Stopped);
                info!("Data feed worker stopped");
            }
            Err(e) => {
                self.state.send_replace(WorkerState::Failed);
                error!("Data feed worker failed: {}", e);
            }
        }

        outcome
    }

    async fn poll(&mut self) -> Result<()> {
        let mut state_rx = self.state.subscribe();

        while !self.stop_requested() {
            if self.transition(WorkerState::Starting, WorkerState::Processing) {
                info!("Processing data feed from {}", self.source.describe());
            }

            self.cycle().await?;

            tokio::select! {
                _ = tokio::time::sleep(self.poll_interval) => {}
                _ = wait_for_stop(&mut state_rx) => {}
            }
        }

        debug!("Stop requested, leaving feed loop");
        Ok(())
    }

    /// Fetch one result and export it
    ///
    /// Recoverable source errors and export failures only abort this cycle.
    async fn cycle(&mut self) -> Result<()> {
        let result = match self.source.fetch().await {
            Ok(result) => result,
            Err(e) if e.is_recoverable() => {
                warn!("Fetch failed, retrying next cycle: {}", e);
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        debug!("Received {}", result);

        let exporter = self.exporter.clone();
        let export = tokio::task::spawn_blocking(move || exporter.export(&result))
            .await
            .map_err(|e| Error::WorkerFailed(format!("Export task failed: {}", e)))?;

        match export {
            Ok(summary) => debug!(
                "Exported {} rows to {} files",
                summary.rows(),
                summary.files.len()
            ),
            Err(e) => error!("Export aborted for this cycle: {}", e),
        }

        Ok(())
    }

    fn stop_requested(&self) -> bool {
        *self.state.borrow() == WorkerState::ShuttingDown
    }

    fn transition(&self, from: WorkerState, to: WorkerState) -> bool {
        self.state.send_if_modified(|state| {
            if *state == from {
                *state = to;
                true
            } else {
                false
            }
        })
    }
}

async fn wait_for_stop(state_rx: &mut watch::Receiver<WorkerState>) {
    let _ = state_rx
        .wait_for(|state| *state == WorkerState::ShuttingDown)
        .await;
}
