//! Worker lifecycle coordination
//!
//! The coordinator owns the acquisition worker's state machine:
//!
//! ```text
//! Idle -> Starting -> Processing -> ShuttingDown -> Stopped
//!           |                                    \
//!           +--------------> Failed <-------------+
//! ```
//!
//! Shutdown can be requested from several places at once (the main control
//! flow and the termination signal handler). The stop-and-join sequence runs
//! exactly once; every other caller waits for that same run to complete.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::{watch, OnceCell};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use datafeed_core::CsvExporter;
use datafeed_source::FeedSource;

use crate::error::{Error, Result};
use crate::worker::FeedWorker;

/// Worker state
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WorkerState {
    /// Created, not started yet
    Idle,

    /// Connecting to the feed source
    Starting,

    /// Producing data
    Processing,

    /// Stop requested, finishing the cycle in flight
    ShuttingDown,

    /// Stopped cleanly
    Stopped,

    /// Stopped on error
    Failed,
}

impl WorkerState {
    /// Check if the worker is done (cleanly or not)
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Stopped | Self::Failed)
    }
}

impl fmt::Display for WorkerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Lifecycle coordinator for one acquisition worker
///
/// Thread-safe; share it with `Arc` between the main flow and the signal
/// handler.
pub struct Lifecycle {
    state: Arc<watch::Sender<WorkerState>>,

    /// Worker waiting for `start`
    worker: Mutex<Option<FeedWorker>>,

    /// Task running the worker
    handle: Mutex<Option<JoinHandle<Result<()>>>>,

    /// Outcome of the worker task, set once by the first joiner
    reaped: OnceCell<Option<String>>,

    /// Completion gate of the stop-and-join sequence
    stopped: OnceCell<()>,

    /// Set once the main control flow has finished
    unwound: watch::Sender<bool>,
}

impl Lifecycle {
    pub fn new(source: Box<dyn FeedSource>, exporter: CsvExporter, poll_interval: Duration) -> Self {
        let state = Arc::new(watch::Sender::new(WorkerState::Idle));
        let worker = FeedWorker::new(source, exporter, poll_interval, state.clone());

        Self {
            state,
            worker: Mutex::new(Some(worker)),
            handle: Mutex::new(None),
            reaped: OnceCell::new(),
            stopped: OnceCell::new(),
            unwound: watch::Sender::new(false),
        }
    }

    /// Get current state
    pub fn state(&self) -> WorkerState {
        *self.state.borrow()
    }

    /// Subscribe to state changes
    pub fn subscribe(&self) -> watch::Receiver<WorkerState> {
        self.state.subscribe()
    }

    /// Check if the worker has started producing data
    pub fn is_processing(&self) -> bool {
        self.state() == WorkerState::Processing
    }

    /// Spawn the worker on the current tokio runtime
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidState` if the worker was already started or
    /// shut down.
    pub fn start(&self) -> Result<()> {
        // held until the handle is stored, so shutdown sees either a pending
        // worker or a Starting one it can stop and reap
        let mut pending = self.worker.lock();
        let worker = pending.take().ok_or_else(|| {
            Error::InvalidState(format!("Cannot start worker from state: {}", self.state()))
        })?;

        // visible to request_stop before the task is first polled
        self.state.send_replace(WorkerState::Starting);

        debug!("Starting data feed worker");
        *self.handle.lock() = Some(tokio::spawn(worker.run()));
        drop(pending);
        Ok(())
    }

    /// Wait until the worker is processing
    ///
    /// Also returns when the worker finished or a stop was requested before
    /// it ever processed. Returns the state observed.
    pub async fn wait_until_processing(&self) -> WorkerState {
        let mut state_rx = self.state.subscribe();
        let observed = match state_rx
            .wait_for(|state| *state >= WorkerState::Processing)
            .await
        {
            Ok(state) => *state,
            Err(_) => self.state(),
        };
        observed
    }

    /// Ask the worker to stop after its current cycle, without waiting
    ///
    /// Returns `false` if the worker was not running.
    pub fn request_stop(&self) -> bool {
        self.state.send_if_modified(|state| match state {
            WorkerState::Starting | WorkerState::Processing => {
                *state = WorkerState::ShuttingDown;
                true
            }
            _ => false,
        })
    }

    /// Stop the worker and wait for it to finish
    ///
    /// Safe to call any number of times from any number of tasks: the stop
    /// sequence runs once and every caller returns after it completed, with
    /// the same outcome.
    pub async fn shutdown(&self) -> Result<()> {
        self.stopped
            .get_or_init(|| async {
                info!("Shutting down data feed worker...");

                let never_started = self.worker.lock().take().is_some();
                if never_started {
                    self.state.send_replace(WorkerState::Stopped);
                    return;
                }

                self.request_stop();
                self.reap().await;
            })
            .await;

        self.outcome()
    }

    /// Wait for the worker to finish, without asking it to stop
    ///
    /// No timeout: a cycle in flight is always allowed to complete.
    pub async fn join(&self) -> Result<()> {
        if self.state() == WorkerState::Idle {
            return Err(Error::InvalidState("Worker not started".into()));
        }

        self.reap().await;
        self.outcome()
    }

    /// Mark the main control flow as finished
    pub fn mark_unwound(&self) {
        self.unwound.send_replace(true);
    }

    /// Wait until `mark_unwound` was called
    pub async fn wait_unwound(&self) {
        let mut unwound_rx = self.unwound.subscribe();
        let _ = unwound_rx.wait_for(|unwound| *unwound).await;
    }

    async fn reap(&self) {
        self.reaped
            .get_or_init(|| async {
                let handle = self.handle.lock().take();
                let Some(handle) = handle else {
                    return None;
                };

                let failure = match handle.await {
                    Ok(Ok(())) => None,
                    Ok(Err(e)) => Some(e.to_string()),
                    Err(e) => {
                        error!("Data feed worker task aborted: {}", e);
                        Some(e.to_string())
                    }
                };

                self.state.send_if_modified(|state| {
                    if state.is_finished() {
                        false
                    } else {
                        *state = WorkerState::Failed;
                        true
                    }
                });

                failure
            })
            .await;
    }

    fn outcome(&self) -> Result<()> {
        match self.reaped.get() {
            Some(Some(failure)) => Err(Error::WorkerFailed(failure.clone())),
            _ => Ok(()),
        }
    }
}

impl fmt::Debug for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lifecycle")
            .field("state", &self.state())
            .field("unwound", &*self.unwound.borrow())
            .finish_non_exhaustive()
    }
}
