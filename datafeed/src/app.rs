//! Top-level run loop
//!
//! Wires configuration, exporter, worker and the termination signal handler
//! together the way a console application runs a data feed.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, error, info};

use datafeed_core::CsvExporter;
use datafeed_source::FeedSource;

use crate::config::FeedConfig;
use crate::error::Result;
use crate::lifecycle::Lifecycle;

/// Run a data feed until done
///
/// In one-shot mode the worker is stopped as soon as it starts processing,
/// which lets exactly one cycle complete. In continuous mode it runs until
/// Ctrl+C. Either way the worker is stopped and joined exactly once.
///
/// # Errors
///
/// - `Error::Config` if `config` is invalid; the source is never contacted
/// - `Error::Export` if the output directory cannot be created
/// - `Error::WorkerFailed` if the worker stopped on an error
pub async fn run(config: FeedConfig, source: Box<dyn FeedSource>) -> Result<()> {
    run_until(config, source, ctrl_c()).await
}

/// Run a data feed until done or until `terminate` completes
///
/// Same as [`run`] with a custom termination trigger in place of Ctrl+C.
pub async fn run_until<F>(
    config: FeedConfig,
    source: Box<dyn FeedSource>,
    terminate: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    config.validate()?;

    let exporter = CsvExporter::new(config.output_path.as_deref())?;
    let lifecycle = Arc::new(Lifecycle::new(source, exporter, config.poll_interval));

    let interrupted = Arc::new(AtomicBool::new(false));
    let signal_task = tokio::spawn(handle_shutdown_signal(
        lifecycle.clone(),
        interrupted.clone(),
        terminate,
    ));

    let outcome = drive(&lifecycle, config.feed_continuously).await;
    if let Err(e) = &outcome {
        error!("Data feed stopped: {}", e);
    }

    lifecycle.mark_unwound();

    if interrupted.load(Ordering::Acquire) {
        // let the handler finish its shutdown logging
        let _ = signal_task.await;
    } else {
        signal_task.abort();
    }

    outcome
}

async fn drive(lifecycle: &Lifecycle, feed_continuously: bool) -> Result<()> {
    if let Err(e) = lifecycle.start() {
        // terminated before the worker could be started
        if lifecycle.state().is_finished() {
            debug!("Shutdown requested before start");
            return lifecycle.shutdown().await;
        }
        return Err(e);
    }

    if !feed_continuously {
        // shutdown only after it started processing
        let state = lifecycle.wait_until_processing().await;
        debug!("Worker reached {}, stopping one-shot feed", state);
        lifecycle.shutdown().await?;
    }

    lifecycle.join().await
}

async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        // never terminate
        std::future::pending::<()>().await;
    }
    info!("Received Ctrl+C, shutting down...");
}

async fn handle_shutdown_signal<F>(lifecycle: Arc<Lifecycle>, interrupted: Arc<AtomicBool>, terminate: F)
where
    F: Future<Output = ()>,
{
    terminate.await;
    interrupted.store(true, Ordering::Release);

    if let Err(e) = lifecycle.shutdown().await {
        error!("{}", e);
    }

    lifecycle.wait_unwound().await;
    debug!("Application stopped");
}
