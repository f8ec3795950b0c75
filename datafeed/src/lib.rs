//! # datafeed
//!
//! Telematics data feed exporter: pulls GPS, status, fault and trip records
//! from a feed source and appends them to timestamped CSV files.
//!
//! ## Features
//!
//! - Async/await API using Tokio
//! - One-shot or continuous feed
//! - Exactly-once shutdown, whether requested by the run loop or Ctrl+C
//! - CSV-safe output for free-text fields
//!
//! ## Quick Start
//!
//! ```no_run
//! use datafeed::{FeedConfig, MemorySource};
//!
//! #[tokio::main]
//! async fn main() -> datafeed::Result<()> {
//!     let config = FeedConfig::new().with_output_path("feed");
//!
//!     // Run one fetch + export cycle
//!     datafeed::run(config, Box::new(MemorySource::new("demo"))).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod worker;

// Re-exports
pub use app::{run, run_until};
pub use config::FeedConfig;
pub use error::{Error, Result};
pub use lifecycle::{Lifecycle, WorkerState};
pub use worker::FeedWorker;

pub use datafeed_core::{CsvExporter, ExportSummary, RecordKind};
pub use datafeed_source::{FeedSource, MemorySource};
pub use datafeed_types::{
    Device, Diagnostic, Driver, FailureMode, FaultData, FeedResult, Key, LogRecord,
    NamedEntity, StatusData, Trip,
};
