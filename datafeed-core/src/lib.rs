//! # datafeed-core
//!
//! CSV export engine for telematics data feed results.
//!
//! This crate provides:
//! - Field sanitizing and CSV escaping
//! - Value formatting shared by all record kinds
//! - Record kinds with their fixed headers and file prefixes
//! - Row transformers, one per record kind
//! - The exporter writing timestamped, append-only CSV files

pub mod constants;
pub mod error;
pub mod escape;
pub mod export;
pub mod format;
pub mod kind;
pub mod transform;

pub use error::{Error, Result};
pub use export::{CsvExporter, ExportSummary, ExportedFile};
pub use kind::RecordKind;
pub use transform::Rows;
