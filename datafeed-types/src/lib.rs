//! Type definitions for datafeed
//!
//! Read-only telematics records produced by a feed source on every
//! acquisition cycle and consumed by the CSV export engine.

pub mod device;
pub mod entity;
pub mod feed_result;
pub mod record;

pub use device::{Device, DeviceKind};
pub use entity::{Diagnostic, DiagnosticKind, Driver, FailureMode, Key, NamedEntity};
pub use feed_result::FeedResult;
pub use record::{FaultData, LogRecord, StatusData, Trip};

/// Timestamp type shared by every record
pub type Timestamp = chrono::DateTime<chrono::Utc>;
