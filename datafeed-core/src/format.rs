//! Value to text conversion shared by all transformers
//!
//! Absent values always render as an empty string.

use std::fmt::Debug;

use datafeed_types::{NamedEntity, Timestamp};

use crate::constants::DATE_TIME_FORMAT;
use crate::escape::sanitize;

/// Render a timestamp in the canonical export format
pub fn date_time(value: &Timestamp) -> String {
    value.format(DATE_TIME_FORMAT).to_string()
}

/// Render an optional timestamp
pub fn opt_date_time(value: Option<&Timestamp>) -> String {
    value.map(date_time).unwrap_or_default()
}

/// Render an optional float
///
/// Uses the shortest representation that round-trips and always keeps a
/// fractional part (`10.0`, not `10`). Magnitudes of `1e16` and above or
/// below `1e-4` switch to exponent form (`1e16`, `1e-7`), which standard
/// CSV consumers still read as numbers.
pub fn float<T: Debug>(value: Option<T>) -> String {
    value.map(|v| format!("{:?}", v)).unwrap_or_default()
}

/// Render an optional integer or flag
pub fn plain<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Render optional free text with delimiters replaced
pub fn text(value: Option<&str>) -> String {
    value.map(sanitize).unwrap_or_default()
}

/// Display name of an entity with delimiters replaced
pub fn name(entity: &NamedEntity) -> String {
    sanitize(entity.display_name())
}

/// Display name of an optional entity
pub fn opt_name(entity: Option<&NamedEntity>) -> String {
    entity.map(name).unwrap_or_default()
}
