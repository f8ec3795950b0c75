//! Data feed configuration

use std::time::Duration;

use crate::error::{Error, Result};

/// Environment variable holding the output directory
pub const ENV_OUTPUT_PATH: &str = "DATAFEED_OUTPUT_PATH";

/// Environment variable enabling continuous feed (`true`/`false`)
pub const ENV_CONTINUOUS: &str = "DATAFEED_CONTINUOUS";

/// Environment variable holding the poll interval in seconds
pub const ENV_POLL_SECS: &str = "DATAFEED_POLL_SECS";

/// Default delay between two feed cycles
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Data feed run configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    /// CSV output directory (`None` or empty: current directory)
    pub output_path: Option<String>,

    /// Keep polling until stopped instead of running one cycle
    pub feed_continuously: bool,

    /// Delay between two feed cycles
    pub poll_interval: Duration,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            output_path: None,
            feed_continuously: false,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl FeedConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set CSV output directory
    pub fn with_output_path(mut self, output_path: impl Into<String>) -> Self {
        self.output_path = Some(output_path.into());
        self
    }

    /// Set continuous feed mode
    pub fn with_feed_continuously(mut self, feed_continuously: bool) -> Self {
        self.feed_continuously = feed_continuously;
        self
    }

    /// Set delay between feed cycles
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Load configuration from `DATAFEED_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key/value lookup
    ///
    /// Unset keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if a value cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_OUTPUT_PATH) {
            config.output_path = Some(path);
        }

        if let Some(value) = lookup(ENV_CONTINUOUS) {
            config.feed_continuously = parse_flag(ENV_CONTINUOUS, &value)?;
        }

        if let Some(value) = lookup(ENV_POLL_SECS) {
            let secs = value.trim().parse::<u64>().map_err(|e| {
                Error::Config(format!("{} must be a number of seconds, got {:?}: {}", ENV_POLL_SECS, value, e))
            })?;
            config.poll_interval = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }

    /// Check the configuration can be run
    pub fn validate(&self) -> Result<()> {
        if self.poll_interval.is_zero() {
            return Err(Error::Config("Poll interval must be greater than zero".into()));
        }
        Ok(())
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(Error::Config(format!("{} must be true or false, got {:?}", key, value))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = FeedConfig::default();
        assert_eq!(config.output_path, None);
        assert!(!config.feed_continuously);
        assert_eq!(config.poll_interval, DEFAULT_POLL_INTERVAL);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = FeedConfig::new()
            .with_output_path("out")
            .with_feed_continuously(true)
            .with_poll_interval(Duration::from_secs(5));

        assert_eq!(config.output_path.as_deref(), Some("out"));
        assert!(config.feed_continuously);
        assert_eq!(config.poll_interval, Duration::from_secs(5));
    }

    #[test]
    fn test_from_lookup() {
        let config = FeedConfig::from_lookup(lookup(&[
            (ENV_OUTPUT_PATH, "/tmp/feed"),
            (ENV_CONTINUOUS, "TRUE"),
            (ENV_POLL_SECS, " 10 "),
        ]))
        .unwrap();

        assert_eq!(config.output_path.as_deref(), Some("/tmp/feed"));
        assert!(config.feed_continuously);
        assert_eq!(config.poll_interval, Duration::from_secs(10));
    }

    #[test]
    fn test_from_lookup_empty() {
        let config = FeedConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, FeedConfig::default());
    }

    #[test]
    fn test_invalid_values() {
        let bad_flag = FeedConfig::from_lookup(lookup(&[(ENV_CONTINUOUS, "maybe")]));
        assert!(matches!(bad_flag, Err(Error::Config(_))));

        let bad_secs = FeedConfig::from_lookup(lookup(&[(ENV_POLL_SECS, "soon")]));
        assert!(matches!(bad_secs, Err(Error::Config(_))));

        let zero = FeedConfig::from_lookup(lookup(&[(ENV_POLL_SECS, "0")]));
        assert!(matches!(zero, Err(Error::Config(_))));
    }
}
