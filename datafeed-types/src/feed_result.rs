//! Result of one data feed cycle

use std::fmt;

use crate::{FaultData, LogRecord, StatusData, Trip};

/// Records returned by one acquisition cycle, one list per record kind
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedResult {
    pub gps_records: Vec<LogRecord>,
    pub status_data: Vec<StatusData>,
    pub fault_data: Vec<FaultData>,
    pub trips: Vec<Trip>,
}

impl FeedResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of records over all kinds
    pub fn len(&self) -> usize {
        self.gps_records.len() + self.status_data.len() + self.fault_data.len() + self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for FeedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FeedResult[gps: {}, status: {}, fault: {}, trips: {}]",
            self.gps_records.len(),
            self.status_data.len(),
            self.fault_data.len(),
            self.trips.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Device;

    #[test]
    fn test_empty_result() {
        let result = FeedResult::new();
        assert!(result.is_empty());
        assert_eq!(result.len(), 0);
        assert_eq!(result.to_string(), "FeedResult[gps: 0, status: 0, fault: 0, trips: 0]");
    }

    #[test]
    fn test_result_len() {
        let result = FeedResult {
            trips: vec![Trip::new(Device::new("Truck1")), Trip::new(Device::new("Truck2"))],
            ..Default::default()
        };
        assert_eq!(result.len(), 2);
        assert!(!result.is_empty());
    }
}
