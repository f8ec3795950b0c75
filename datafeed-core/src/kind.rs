//! Record kinds and their fixed file layout

use std::fmt;

use crate::constants::{headers, prefixes};

/// Kind of record exported to its own CSV file
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// GPS position reports
    Position,
    /// Status (engine/sensor) readings
    Status,
    /// Fault codes
    Fault,
    /// Trip summaries
    Trip,
}

impl RecordKind {
    /// All kinds, in export order
    pub const ALL: [RecordKind; 4] = [
        RecordKind::Position,
        RecordKind::Status,
        RecordKind::Fault,
        RecordKind::Trip,
    ];

    /// File name prefix
    pub fn file_prefix(self) -> &'static str {
        match self {
            Self::Position => prefixes::GPS_DATA,
            Self::Status => prefixes::STATUS_DATA,
            Self::Fault => prefixes::FAULT_DATA,
            Self::Trip => prefixes::TRIPS,
        }
    }

    /// Header row
    pub fn header(self) -> &'static [&'static str] {
        match self {
            Self::Position => &headers::GPS_DATA,
            Self::Status => &headers::STATUS_DATA,
            Self::Fault => &headers::FAULT_DATA,
            Self::Trip => &headers::TRIPS,
        }
    }

    /// Get kind name (for logging)
    pub fn name(self) -> &'static str {
        match self {
            Self::Position => "LogRecords",
            Self::Status => "StatusData",
            Self::Fault => "FaultData",
            Self::Trip => "Trips",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_prefixes() {
        assert_eq!(RecordKind::Position.file_prefix(), "Gps_Data");
        assert_eq!(RecordKind::Status.file_prefix(), "Status_Data");
        assert_eq!(RecordKind::Fault.file_prefix(), "Fault_Data");
        assert_eq!(RecordKind::Trip.file_prefix(), "Trips");
    }

    #[test]
    fn test_header_widths() {
        assert_eq!(RecordKind::Position.header().len(), 7);
        assert_eq!(RecordKind::Status.header().len(), 9);
        assert_eq!(RecordKind::Fault.header().len(), 17);
        assert_eq!(RecordKind::Trip.header().len(), 8);
    }

    #[test]
    fn test_position_header_text() {
        assert_eq!(
            RecordKind::Position.header().join(","),
            "Vehicle Name,Vehicle Serial Number,VIN,Date,Longitude,Latitude,Speed"
        );
    }

    #[test]
    fn test_export_order() {
        assert_eq!(RecordKind::ALL[0], RecordKind::Position);
        assert_eq!(RecordKind::ALL[3], RecordKind::Trip);
        assert_eq!(RecordKind::Fault.to_string(), "FaultData");
    }
}
