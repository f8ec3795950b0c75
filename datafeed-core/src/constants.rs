//! Export constants

/// Column delimiter
pub const DELIMITER: char = ',';

/// Separator between the serial numbers of a driver's keys
pub const KEY_SEPARATOR: &str = "~";

/// Line separator written between rows
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";

/// Line separator written between rows
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Output directory used when none is configured
pub const DEFAULT_OUTPUT_PATH: &str = ".";

/// Canonical format of every timestamp column (UTC, milliseconds)
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Timestamp part of generated file names (UTC, seconds)
pub const FILE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";

/// Failure mode source column value for the `NoFailureMode` sentinel
pub const NO_FAILURE_MODE_SOURCE: &str = "None";

/// File name prefixes
pub mod prefixes {
    pub const GPS_DATA: &str = "Gps_Data";
    pub const STATUS_DATA: &str = "Status_Data";
    pub const FAULT_DATA: &str = "Fault_Data";
    pub const TRIPS: &str = "Trips";
}

/// Header rows, one per record kind
pub mod headers {
    pub const GPS_DATA: [&str; 7] = [
        "Vehicle Name",
        "Vehicle Serial Number",
        "VIN",
        "Date",
        "Longitude",
        "Latitude",
        "Speed",
    ];

    pub const STATUS_DATA: [&str; 9] = [
        "Vehicle Name",
        "Vehicle Serial Number",
        "VIN",
        "Date",
        "Diagnostic Name",
        "Diagnostic Code",
        "Source Name",
        "Value",
        "Units",
    ];

    pub const FAULT_DATA: [&str; 17] = [
        "Vehicle Name",
        "Vehicle Serial Number",
        "VIN",
        "Date",
        "Diagnostic Name",
        "Failure Mode Name",
        "Failure Mode Code",
        "Failure Mode Source",
        "Controller Name",
        "Count",
        "Active",
        "Malfunction Lamp",
        "Red Stop Lamp",
        "Amber Warning Lamp",
        "Protect Lamp",
        "Dismiss Date",
        "Dismiss User",
    ];

    pub const TRIPS: [&str; 8] = [
        "Vehicle Name",
        "Vehicle Serial Number",
        "Vin",
        "Driver Name",
        "Driver Keys",
        "Trip Start Time",
        "Trip End Time",
        "Trip Distance",
    ];
}
