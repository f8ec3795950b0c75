//! Record to CSV row transformers
//!
//! One stateless function per record kind. Every returned row has exactly
//! as many fields as the header of its kind, in the same order, and every
//! field is already escaped, so rows can be joined with the delimiter as is.
//! Missing values never fail a transform; they render as empty fields.

use datafeed_types::{Device, FailureMode, FaultData, FeedResult, LogRecord, StatusData, Trip};
use tracing::trace;

use crate::constants::{KEY_SEPARATOR, NO_FAILURE_MODE_SOURCE};
use crate::escape::{escape, sanitize};
use crate::format::{float, name, opt_date_time, opt_name, plain, text};
use crate::kind::RecordKind;

/// Transformed rows, one `Vec` of escaped fields per record
pub type Rows = Vec<Vec<String>>;

/// Transform GPS position reports
pub fn log_records(records: &[LogRecord]) -> Rows {
    trace!("Transforming {} log records", records.len());

    records
        .iter()
        .map(|record| {
            let [vehicle_name, serial_number, vin] = device_columns(&record.device);
            escape_row([
                vehicle_name,
                serial_number,
                vin,
                opt_date_time(record.date_time.as_ref()),
                float(record.longitude),
                float(record.latitude),
                float(record.speed),
            ])
        })
        .collect()
}

/// Transform status readings
pub fn status_data(records: &[StatusData]) -> Rows {
    trace!("Transforming {} status data", records.len());

    records
        .iter()
        .map(|data| {
            let [vehicle_name, serial_number, vin] = device_columns(&data.device);
            let diagnostic = &data.diagnostic;
            escape_row([
                vehicle_name,
                serial_number,
                vin,
                opt_date_time(data.date_time.as_ref()),
                name(&diagnostic.entity),
                plain(diagnostic.code),
                opt_name(diagnostic.source.as_ref()),
                float(data.data),
                opt_name(diagnostic.unit_of_measure()),
            ])
        })
        .collect()
}

/// Transform fault codes
pub fn fault_data(records: &[FaultData]) -> Rows {
    trace!("Transforming {} fault data", records.len());

    records
        .iter()
        .map(|data| {
            let [vehicle_name, serial_number, vin] = device_columns(&data.device);
            escape_row([
                vehicle_name,
                serial_number,
                vin,
                opt_date_time(data.date_time.as_ref()),
                name(&data.diagnostic.entity),
                sanitize(data.failure_mode.display_name()),
                plain(data.failure_mode.code()),
                failure_mode_source(&data.failure_mode),
                name(&data.controller),
                plain(data.count),
                plain(data.active),
                plain(data.malfunction_lamp),
                plain(data.red_stop_lamp),
                plain(data.amber_warning_lamp),
                plain(data.protect_warning_lamp),
                opt_date_time(data.dismiss_date_time.as_ref()),
                opt_name(data.dismiss_user.as_ref()),
            ])
        })
        .collect()
}

/// Transform trips
pub fn trips(records: &[Trip]) -> Rows {
    trace!("Transforming {} trips", records.len());

    records
        .iter()
        .map(|trip| {
            let [vehicle_name, serial_number, vin] = device_columns(&trip.device);
            let driver_keys = trip
                .driver
                .as_ref()
                .map(|driver| {
                    driver
                        .keys
                        .iter()
                        .map(|key| key.serial_number.as_str())
                        .collect::<Vec<_>>()
                        .join(KEY_SEPARATOR)
                })
                .unwrap_or_default();

            escape_row([
                vehicle_name,
                serial_number,
                vin,
                opt_name(trip.driver.as_ref().map(|driver| &driver.entity)),
                driver_keys,
                opt_date_time(trip.start.as_ref()),
                opt_date_time(trip.stop.as_ref()),
                float(trip.distance),
            ])
        })
        .collect()
}

/// Transform the records of one kind out of a feed result
pub fn rows(kind: RecordKind, result: &FeedResult) -> Rows {
    match kind {
        RecordKind::Position => log_records(&result.gps_records),
        RecordKind::Status => status_data(&result.status_data),
        RecordKind::Fault => fault_data(&result.fault_data),
        RecordKind::Trip => trips(&result.trips),
    }
}

/// Vehicle name, serial number and VIN
fn device_columns(device: &Device) -> [String; 3] {
    [
        sanitize(&device.name),
        device.serial_number.clone().unwrap_or_default(),
        text(device.vin()),
    ]
}

fn failure_mode_source(failure_mode: &FailureMode) -> String {
    match failure_mode {
        FailureMode::NoFailureMode => NO_FAILURE_MODE_SOURCE.to_string(),
        FailureMode::Resolved { source, .. } => opt_name(source.as_ref()),
    }
}

fn escape_row<const N: usize>(fields: [String; N]) -> Vec<String> {
    fields.into_iter().map(escape).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use datafeed_types::{Diagnostic, Driver, Key, NamedEntity, Timestamp};
    use pretty_assertions::assert_eq;

    fn ts() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 1, 17, 10, 30, 0).unwrap()
    }

    fn truck() -> Device {
        Device::new("Truck1").with_serial_number("S1")
    }

    #[test]
    fn test_empty_input() {
        assert!(log_records(&[]).is_empty());
        assert!(status_data(&[]).is_empty());
        assert!(fault_data(&[]).is_empty());
        assert!(trips(&[]).is_empty());
        assert!(rows(RecordKind::Fault, &FeedResult::default()).is_empty());
    }

    #[test]
    fn test_log_record_row() {
        let record = LogRecord {
            longitude: Some(10.0),
            speed: Some(5.0),
            ..LogRecord::new(truck(), ts())
        };

        assert_eq!(
            log_records(&[record]),
            vec![vec!["Truck1", "S1", "", "2024-01-17T10:30:00.000Z", "10.0", "", "5.0"]]
        );
    }

    #[test]
    fn test_log_record_all_nulls() {
        let record = LogRecord {
            device: Device::new("Truck1"),
            date_time: None,
            longitude: None,
            latitude: None,
            speed: None,
        };

        let rows = log_records(&[record]);
        assert_eq!(rows[0], vec!["Truck1", "", "", "", "", "", ""]);
        assert!(rows[0].iter().all(|field| field != "null"));
    }

    #[test]
    fn test_vin_only_for_vin_capable_device() {
        let plain_device = LogRecord::new(truck(), ts());
        let vin_device = LogRecord::new(truck().with_vin("1FT,FW1"), ts());

        let rows = log_records(&[plain_device, vin_device]);
        assert_eq!(rows[0][2], "");
        assert_eq!(rows[1][2], "1FT FW1");
    }

    #[test]
    fn test_device_name_delimiter_defense() {
        let record = LogRecord::new(Device::new("Truck, \"Big\"").with_serial_number("S,1"), ts());

        let row = &log_records(&[record])[0];
        assert_eq!(row[0], "\"Truck  \"\"Big\"\"\"");
        // serial numbers are escaped but not sanitized
        assert_eq!(row[1], "\"S,1\"");
    }

    #[test]
    fn test_status_data_measured_diagnostic() {
        let diagnostic = Diagnostic::new(NamedEntity::user("Engine speed"))
            .with_code(190)
            .with_source(NamedEntity::system("SourceJ1939"))
            .measured(NamedEntity::system("UnitOfMeasureRevolutionsPerMinute"));
        let data = StatusData {
            data: Some(1450.5),
            ..StatusData::new(truck(), ts(), diagnostic)
        };

        assert_eq!(
            status_data(&[data])[0],
            vec![
                "Truck1",
                "S1",
                "",
                "2024-01-17T10:30:00.000Z",
                "Engine speed",
                "190",
                "SourceJ1939",
                "1450.5",
                "UnitOfMeasureRevolutionsPerMinute",
            ]
        );
    }

    #[test]
    fn test_status_data_event_diagnostic_has_no_units() {
        let diagnostic = Diagnostic::new(NamedEntity::system("DiagnosticIgnitionId"));
        let data = StatusData::new(truck(), ts(), diagnostic);

        let row = &status_data(&[data])[0];
        assert_eq!(row.len(), RecordKind::Status.header().len());
        assert_eq!(row[4], "DiagnosticIgnitionId");
        assert_eq!(row[5], "");
        assert_eq!(row[6], "");
        assert_eq!(row[7], "");
        assert_eq!(row[8], "");
    }

    fn fault(failure_mode: FailureMode) -> FaultData {
        FaultData::new(
            truck(),
            ts(),
            Diagnostic::new(NamedEntity::user("Low coolant")),
            failure_mode,
            NamedEntity::system("ControllerNoneId"),
        )
    }

    #[test]
    fn test_fault_data_no_failure_mode_source() {
        let row = &fault_data(&[fault(FailureMode::NoFailureMode)])[0];

        assert_eq!(row.len(), RecordKind::Fault.header().len());
        assert_eq!(row[5], "NoFailureMode");
        assert_eq!(row[6], "");
        assert_eq!(row[7], "None");
    }

    #[test]
    fn test_fault_data_full_row() {
        let data = FaultData {
            count: Some(3),
            active: Some(true),
            malfunction_lamp: Some(false),
            red_stop_lamp: Some(true),
            amber_warning_lamp: None,
            protect_warning_lamp: Some(false),
            dismiss_date_time: Some(ts()),
            dismiss_user: Some(NamedEntity::user("Doe, Jane")),
            ..fault(FailureMode::Resolved {
                entity: NamedEntity::user("Voltage below normal"),
                code: Some(4),
                source: Some(NamedEntity::system("SourceJ1939")),
            })
        };

        assert_eq!(
            fault_data(&[data])[0],
            vec![
                "Truck1",
                "S1",
                "",
                "2024-01-17T10:30:00.000Z",
                "Low coolant",
                "Voltage below normal",
                "4",
                "SourceJ1939",
                "ControllerNoneId",
                "3",
                "true",
                "false",
                "true",
                "",
                "false",
                "2024-01-17T10:30:00.000Z",
                "Doe  Jane",
            ]
        );
    }

    #[test]
    fn test_trip_driver_keys() {
        let driver = Driver::new(NamedEntity::user("Jane Doe"))
            .with_keys([Key::new("K-1"), Key::new("K-2"), Key::new("K-3")]);
        let trip = Trip {
            driver: Some(driver),
            start: Some(ts()),
            distance: Some(12.5),
            ..Trip::new(truck().with_vin("VIN1"))
        };

        assert_eq!(
            trips(&[trip])[0],
            vec![
                "Truck1",
                "S1",
                "VIN1",
                "Jane Doe",
                "K-1~K-2~K-3",
                "2024-01-17T10:30:00.000Z",
                "",
                "12.5",
            ]
        );
    }

    #[test]
    fn test_trip_without_driver_or_keys() {
        let unknown = Trip::new(truck());
        let keyless = Trip {
            driver: Some(Driver::new(NamedEntity::system("UnknownDriver"))),
            ..Trip::new(truck())
        };

        let rows = trips(&[unknown, keyless]);
        assert_eq!(rows[0][3], "");
        assert_eq!(rows[0][4], "");
        assert_eq!(rows[1][3], "UnknownDriver");
        assert_eq!(rows[1][4], "");
    }

    #[test]
    fn test_rows_reparse_with_standard_reader() {
        let record = LogRecord::new(Device::new("Yard 4, \"west\"\nbay").with_serial_number("S1"), ts());
        let line = log_records(&[record])[0].join(",");

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(line.as_bytes());
        let parsed = reader.records().next().unwrap().unwrap();

        assert_eq!(parsed.len(), RecordKind::Position.header().len());
        assert_eq!(&parsed[0], "Yard 4  \"west\"\nbay");
    }
}
