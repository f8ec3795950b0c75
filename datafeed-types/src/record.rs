//! Telematics records returned by the data feed

use crate::{Device, Diagnostic, Driver, FailureMode, NamedEntity, Timestamp};

/// GPS position report
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub device: Device,
    pub date_time: Option<Timestamp>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,

    /// Speed in km/h
    pub speed: Option<f32>,
}

impl LogRecord {
    pub fn new(device: Device, date_time: Timestamp) -> Self {
        Self {
            device,
            date_time: Some(date_time),
            longitude: None,
            latitude: None,
            speed: None,
        }
    }
}

/// Engine or sensor status reading
#[derive(Debug, Clone, PartialEq)]
pub struct StatusData {
    pub device: Device,
    pub date_time: Option<Timestamp>,
    pub diagnostic: Diagnostic,

    /// Reading value
    pub data: Option<f64>,
}

impl StatusData {
    pub fn new(device: Device, date_time: Timestamp, diagnostic: Diagnostic) -> Self {
        Self {
            device,
            date_time: Some(date_time),
            diagnostic,
            data: None,
        }
    }
}

/// Fault code reported by the vehicle or device
#[derive(Debug, Clone, PartialEq)]
pub struct FaultData {
    pub device: Device,
    pub date_time: Option<Timestamp>,
    pub diagnostic: Diagnostic,
    pub failure_mode: FailureMode,
    pub controller: NamedEntity,

    /// Number of times the fault occurred
    pub count: Option<i32>,

    /// Whether the fault is currently active
    pub active: Option<bool>,

    pub malfunction_lamp: Option<bool>,
    pub red_stop_lamp: Option<bool>,
    pub amber_warning_lamp: Option<bool>,
    pub protect_warning_lamp: Option<bool>,

    pub dismiss_date_time: Option<Timestamp>,
    pub dismiss_user: Option<NamedEntity>,
}

impl FaultData {
    pub fn new(
        device: Device,
        date_time: Timestamp,
        diagnostic: Diagnostic,
        failure_mode: FailureMode,
        controller: NamedEntity,
    ) -> Self {
        Self {
            device,
            date_time: Some(date_time),
            diagnostic,
            failure_mode,
            controller,
            count: None,
            active: None,
            malfunction_lamp: None,
            red_stop_lamp: None,
            amber_warning_lamp: None,
            protect_warning_lamp: None,
            dismiss_date_time: None,
            dismiss_user: None,
        }
    }
}

/// Completed or in-progress trip
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub device: Device,

    /// `None` when the driver is unknown
    pub driver: Option<Driver>,

    pub start: Option<Timestamp>,
    pub stop: Option<Timestamp>,

    /// Distance in km
    pub distance: Option<f32>,
}

impl Trip {
    pub fn new(device: Device) -> Self {
        Self {
            device,
            driver: None,
            start: None,
            stop: None,
            distance: None,
        }
    }
}
