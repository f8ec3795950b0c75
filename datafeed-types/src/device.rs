//! Telematics device structures

use std::fmt;

/// Device variant
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeviceKind {
    /// Device that does not report a vehicle identification number
    #[default]
    Basic,

    /// Device capable of reading the vehicle identification number
    VinCapable {
        /// VIN as reported by the vehicle (may not have been read yet)
        vin: Option<String>,
    },
}

/// Telematics device installed in a vehicle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    /// Device (vehicle) name
    pub name: String,

    /// Hardware serial number
    pub serial_number: Option<String>,

    /// Device variant
    pub kind: DeviceKind,
}

impl Device {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            serial_number: None,
            kind: DeviceKind::Basic,
        }
    }

    /// Set hardware serial number
    pub fn with_serial_number(mut self, serial_number: impl Into<String>) -> Self {
        self.serial_number = Some(serial_number.into());
        self
    }

    /// Turn this into a VIN-capable device reporting `vin`
    pub fn with_vin(mut self, vin: impl Into<String>) -> Self {
        self.kind = DeviceKind::VinCapable {
            vin: Some(vin.into()),
        };
        self
    }

    /// VIN, only ever present for VIN-capable devices
    pub fn vin(&self) -> Option<&str> {
        match &self.kind {
            DeviceKind::Basic => None,
            DeviceKind::VinCapable { vin } => vin.as_deref(),
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Device[{}, SN: {}]",
            self.name,
            self.serial_number.as_deref().unwrap_or("-")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_device_has_no_vin() {
        let device = Device::new("Truck1").with_serial_number("S1");
        assert_eq!(device.vin(), None);
        assert_eq!(device.kind, DeviceKind::Basic);
    }

    #[test]
    fn test_vin_capable_device() {
        let device = Device::new("Truck1").with_vin("1FTFW1ET5DFC10312");
        assert_eq!(device.vin(), Some("1FTFW1ET5DFC10312"));

        let unread = Device {
            kind: DeviceKind::VinCapable { vin: None },
            ..Device::new("Truck2")
        };
        assert_eq!(unread.vin(), None);
    }

    #[test]
    fn test_device_display() {
        let device = Device::new("Truck1").with_serial_number("S1");
        assert_eq!(device.to_string(), "Device[Truck1, SN: S1]");
        assert_eq!(Device::new("Van").to_string(), "Device[Van, SN: -]");
    }
}
