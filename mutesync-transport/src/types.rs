//! Common types for transport layer

use std::fmt;

use serialport::{SerialPortInfo, SerialPortType};

/// Device identification information
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransportDeviceInfo {
    /// OS path of the serial port (e.g. `/dev/ttyUSB0`, `COM3`)
    pub port_name: String,
    /// USB Vendor ID, if the port is USB-backed
    pub vid: Option<u16>,
    /// USB Product ID, if the port is USB-backed
    pub pid: Option<u16>,
    /// Serial number if available
    pub serial: Option<String>,
    /// Manufacturer string if available
    pub manufacturer: Option<String>,
    /// Product name if available
    pub product_name: Option<String>,
}

impl TransportDeviceInfo {
    /// Info for a port opened by path, with no USB metadata
    pub fn from_path(path: impl Into<String>) -> Self {
        Self {
            port_name: path.into(),
            ..Self::default()
        }
    }

    /// USB VID/PID pair, if both are known
    pub fn usb_ids(&self) -> Option<(u16, u16)> {
        self.vid.zip(self.pid)
    }
}

impl From<&SerialPortInfo> for TransportDeviceInfo {
    fn from(port: &SerialPortInfo) -> Self {
        match &port.port_type {
            SerialPortType::UsbPort(usb) => Self {
                port_name: port.port_name.clone(),
                vid: Some(usb.vid),
                pid: Some(usb.pid),
                serial: usb.serial_number.clone(),
                manufacturer: usb.manufacturer.clone(),
                product_name: usb.product.clone(),
            },
            _ => Self::from_path(port.port_name.clone()),
        }
    }
}

impl fmt::Display for TransportDeviceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.usb_ids() {
            Some((vid, pid)) => write!(f, "{} ({:04X}:{:04X})", self.port_name, vid, pid),
            None => f.write_str(&self.port_name),
        }
    }
}

/// Discovered device that can be opened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredDevice {
    /// Device information
    pub info: TransportDeviceInfo,
}
