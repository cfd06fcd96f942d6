//! Device discovery for the MuteSync

use tracing::{debug, info};

use crate::device_registry;
use crate::error::TransportError;
use crate::serial::SerialTransport;
use crate::types::{DiscoveredDevice, TransportDeviceInfo};

/// Serial port discovery keyed on the MuteSync's USB VID/PID
#[derive(Debug, Default)]
pub struct SerialDiscovery;

impl SerialDiscovery {
    pub fn new() -> Self {
        Self
    }

    /// List every serial port the OS reports, matching or not
    pub fn list_ports(&self) -> Result<Vec<DiscoveredDevice>, TransportError> {
        let ports = serialport::available_ports()?;
        Ok(ports
            .iter()
            .map(|p| DiscoveredDevice {
                info: TransportDeviceInfo::from(p),
            })
            .collect())
    }

    /// Find the first known device
    pub fn find_first(&self) -> Result<DiscoveredDevice, TransportError> {
        self.select(self.list_ports()?)
    }

    /// Pick the first known device out of an enumerated port list
    pub fn select(&self, ports: Vec<DiscoveredDevice>) -> Result<DiscoveredDevice, TransportError> {
        if ports.is_empty() {
            return Err(TransportError::DeviceNotFound(
                "No serial ports found".into(),
            ));
        }
        let device = Self::filter_known(ports)
            .into_iter()
            .next()
            .ok_or_else(|| TransportError::DeviceNotFound("No MuteSync found".into()))?;
        info!("Found MuteSync at {}", device.info);
        Ok(device)
    }

    fn filter_known(ports: Vec<DiscoveredDevice>) -> Vec<DiscoveredDevice> {
        ports
            .into_iter()
            .filter(|d| {
                let known = d
                    .info
                    .usb_ids()
                    .is_some_and(|(vid, pid)| device_registry::is_mutesync(vid, pid));
                if !known {
                    debug!("Skipping {}", d.info);
                }
                known
            })
            .collect()
    }

    /// Open a discovered device
    pub fn open_device(&self, device: &DiscoveredDevice) -> Result<SerialTransport, TransportError> {
        SerialTransport::open(device.info.clone())
    }

    /// Find and open the first known device
    pub fn open_first(&self) -> Result<SerialTransport, TransportError> {
        let device = self.find_first()?;
        self.open_device(&device)
    }

    /// Open a port by path, skipping enumeration matching
    ///
    /// USB metadata is filled in if the OS still lists the port.
    pub fn open_path(&self, path: &str) -> Result<SerialTransport, TransportError> {
        let info = self
            .list_ports()
            .ok()
            .and_then(|ports| ports.into_iter().find(|d| d.info.port_name == path))
            .map(|d| d.info)
            .unwrap_or_else(|| TransportDeviceInfo::from_path(path));
        SerialTransport::open(info)
    }
}
