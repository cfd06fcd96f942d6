//! Serial transport over the device's CP210x USB-UART bridge

use std::io::{Read, Write};
use std::time::Duration;

use serialport::SerialPort;
use tracing::{debug, info};

use crate::command::Frame;
use crate::error::TransportError;
use crate::protocol::{serial, timing};
use crate::types::TransportDeviceInfo;
use crate::Transport;

/// Transport for a MuteSync attached over USB serial
///
/// The port is opened with the bridge's default line settings; no parity
/// or flow control is configured. Reads block for at most one poll window
/// and report `TransportError::Timeout` when it passes empty.
pub struct SerialTransport {
    port: Box<dyn SerialPort>,
    info: TransportDeviceInfo,
}

impl SerialTransport {
    /// Open the serial port described by `info`
    pub fn open(info: TransportDeviceInfo) -> Result<Self, TransportError> {
        let port = serialport::new(&info.port_name, serial::DEFAULT_BAUD_RATE)
            .timeout(Duration::from_millis(timing::READ_POLL_MS))
            .open()
            .map_err(|source| TransportError::OpenFailed {
                path: info.port_name.clone(),
                source,
            })?;

        info!("Opened {}", info);
        Ok(Self { port, info })
    }
}

impl Transport for SerialTransport {
    fn write_frame(&mut self, frame: &Frame) -> Result<(), TransportError> {
        debug!("Sending frame: {:02X?}", frame.as_bytes());
        self.port
            .write_all(frame.as_bytes())
            .map_err(TransportError::from_io)?;
        self.port.flush().map_err(TransportError::from_io)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, TransportError> {
        let n = self.port.read(buf).map_err(TransportError::from_io)?;
        if n > 0 {
            debug!("Read {} bytes: {:02X?}", n, &buf[..n]);
        }
        Ok(n)
    }

    fn device_info(&self) -> &TransportDeviceInfo {
        &self.info
    }
}
