//! Transport and wire protocol for the MuteSync USB button
//!
//! This crate owns everything that touches bytes:
//!
//! - The color codec and 13-byte command frames (`command`)
//! - Classification of incoming button bytes (`event_parser`)
//! - The `Transport` trait and its serial-port backend
//! - Discovery of the device by USB VID/PID
//! - A monitoring middleware that prints all traffic (`printer`)

pub mod command;
pub mod device_registry;
pub mod error;
pub mod event_parser;
pub mod printer;
pub mod protocol;
pub mod types;

mod discovery;
mod serial;

pub use command::{
    encode_colors, encode_off, ColorError, DeviceCommand, Frame, ParseError, Rgb, Rgba,
    SetColors, OFF_FRAME,
};
pub use device_registry::{is_mutesync, PRODUCT_ID, VENDOR_ID};
pub use error::TransportError;
pub use event_parser::{parse_event, parse_events, DeviceEvent};
pub use printer::{PacketFilter, PrinterConfig, PrinterTransport};
pub use types::{DiscoveredDevice, TransportDeviceInfo};

pub use discovery::SerialDiscovery;
pub use serial::SerialTransport;

/// The core transport trait - a blocking duplex byte channel to the device
///
/// Implementations are owned by exactly one caller for their whole
/// lifetime, so every method takes `&mut self` and no locking is done.
pub trait Transport: Send {
    /// Write one complete frame; fire-and-forget, the device never acks
    fn write_frame(&mut self, frame: &Frame) -> Result<(), TransportError>;

    /// Block until event bytes arrive and copy them into `buf`
    ///
    /// # Returns
    /// Number of bytes read. `Err(TransportError::Timeout)` means the poll
    /// window passed with no data and the read may simply be retried.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, TransportError>;

    /// Get device information
    fn device_info(&self) -> &TransportDeviceInfo;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn write_frame(&mut self, frame: &Frame) -> Result<(), TransportError> {
        (**self).write_frame(frame)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, TransportError> {
        (**self).read(buf)
    }

    fn device_info(&self) -> &TransportDeviceInfo {
        (**self).device_info()
    }
}

/// Type alias for a boxed transport
pub type BoxedTransport = Box<dyn Transport>;
