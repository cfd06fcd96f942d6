//! Classification of incoming device bytes
//!
//! The device reports button state as single unframed bytes. Every byte
//! read is one event; anything outside the known set is passed through as
//! `Unrecognized` so callers can log it and move on.

use std::fmt;

use crate::protocol::event;

/// A single event reported by the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceEvent {
    /// Button went down
    ButtonPressed,
    /// Button came back up
    ButtonReleased,
    /// Byte outside the protocol; ignored
    Unrecognized(u8),
}

impl DeviceEvent {
    /// Raw wire byte for this event
    pub fn byte(self) -> u8 {
        match self {
            Self::ButtonPressed => event::BUTTON_PRESSED,
            Self::ButtonReleased => event::BUTTON_RELEASED,
            Self::Unrecognized(b) => b,
        }
    }

    pub fn is_recognized(self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl From<u8> for DeviceEvent {
    fn from(byte: u8) -> Self {
        parse_event(byte)
    }
}

impl fmt::Display for DeviceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrecognized(b) => write!(f, "UNRECOGNIZED(0x{b:02x})"),
            other => f.write_str(event::name(other.byte())),
        }
    }
}

/// Classify one byte
pub fn parse_event(byte: u8) -> DeviceEvent {
    match byte {
        event::BUTTON_PRESSED => DeviceEvent::ButtonPressed,
        event::BUTTON_RELEASED => DeviceEvent::ButtonReleased,
        other => DeviceEvent::Unrecognized(other),
    }
}

/// Classify a chunk of bytes in arrival order
pub fn parse_events(data: &[u8]) -> impl Iterator<Item = DeviceEvent> + '_ {
    data.iter().copied().map(parse_event)
}
