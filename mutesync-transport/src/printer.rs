//! PrinterTransport middleware for monitoring transport traffic
//!
//! Wraps any Transport implementation and prints every frame written and
//! every event byte read to stderr.
//!
//! # Example
//!
//! ```ignore
//! use mutesync_transport::{PrinterConfig, PrinterTransport, SerialDiscovery};
//!
//! let transport = SerialDiscovery::new().open_first()?;
//! let monitored = PrinterTransport::wrap(Box::new(transport), PrinterConfig::default());
//! ```

use std::str::FromStr;

use crossterm::style::Stylize;

use crate::command::Frame;
use crate::event_parser::{parse_events, DeviceEvent};
use crate::{Transport, TransportDeviceInfo, TransportError};

/// Packet filter for selective display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PacketFilter {
    #[default]
    All,
    /// Incoming button bytes only
    Events,
    /// Outgoing frames only
    Frames,
}

impl FromStr for PacketFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" | "" => Ok(Self::All),
            "events" | "event" | "evt" => Ok(Self::Events),
            "frames" | "frame" | "cmd" | "commands" => Ok(Self::Frames),
            _ => Err(format!("Unknown filter: {}", s)),
        }
    }
}

/// Configuration for the PrinterTransport
#[derive(Debug, Clone, Default)]
pub struct PrinterConfig {
    /// Show raw hex dump alongside decoded output
    pub show_hex: bool,
    /// Filter for selective display
    pub filter: PacketFilter,
}

impl PrinterConfig {
    pub fn with_hex(mut self, show: bool) -> Self {
        self.show_hex = show;
        self
    }

    pub fn with_filter(mut self, filter: PacketFilter) -> Self {
        self.filter = filter;
        self
    }
}

/// Transport middleware that prints all traffic
pub struct PrinterTransport {
    inner: Box<dyn Transport>,
    config: PrinterConfig,
}

impl PrinterTransport {
    /// Wrap a transport with printing middleware
    pub fn wrap(transport: Box<dyn Transport>, config: PrinterConfig) -> Box<dyn Transport> {
        Box::new(Self {
            inner: transport,
            config,
        })
    }

    fn should_show_frames(&self) -> bool {
        matches!(self.config.filter, PacketFilter::All | PacketFilter::Frames)
    }

    fn should_show_events(&self) -> bool {
        matches!(self.config.filter, PacketFilter::All | PacketFilter::Events)
    }

    fn print_frame(&self, frame: &Frame) {
        if !self.should_show_frames() {
            return;
        }

        let label = if frame.is_off() { "OFF" } else { "SET" };
        eprintln!("{} {}  {}", ">>>".cyan(), label.cyan().bold(), frame);

        if self.config.show_hex {
            eprintln!("    {}  {:02x?}", "HEX".dim(), frame.as_bytes());
        }
    }

    fn print_events(&self, data: &[u8]) {
        if !self.should_show_events() {
            return;
        }

        for event in parse_events(data) {
            match event {
                DeviceEvent::Unrecognized(_) => {
                    eprintln!("{} {}  {}", "<<<".yellow(), "EVT".yellow().bold(), event.to_string().red())
                }
                _ => eprintln!("{} {}  {}", "<<<".green(), "EVT".green().bold(), event),
            }
        }

        if self.config.show_hex {
            eprintln!("    {}  {:02x?}", "HEX".dim(), data);
        }
    }
}

impl Transport for PrinterTransport {
    fn write_frame(&mut self, frame: &Frame) -> Result<(), TransportError> {
        self.print_frame(frame);
        self.inner.write_frame(frame)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, TransportError> {
        let n = self.inner.read(buf)?;
        if n > 0 {
            self.print_events(&buf[..n]);
        }
        Ok(n)
    }

    fn device_info(&self) -> &TransportDeviceInfo {
        self.inner.device_info()
    }
}
