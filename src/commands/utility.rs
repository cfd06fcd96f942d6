//! Utility command handlers.

use std::path::Path;

use crossterm::style::Stylize;
use mutesync_transport::{encode_off, is_mutesync, PrinterConfig, SerialDiscovery, Transport};

use super::{open_transport, CommandResult};

/// List all serial ports
pub fn list() -> CommandResult {
    let ports = SerialDiscovery::new().list_ports()?;
    if ports.is_empty() {
        println!("No serial ports found");
        return Ok(());
    }

    println!("Serial ports:");
    for port in &ports {
        let info = &port.info;
        let line = match info.usb_ids() {
            Some((vid, pid)) => format!(
                "  {}  VID={:04x} PID={:04x}  {}",
                info.port_name,
                vid,
                pid,
                info.product_name.as_deref().unwrap_or("")
            ),
            None => format!("  {}", info.port_name),
        };

        if info.usb_ids().is_some_and(|(vid, pid)| is_mutesync(vid, pid)) {
            println!("{}  {}", line, "<- MuteSync".green().bold());
        } else {
            println!("{line}");
        }
    }
    Ok(())
}

/// Turn all segments off
pub fn off(port: Option<&Path>, printer_config: Option<PrinterConfig>) -> CommandResult {
    let mut transport = open_transport(port, printer_config)?;
    transport.write_frame(&encode_off())?;
    println!("Lights off on {}", transport.device_info());
    Ok(())
}
