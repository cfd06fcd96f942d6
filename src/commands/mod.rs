//! Command handlers for the CLI application.
//!
//! - `run`: the button event loop
//! - `utility`: one-shot commands (list, off)

pub mod run;
pub mod utility;

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Context;
use mutesync_transport::{
    BoxedTransport, PacketFilter, PrinterConfig, PrinterTransport, SerialDiscovery,
};
use tracing::info;

/// Result type for command handlers
pub type CommandResult = anyhow::Result<()>;

/// Open the device, either at an explicit path or by discovery.
/// If `printer_config` is Some, the transport is wrapped for monitoring.
pub fn open_transport(
    port: Option<&Path>,
    printer_config: Option<PrinterConfig>,
) -> anyhow::Result<BoxedTransport> {
    let discovery = SerialDiscovery::new();

    let transport = match port {
        Some(path) => {
            let path = path
                .to_str()
                .with_context(|| format!("Port path is not valid UTF-8: {}", path.display()))?;
            discovery.open_path(path)?
        }
        None => discovery.open_first()?,
    };

    let transport: BoxedTransport = Box::new(transport);
    Ok(match printer_config {
        Some(config) => {
            info!("Monitor mode enabled - printing all frames/events");
            PrinterTransport::wrap(transport, config)
        }
        None => transport,
    })
}

/// Set up a Ctrl-C handler that sets the given flag to false when triggered.
/// Returns the Arc<AtomicBool> for use in the main loop.
pub fn setup_interrupt_handler() -> Arc<AtomicBool> {
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = Arc::clone(&running);

    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .ok();

    running
}

/// Create printer config from CLI flags
pub fn create_printer_config(
    monitor: bool,
    hex: bool,
    filter: Option<&str>,
) -> anyhow::Result<Option<PrinterConfig>> {
    if !monitor {
        return Ok(None);
    }

    let filter = match filter {
        Some(f) => f.parse::<PacketFilter>().map_err(anyhow::Error::msg)?,
        None => PacketFilter::All,
    };

    Ok(Some(
        PrinterConfig::default().with_hex(hex).with_filter(filter),
    ))
}
