//! The default command: drive the lights from the button.

use std::path::Path;

use mutesync_driver::EventLoop;
use mutesync_transport::{PrinterConfig, Transport};
use tracing::info;

use super::{open_transport, setup_interrupt_handler, CommandResult};

/// Open the device and run the event loop until a transport error or Ctrl+C
pub fn run(port: Option<&Path>, printer_config: Option<PrinterConfig>) -> CommandResult {
    let transport = open_transport(port, printer_config)?;
    let running = setup_interrupt_handler();

    info!("Connected to {} (Ctrl+C to stop)", transport.device_info());

    let mut event_loop = EventLoop::new(transport).with_shutdown_flag(running);
    event_loop.run()?;
    Ok(())
}
