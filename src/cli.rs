// CLI definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mutesync_driver")]
#[command(author, version, about = "MuteSync USB button driver")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Serial port to open instead of searching for the device
    #[arg(long, global = true, value_name = "PATH")]
    pub port: Option<PathBuf>,

    /// Print every frame and event crossing the transport
    #[arg(long, global = true)]
    pub monitor: bool,

    /// Show raw hex dump alongside monitor output
    #[arg(long, global = true)]
    pub hex: bool,

    /// Monitor filter (all, events, frames)
    #[arg(long, global = true)]
    pub filter: Option<String>,

    /// Log level (error, warn, info, debug, trace); RUST_LOG overrides
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the button event loop (default)
    Run,

    /// List serial ports and mark the MuteSync
    #[command(visible_aliases = ["ls", "l"])]
    List,

    /// Turn all lights off and exit
    Off,
}
