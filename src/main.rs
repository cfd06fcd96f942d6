//! MuteSync Driver CLI
//!
//! Finds the MuteSync button on its USB serial port and lights it up
//! while the button is held.

use clap::Parser;

// CLI definitions
mod cli;
use cli::{Cli, Commands};

// Command handlers
mod commands;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    dispatch(cli)
}

/// Run the selected command
fn dispatch(cli: Cli) -> commands::CommandResult {
    let printer_config =
        commands::create_printer_config(cli.monitor, cli.hex, cli.filter.as_deref())?;
    let port = cli.port.as_deref();

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => commands::run::run(port, printer_config),
        Commands::List => commands::utility::list(),
        Commands::Off => commands::utility::off(port, printer_config),
    }
}
