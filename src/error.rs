//! Driver error types

use mutesync_transport::TransportError;
use thiserror::Error;

/// Errors from the event loop
#[derive(Error, Debug)]
pub enum DriverError {
    /// Transport layer error; always fatal
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}
