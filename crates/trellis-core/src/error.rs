//! Error types for Trellis core.

use crate::signal::ConnectionId;

/// A specialized Result type for Trellis core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Trellis core operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Signal-related error.
    #[error("Signal error: {0}")]
    Signal(#[from] SignalError),
}

/// Signal-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignalError {
    /// The connection ID is invalid or has already been disconnected.
    #[error("Invalid or disconnected connection ID {0:?}")]
    InvalidConnection(ConnectionId),
}
