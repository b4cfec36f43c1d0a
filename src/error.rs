//! Error types for the shared transport core

use thiserror::Error;

/// Transport error types
#[derive(Error, Debug)]
pub enum TransportError {
    /// A required argument was missing or empty
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The owning client core could not supply its callback bindings
    #[error("Client core callbacks unavailable: {0}")]
    Callbacks(String),

    /// The protocol provider failed to open the lower-layer connection
    #[error("Lower layer transport not created: {0}")]
    Create(String),

    /// A delegated operation failed inside the protocol provider
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// An operation named a client the connection does not know
    #[error("Client not registered: {0}")]
    NotRegistered(crate::ClientId),

    /// IO errors surfaced by the provider
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Timeout error
    #[error("Operation timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, TransportError>;

impl TransportError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            TransportError::Timeout { .. } => true,
            TransportError::Protocol(_) => true,
            TransportError::Io(err) => {
                matches!(
                    err.kind(),
                    std::io::ErrorKind::TimedOut
                        | std::io::ErrorKind::WouldBlock
                        | std::io::ErrorKind::Interrupted
                )
            }
            _ => false,
        }
    }

    /// Check if the error reports misuse of the API rather than a runtime fault
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            TransportError::InvalidArgument(_) | TransportError::NotRegistered(_)
        )
    }
}
