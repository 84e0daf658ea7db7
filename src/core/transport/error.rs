//! Transport error types.

use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors that can occur while serving MCP over a transport.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Failed to bind the listening socket.
    #[error("Failed to bind to {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error during transport.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The MCP session could not be initialized.
    #[error("Server initialization error: {0}")]
    Init(String),

    /// The MCP session ended with an error.
    #[error("Service error: {0}")]
    Service(String),
}

impl TransportError {
    /// Create a bind error.
    pub fn bind(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::Bind {
            address: address.into(),
            source,
        }
    }

    /// Create an initialization error.
    pub fn init(msg: impl Into<String>) -> Self {
        Self::Init(msg.into())
    }

    /// Create a service error.
    pub fn service(msg: impl Into<String>) -> Self {
        Self::Service(msg.into())
    }
}
