//! Transport layer for the MCP server.
//!
//! - **STDIO**: standard input/output, what MCP clients spawn by default (feature `stdio`)
//! - **TCP**: line-delimited JSON-RPC over a TCP socket, one MCP session per
//!   connection (feature `tcp`)

mod config;
mod error;
mod service;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;
