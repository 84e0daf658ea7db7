//! Domains module containing business logic organized by bounded contexts.
//!
//! - **terraform**: the documentation resolution pipeline
//! - **tools**: MCP tools exposing the pipeline to clients
//! - **resources**: read-only data describing what the server supports

pub mod resources;
pub mod terraform;
pub mod tools;
