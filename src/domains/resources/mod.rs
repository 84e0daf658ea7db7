//! Resources domain module.
//!
//! Resources are read-only data that MCP clients can fetch. This server
//! exposes the provider registry so clients can discover what the
//! `terraform-doc` tool accepts.
//!
//! - `definitions/` - individual resource definitions (one file per resource)
//! - `registry.rs` - central resource registration
//! - `service.rs` - listing and reading

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::ResourceDefinition;
pub use error::ResourceError;
pub use registry::{get_all_resources, resource_uris};
pub use service::{ResourceEntry, ResourceService};
