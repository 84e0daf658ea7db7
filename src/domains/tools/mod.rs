//! Tools domain module.
//!
//! Tools are executable functions that MCP clients call.
//!
//! - `definitions/` - individual tool implementations (one file per tool)
//! - `router.rs` - builds the rmcp ToolRouter used by every transport
//! - `registry.rs` - tool metadata and in-process dispatch by name
//! - `error.rs` - tool dispatch errors

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
