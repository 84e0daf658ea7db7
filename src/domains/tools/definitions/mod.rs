//! Tool definitions module.
//!
//! Each tool is defined in its own file with its parameters, metadata and
//! route builder.

pub mod terraform_doc;

pub use terraform_doc::{TerraformDocParams, TerraformDocTool};
