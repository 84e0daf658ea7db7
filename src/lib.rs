//! Terraform documentation MCP server.
//!
//! Resolves a Terraform provider / resource / version triple into the
//! resource's markdown documentation, read from the provider's GitHub
//! repository at the matching release tag, and exposes that as the MCP
//! tool `terraform-doc`.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **terraform**: provider registry, version resolution, document fetching
//!   - **tools**: the `terraform-doc` MCP tool
//!   - **resources**: the `terraform://providers` resource
//!
//! # Example
//!
//! ```rust,no_run
//! use terraform_doc_mcp::{core::GitHubConfig, domains::terraform::DocFetcher};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let fetcher = DocFetcher::from_config(&GitHubConfig::default())?;
//!     let markdown = fetcher.fetch("aws", "aws_instance", "latest").await?;
//!     println!("{}", markdown);
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use self::core::{Config, Error, McpServer, Result};
pub use domains::terraform::{DocError, DocFetcher, DocRequest};
