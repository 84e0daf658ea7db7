//! Terraform documentation domain.
//!
//! This is the resolution pipeline behind the `terraform-doc` tool:
//!
//! - `registry.rs` - compiled-in provider table and doc path conventions
//! - `version.rs` - tag normalization and `latest` resolution
//! - `fetcher.rs` - orchestration: validate, look up, resolve, fetch
//! - `client.rs` - GET-only HTTP client abstraction over reqwest
//! - `error.rs` - pipeline error types

pub mod client;
mod error;
pub mod fetcher;
pub mod registry;
pub mod version;

pub use client::{HttpClient, HttpResponse, ReqwestClient};
pub use error::DocError;
pub use fetcher::{DocFetcher, DocRequest};
pub use registry::{DocLayout, ProviderEntry, lookup, supported_providers};
pub use version::{LATEST, VersionResolver};
