//! Resource service implementation.
//!
//! Resources are defined in `definitions/` and registered via `registry.rs`.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use std::collections::BTreeMap;
use tracing::info;

use super::error::ResourceError;
use super::registry::get_all_resources;

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// Renders the resource content on read.
    pub render: fn() -> Result<String, String>,
}

/// Service for listing and reading resources.
pub struct ResourceService {
    /// Key: resource URI.
    resources: BTreeMap<String, ResourceEntry>,
}

impl ResourceService {
    /// Create a service holding every registered resource.
    pub fn new() -> Self {
        let resources = get_all_resources()
            .into_iter()
            .map(|entry| {
                info!("Registering resource: {}", entry.resource.raw.uri);
                (entry.resource.raw.uri.clone(), entry)
            })
            .collect();

        Self { resources }
    }

    /// List all available resources.
    pub fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Read a resource by URI.
    pub fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .get(uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let text = (entry.render)().map_err(ResourceError::internal)?;

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(text, uri)],
        })
    }
}

impl Default for ResourceService {
    fn default() -> Self {
        Self::new()
    }
}
