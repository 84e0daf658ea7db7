//! Resource Registry - central registration of all resources.

use rmcp::model::{AnnotateAble, RawResource};

use super::definitions::{ResourceDefinition, SupportedProvidersResource};
use super::service::ResourceEntry;

/// Build a resource entry from a definition.
fn build_resource<R: ResourceDefinition>() -> ResourceEntry {
    let mut raw = RawResource::new(R::URI, R::NAME);
    raw.description = Some(R::DESCRIPTION.to_string());
    raw.mime_type = Some(R::MIME_TYPE.to_string());

    ResourceEntry {
        resource: raw.no_annotation(),
        render: R::render,
    }
}

/// Get all registered resources.
pub fn get_all_resources() -> Vec<ResourceEntry> {
    vec![build_resource::<SupportedProvidersResource>()]
}

/// Get the list of all resource URIs.
pub fn resource_uris() -> Vec<&'static str> {
    vec![SupportedProvidersResource::URI]
}
