//! Supported providers resource definition.

use serde::Serialize;

use super::ResourceDefinition;
use crate::domains::terraform::registry::{self, ProviderEntry};

/// Lists every provider the `terraform-doc` tool accepts.
pub struct SupportedProvidersResource;

#[derive(Debug, Serialize)]
struct ProviderListing {
    providers: &'static [ProviderEntry],
}

impl ResourceDefinition for SupportedProvidersResource {
    const URI: &'static str = "terraform://providers";
    const NAME: &'static str = "Supported Terraform Providers";
    const DESCRIPTION: &'static str =
        "Providers accepted by the terraform-doc tool and the GitHub repository each one is read from";
    const MIME_TYPE: &'static str = "application/json";

    fn render() -> Result<String, String> {
        let listing = ProviderListing {
            providers: registry::providers(),
        };

        serde_json::to_string_pretty(&listing).map_err(|e| e.to_string())
    }
}
