//! Provider Registry - the compiled-in table of supported Terraform providers.
//!
//! Each entry knows which GitHub repository hosts the provider and how a
//! resource type name maps onto a documentation file inside that repository.
//! The table never changes at runtime and is shared without synchronization.

use serde::Serialize;

/// Directory and file naming convention of a provider's resource docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocLayout {
    /// `docs/resources/<name>.md` (Terraform Registry layout).
    Registry,

    /// `website/docs/r/<name>.html.markdown` (pre-registry website layout).
    Legacy,
}

impl DocLayout {
    /// Render the relative path for an already prefix-stripped resource name.
    pub fn render(self, name: &str) -> String {
        match self {
            Self::Registry => format!("docs/resources/{}.md", name),
            Self::Legacy => format!("website/docs/r/{}.html.markdown", name),
        }
    }
}

/// A single provider in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderEntry {
    /// Provider identifier as used by callers (e.g. `aws`).
    pub id: &'static str,

    /// Source repository in `owner/name` form.
    pub repository: &'static str,

    /// Resource type prefix stripped before building the doc path.
    pub resource_prefix: &'static str,

    /// Documentation layout inside the repository.
    pub layout: DocLayout,
}

impl ProviderEntry {
    /// Build the documentation path for a resource type name.
    ///
    /// `aws_instance` becomes `docs/resources/instance.md` for aws. A name
    /// without the provider prefix is substituted unchanged.
    pub fn doc_path(&self, resource: &str) -> String {
        let name = resource
            .strip_prefix(self.resource_prefix)
            .unwrap_or(resource);
        self.layout.render(name)
    }
}

static PROVIDERS: [ProviderEntry; 5] = [
    ProviderEntry {
        id: "aws",
        repository: "hashicorp/terraform-provider-aws",
        resource_prefix: "aws_",
        layout: DocLayout::Registry,
    },
    ProviderEntry {
        id: "azurerm",
        repository: "hashicorp/terraform-provider-azurerm",
        resource_prefix: "azurerm_",
        layout: DocLayout::Legacy,
    },
    ProviderEntry {
        id: "google",
        repository: "hashicorp/terraform-provider-google",
        resource_prefix: "google_",
        layout: DocLayout::Legacy,
    },
    ProviderEntry {
        id: "cloudflare",
        repository: "cloudflare/terraform-provider-cloudflare",
        resource_prefix: "cloudflare_",
        layout: DocLayout::Registry,
    },
    ProviderEntry {
        id: "datadog",
        repository: "DataDog/terraform-provider-datadog",
        resource_prefix: "datadog_",
        layout: DocLayout::Registry,
    },
];

/// Look up a provider by identifier.
pub fn lookup(provider: &str) -> Option<&'static ProviderEntry> {
    PROVIDERS.iter().find(|entry| entry.id == provider)
}

/// All registered providers.
pub fn providers() -> &'static [ProviderEntry] {
    &PROVIDERS
}

/// Identifiers of all supported providers.
///
/// Callers must not rely on the order; it is only used for error messages
/// and capability advertisement.
pub fn supported_providers() -> Vec<&'static str> {
    PROVIDERS.iter().map(|entry| entry.id).collect()
}
