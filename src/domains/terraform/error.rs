//! Errors produced by the documentation pipeline.

use thiserror::Error;

/// Errors that can occur while resolving and fetching a resource document.
///
/// Every variant carries a human-readable message; none of them are
/// recovered internally, they are handed back to the caller as-is.
#[derive(Debug, Error)]
pub enum DocError {
    /// One or more of provider, resource or version was empty.
    #[error("provider, resource, and version must not be empty")]
    InvalidInput,

    /// The provider is not part of the compiled-in registry.
    #[error(
        "unsupported provider: {}. supported providers are {}",
        .provider,
        .supported.join(", ")
    )]
    UnsupportedProvider {
        provider: String,
        supported: Vec<&'static str>,
    },

    /// The hosting platform could not be reached or answered with garbage.
    #[error("upstream error: {0}")]
    Upstream(String),

    /// The tag listing succeeded but no tag is a semantic version.
    #[error("no valid semver tags found for {repository}")]
    NoValidVersions { repository: String },

    /// The document URL did not answer with 200.
    #[error("not found: {url}")]
    NotFound { url: String },
}

impl DocError {
    /// Create a new "unsupported provider" error listing the registry.
    pub fn unsupported_provider(provider: impl Into<String>) -> Self {
        Self::UnsupportedProvider {
            provider: provider.into(),
            supported: super::registry::supported_providers(),
        }
    }

    /// Create a new "upstream" error.
    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    /// Create a new "no valid versions" error.
    pub fn no_valid_versions(repository: impl Into<String>) -> Self {
        Self::NoValidVersions {
            repository: repository.into(),
        }
    }

    /// Create a new "not found" error.
    pub fn not_found(url: impl Into<String>) -> Self {
        Self::NotFound { url: url.into() }
    }

    /// Whether the caller made a mistake (as opposed to the upstream failing).
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::InvalidInput | Self::UnsupportedProvider { .. })
    }
}
