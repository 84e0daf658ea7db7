//! Document Fetcher - turns a provider/resource/version triple into markdown.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use super::client::{HttpClient, ReqwestClient};
use super::error::DocError;
use super::registry::{self, ProviderEntry};
use super::version::{LATEST, VersionResolver, tag_for};
use crate::core::config::GitHubConfig;

/// A single documentation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocRequest {
    pub provider: String,
    pub resource: String,
    pub version: String,
}

impl DocRequest {
    /// Build a request, defaulting an absent or empty version to `latest`.
    pub fn new(
        provider: impl Into<String>,
        resource: impl Into<String>,
        version: Option<&str>,
    ) -> Self {
        let version = match version {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => LATEST.to_string(),
        };

        Self {
            provider: provider.into(),
            resource: resource.into(),
            version,
        }
    }
}

/// Fetches resource documentation from a provider's tagged sources.
///
/// Nothing is cached: every call re-runs the full pipeline, issuing at
/// most two sequential requests (tag listing, then the document).
#[derive(Clone)]
pub struct DocFetcher {
    client: Arc<dyn HttpClient>,
    resolver: VersionResolver,
    raw_base: String,
}

impl DocFetcher {
    /// Create a fetcher over an arbitrary [`HttpClient`].
    pub fn new(client: Arc<dyn HttpClient>, config: &GitHubConfig) -> Self {
        Self {
            resolver: VersionResolver::new(client.clone(), config.api_base.clone()),
            client,
            raw_base: config.raw_base.clone(),
        }
    }

    /// Create a fetcher backed by `reqwest`.
    pub fn from_config(config: &GitHubConfig) -> Result<Self, DocError> {
        let client = ReqwestClient::new(config)?;
        Ok(Self::new(Arc::new(client), config))
    }

    /// Raw-content URL of a resource document at a given tag.
    pub fn document_url(&self, entry: &ProviderEntry, tag: &str, resource: &str) -> String {
        format!(
            "{}/{}/refs/tags/{}/{}",
            self.raw_base,
            entry.repository,
            tag,
            entry.doc_path(resource)
        )
    }

    /// Fetch the documentation for a [`DocRequest`].
    pub async fn fetch_request(&self, request: &DocRequest) -> Result<String, DocError> {
        self.fetch(&request.provider, &request.resource, &request.version)
            .await
    }

    /// Fetch the markdown documentation of `resource` from `provider`.
    ///
    /// `version` is either `latest` or an explicit version such as `5.0.0`.
    #[instrument(skip(self))]
    pub async fn fetch(
        &self,
        provider: &str,
        resource: &str,
        version: &str,
    ) -> Result<String, DocError> {
        if provider.is_empty() || resource.is_empty() || version.is_empty() {
            return Err(DocError::InvalidInput);
        }

        let entry =
            registry::lookup(provider).ok_or_else(|| DocError::unsupported_provider(provider))?;

        let version = if version == LATEST {
            self.resolver
                .resolve_latest(entry.repository)
                .await?
                .to_string()
        } else {
            version.to_string()
        };

        let url = self.document_url(entry, &tag_for(&version), resource);
        info!(%url, "Fetching Terraform documentation");

        let response = self.client.get(&url).await?;
        if !response.is_ok() {
            warn!(%url, status = response.status, "Documentation not found");
            return Err(DocError::not_found(url));
        }

        info!(provider, resource, "Successfully fetched Terraform documentation");
        Ok(response.body)
    }
}
