//! HTTP client abstraction used by the resolver and the fetcher.
//!
//! `HttpClient::get` always reads the whole body before returning, so the
//! underlying connection is released on every path, including non-200
//! answers that callers turn into errors.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::error::DocError;
use crate::core::config::GitHubConfig;

/// A fully drained HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Status code.
    pub status: u16,

    /// Response body as text.
    pub body: String,
}

impl HttpResponse {
    /// Create a response from a status and a body.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Only 200 counts as success for this pipeline.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Minimal GET-only HTTP client.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Issue a GET request and return the drained response.
    ///
    /// Transport failures (DNS, TLS, connection reset, timeout) are reported
    /// as [`DocError::Upstream`]; any status code is a successful return.
    async fn get(&self, url: &str) -> Result<HttpResponse, DocError>;
}

/// [`HttpClient`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: Client,
}

impl ReqwestClient {
    /// Build a client from the GitHub configuration.
    ///
    /// Redirects follow reqwest's default policy. Without a configured
    /// timeout, reqwest's default (none) applies.
    pub fn new(config: &GitHubConfig) -> Result<Self, DocError> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| DocError::upstream(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str) -> Result<HttpResponse, DocError> {
        debug!(%url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DocError::upstream(format!("request to {} failed: {}", url, e)))?;

        let status = response.status().as_u16();
        let body = match response.text().await {
            Ok(body) => body,
            // The body of an error answer is never surfaced, so a broken one
            // must not mask the status.
            Err(e) if status != 200 => {
                debug!(%url, status, "discarding unreadable error body: {}", e);
                String::new()
            }
            Err(e) => {
                return Err(DocError::upstream(format!(
                    "failed to read response from {}: {}",
                    url, e
                )));
            }
        };

        Ok(HttpResponse { status, body })
    }
}
