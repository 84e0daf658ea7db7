//! Version Resolver and tag normalization.
//!
//! Tags on provider repositories usually look like `v5.0.0`, but the tag
//! API is not consistent about the prefix. Versions handed around inside
//! the pipeline never carry the `v`; [`tag_for`] re-adds it exactly once
//! when a git ref is needed.

use std::sync::Arc;

use semver::Version;
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use super::client::HttpClient;
use super::error::DocError;

/// Symbolic version that triggers tag resolution.
pub const LATEST: &str = "latest";

/// Strip an optional leading `v` from a tag or version string.
pub fn strip_tag_prefix(tag: &str) -> &str {
    tag.strip_prefix('v').unwrap_or(tag)
}

/// Git tag name for a version, with exactly one leading `v`.
pub fn tag_for(version: &str) -> String {
    format!("v{}", strip_tag_prefix(version))
}

/// Parse a tag as a semantic version, ignoring an optional leading `v`.
pub fn parse_tag(tag: &str) -> Option<Version> {
    Version::parse(strip_tag_prefix(tag)).ok()
}

/// Highest semantic version among `tags`; non-semver tags are skipped.
pub fn highest_version<'a, I>(tags: I) -> Option<Version>
where
    I: IntoIterator<Item = &'a str>,
{
    tags.into_iter()
        .filter_map(|tag| {
            let parsed = parse_tag(tag);
            if parsed.is_none() {
                debug!(tag, "skipping non-semver tag");
            }
            parsed
        })
        .max()
}

/// One element of the GitHub tag listing; other fields are ignored.
#[derive(Debug, Deserialize)]
struct Tag {
    name: String,
}

/// Resolves `latest` to the highest tagged semantic version of a repository.
#[derive(Clone)]
pub struct VersionResolver {
    client: Arc<dyn HttpClient>,
    api_base: String,
}

impl VersionResolver {
    /// Create a resolver talking to the tag API at `api_base`.
    pub fn new(client: Arc<dyn HttpClient>, api_base: impl Into<String>) -> Self {
        Self {
            client,
            api_base: api_base.into(),
        }
    }

    /// Tag listing URL for a repository in `owner/name` form.
    pub fn tags_url(&self, repository: &str) -> String {
        format!("{}/repos/{}/tags", self.api_base, repository)
    }

    /// Resolve the highest semantic version tagged on `repository`.
    ///
    /// The returned version has no leading `v`.
    #[instrument(skip(self))]
    pub async fn resolve_latest(&self, repository: &str) -> Result<Version, DocError> {
        let url = self.tags_url(repository);
        info!(%url, "Resolving latest version");

        let response = self.client.get(&url).await?;
        if !response.is_ok() {
            warn!(%url, status = response.status, "Tag listing failed");
            return Err(DocError::upstream(format!(
                "failed to fetch tags for {}: HTTP {}",
                repository, response.status
            )));
        }

        let tags: Vec<Tag> = serde_json::from_str(&response.body).map_err(|e| {
            DocError::upstream(format!("malformed tag listing for {}: {}", repository, e))
        })?;

        let latest = highest_version(tags.iter().map(|t| t.name.as_str()))
            .ok_or_else(|| DocError::no_valid_versions(repository))?;

        info!(%latest, tags = tags.len(), "Resolved latest version");
        Ok(latest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::terraform::client::testing::MockHttpClient;

    const API: &str = "https://api.test";
    const TAGS_URL: &str = "https://api.test/repos/hashicorp/terraform-provider-aws/tags";
    const REPO: &str = "hashicorp/terraform-provider-aws";

    fn resolver(client: MockHttpClient) -> VersionResolver {
        VersionResolver::new(Arc::new(client), API)
    }

    #[test]
    fn test_tag_normalization() {
        assert_eq!(strip_tag_prefix("v5.0.0"), "5.0.0");
        assert_eq!(strip_tag_prefix("5.0.0"), "5.0.0");
        assert_eq!(strip_tag_prefix("vv1.0.0"), "v1.0.0");
        assert_eq!(tag_for("5.0.0"), "v5.0.0");
        assert_eq!(tag_for("v5.0.0"), "v5.0.0");
    }

    #[test]
    fn test_parse_tag() {
        assert_eq!(parse_tag("v1.2.3"), Some(Version::new(1, 2, 3)));
        assert_eq!(parse_tag("1.2.3"), Some(Version::new(1, 2, 3)));
        assert!(parse_tag("v1.2.3-beta.1+build.5").is_some());
        assert!(parse_tag("not-a-version").is_none());
        assert!(parse_tag("release-2024").is_none());
        assert!(parse_tag("v1.2").is_none());
    }

    #[test]
    fn test_highest_version_precedence() {
        let tags = ["v2.0.0-rc1", "v1.9.9", "v2.0.0", "v2.0.0-beta"];
        assert_eq!(highest_version(tags), Some(Version::new(2, 0, 0)));

        let tags = ["v1.10.0", "v1.9.0", "v1.2.0"];
        assert_eq!(highest_version(tags), Some(Version::new(1, 10, 0)));

        assert_eq!(highest_version(["nightly", "main"]), None);
        assert_eq!(highest_version(Vec::<&str>::new()), None);
    }

    #[test]
    fn test_tags_url() {
        let r = resolver(MockHttpClient::new());
        assert_eq!(r.tags_url(REPO), TAGS_URL);
    }

    #[tokio::test]
    async fn test_resolve_latest_picks_highest() {
        let client = MockHttpClient::new().with_response(
            TAGS_URL,
            200,
            r#"[{"name": "v5.0.0"}, {"name": "v4.0.0"}, {"name": "v3.0.0"}]"#,
        );
        let version = resolver(client).resolve_latest(REPO).await.unwrap();
        assert_eq!(version.to_string(), "5.0.0");
    }

    #[tokio::test]
    async fn test_resolve_latest_ignores_invalid_tags() {
        let client = MockHttpClient::new().with_response(
            TAGS_URL,
            200,
            r#"[{"name": "not-a-version"}, {"name": "v3.1.0"}, {"name": "3.2.0"}]"#,
        );
        let version = resolver(client).resolve_latest(REPO).await.unwrap();
        assert_eq!(version.to_string(), "3.2.0");
    }

    #[tokio::test]
    async fn test_resolve_latest_no_valid_versions() {
        let client = MockHttpClient::new().with_response(
            TAGS_URL,
            200,
            r#"[{"name": "not-a-version"}, {"name": "main"}]"#,
        );
        let err = resolver(client).resolve_latest(REPO).await.unwrap_err();
        assert!(matches!(err, DocError::NoValidVersions { .. }));
    }

    #[tokio::test]
    async fn test_resolve_latest_empty_listing() {
        let client = MockHttpClient::new().with_response(TAGS_URL, 200, "[]");
        let err = resolver(client).resolve_latest(REPO).await.unwrap_err();
        assert!(matches!(err, DocError::NoValidVersions { .. }));
    }

    #[tokio::test]
    async fn test_resolve_latest_non_200() {
        let client = MockHttpClient::new().with_response(TAGS_URL, 403, "rate limited");
        let err = resolver(client).resolve_latest(REPO).await.unwrap_err();
        assert!(matches!(err, DocError::Upstream(_)));
        assert!(err.to_string().contains("403"));
    }

    #[tokio::test]
    async fn test_resolve_latest_malformed_json() {
        for body in [r#"{"name": "v1.0.0"}"#, r#"[{"tag": "v1.0.0"}]"#, "not json"] {
            let client = MockHttpClient::new().with_response(TAGS_URL, 200, body);
            let err = resolver(client).resolve_latest(REPO).await.unwrap_err();
            assert!(matches!(err, DocError::Upstream(_)), "body: {body}");
        }
    }

    #[test]
    fn test_resolve_latest_transport_failure() {
        let client = MockHttpClient::new().with_transport_failure(TAGS_URL);
        let err = tokio_test::block_on(resolver(client).resolve_latest(REPO)).unwrap_err();
        assert!(matches!(err, DocError::Upstream(_)));
    }
}
