//! End-to-end tests of the documentation pipeline over real HTTP, with the
//! GitHub tag API and raw content host replaced by wiremock servers.

use std::sync::Arc;

use rmcp::model::RawContent;
use serde_json::json;
use terraform_doc_mcp::core::GitHubConfig;
use terraform_doc_mcp::domains::terraform::{DocError, DocFetcher};
use terraform_doc_mcp::domains::tools::ToolRegistry;
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const AWS_TAGS_PATH: &str = "/repos/hashicorp/terraform-provider-aws/tags";
const AWS_DOC_V5_PATH: &str =
    "/hashicorp/terraform-provider-aws/refs/tags/v5.0.0/docs/resources/instance.md";
const AWS_DOC: &str = "# aws_instance\n\nProvides an EC2 instance resource.";

struct Upstream {
    api: MockServer,
    raw: MockServer,
}

impl Upstream {
    async fn start() -> Self {
        Self {
            api: MockServer::start().await,
            raw: MockServer::start().await,
        }
    }

    fn config(&self) -> GitHubConfig {
        GitHubConfig {
            api_base: self.api.uri(),
            raw_base: self.raw.uri(),
            ..GitHubConfig::default()
        }
    }

    fn fetcher(&self) -> DocFetcher {
        DocFetcher::from_config(&self.config()).unwrap()
    }

    async fn mount_aws_tags(&self, expected_calls: u64) {
        Mock::given(method("GET"))
            .and(path(AWS_TAGS_PATH))
            .and(header_exists("user-agent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "name": "v5.0.0", "commit": { "sha": "abc" } },
                { "name": "v4.0.0" },
                { "name": "v3.0.0" }
            ])))
            .expect(expected_calls)
            .mount(&self.api)
            .await;
    }

    async fn mount_aws_doc(&self, expected_calls: u64) {
        Mock::given(method("GET"))
            .and(path(AWS_DOC_V5_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string(AWS_DOC))
            .expect(expected_calls)
            .mount(&self.raw)
            .await;
    }
}

#[tokio::test]
async fn fetches_latest_documentation() {
    let upstream = Upstream::start().await;
    upstream.mount_aws_tags(1).await;
    upstream.mount_aws_doc(1).await;

    let doc = upstream
        .fetcher()
        .fetch("aws", "aws_instance", "latest")
        .await
        .unwrap();

    assert_eq!(doc, AWS_DOC);
}

#[tokio::test]
async fn explicit_version_not_found_skips_tag_listing() {
    let upstream = Upstream::start().await;
    upstream.mount_aws_tags(0).await;

    let err = upstream
        .fetcher()
        .fetch("aws", "aws_instance", "2.0.0")
        .await
        .unwrap_err();

    match err {
        DocError::NotFound { url } => assert!(
            url.ends_with("/refs/tags/v2.0.0/docs/resources/instance.md"),
            "unexpected url: {url}"
        ),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn tag_listing_failure_is_upstream_error() {
    let upstream = Upstream::start().await;
    Mock::given(method("GET"))
        .and(path(AWS_TAGS_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_string("rate limit exceeded"))
        .mount(&upstream.api)
        .await;
    upstream.mount_aws_doc(0).await;

    let err = upstream
        .fetcher()
        .fetch("aws", "aws_instance", "latest")
        .await
        .unwrap_err();

    assert!(matches!(err, DocError::Upstream(_)), "got {err:?}");
}

#[tokio::test]
async fn only_non_semver_tags_is_no_valid_versions() {
    let upstream = Upstream::start().await;
    Mock::given(method("GET"))
        .and(path(AWS_TAGS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{ "name": "not-a-version" }, { "name": "nightly" }])),
        )
        .mount(&upstream.api)
        .await;
    upstream.mount_aws_doc(0).await;

    let err = upstream
        .fetcher()
        .fetch("aws", "aws_instance", "latest")
        .await
        .unwrap_err();

    assert!(matches!(err, DocError::NoValidVersions { .. }), "got {err:?}");
}

#[tokio::test]
async fn repeated_calls_are_not_cached() {
    let upstream = Upstream::start().await;
    upstream.mount_aws_tags(2).await;
    upstream.mount_aws_doc(2).await;

    let fetcher = upstream.fetcher();
    let first = fetcher.fetch("aws", "aws_instance", "latest").await.unwrap();
    let second = fetcher.fetch("aws", "aws_instance", "latest").await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn unreachable_upstream_is_upstream_error() {
    let config = GitHubConfig {
        api_base: "http://127.0.0.1:1".to_string(),
        raw_base: "http://127.0.0.1:1".to_string(),
        ..GitHubConfig::default()
    };
    let fetcher = DocFetcher::from_config(&config).unwrap();

    let err = fetcher
        .fetch("aws", "aws_instance", "latest")
        .await
        .unwrap_err();

    assert!(matches!(err, DocError::Upstream(_)), "got {err:?}");
}

#[tokio::test]
async fn tool_call_defaults_version_to_latest() {
    let upstream = Upstream::start().await;
    upstream.mount_aws_tags(1).await;
    upstream.mount_aws_doc(1).await;

    let registry = ToolRegistry::new(Arc::new(upstream.fetcher()));
    let result = registry
        .call_tool(
            "terraform-doc",
            json!({ "provider": "aws", "resource": "aws_instance" }),
        )
        .await
        .unwrap();

    assert_ne!(result.is_error, Some(true));
    match &result.content[0].raw {
        RawContent::Text(text) => assert_eq!(text.text, AWS_DOC),
        _ => panic!("Expected text content"),
    }
}

#[tokio::test]
async fn tool_call_reports_not_found() {
    let upstream = Upstream::start().await;

    let registry = ToolRegistry::new(Arc::new(upstream.fetcher()));
    let result = registry
        .call_tool(
            "terraform-doc",
            json!({ "provider": "datadog", "resource": "datadog_monitor", "version": "3.0.0" }),
        )
        .await
        .unwrap();

    assert_eq!(result.is_error, Some(true));
    match &result.content[0].raw {
        RawContent::Text(text) => {
            assert!(text.text.starts_with("failed to get terraform doc: not found: "));
            assert!(text.text.ends_with(
                "/DataDog/terraform-provider-datadog/refs/tags/v3.0.0/docs/resources/monitor.md"
            ));
        }
        _ => panic!("Expected text content"),
    }
}
