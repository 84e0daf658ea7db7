//! Terraform documentation tool definition.
//!
//! Thin adapter between MCP and the documentation pipeline: it parses the
//! three arguments, defaults the version to `latest`, and turns the
//! pipeline's result into a tool result.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{error, info, instrument, warn};

use crate::domains::terraform::{DocFetcher, DocRequest, supported_providers};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the terraform-doc tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TerraformDocParams {
    /// Terraform provider name (e.g. aws).
    #[schemars(description = "terraform provider name")]
    pub provider: String,

    /// Provider version without leading `v`, or `latest`.
    #[serde(default)]
    #[schemars(description = "provider version. default is latest")]
    pub version: Option<String>,

    /// Terraform resource type name (e.g. aws_instance).
    #[schemars(
        description = "terraform resource name. format will be like aws_instance, google_compute_instance, datadog_monitor"
    )]
    pub resource: String,
}

impl TerraformDocParams {
    /// The pipeline request for these parameters.
    pub fn to_request(&self) -> DocRequest {
        DocRequest::new(&self.provider, &self.resource, self.version.as_deref())
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Fetches the markdown documentation of a Terraform resource.
pub struct TerraformDocTool;

impl TerraformDocTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "terraform-doc";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "get the terraform document of the given provider, version, and resource";

    /// Prefix of every error message returned to clients.
    pub const ERROR_PREFIX: &'static str = "failed to get terraform doc";

    /// Run the pipeline for `params`.
    #[instrument(skip_all, fields(provider = %params.provider, resource = %params.resource))]
    pub async fn execute(fetcher: &DocFetcher, params: &TerraformDocParams) -> CallToolResult {
        let request = params.to_request();
        info!("terraform-doc called for version {}", request.version);

        match fetcher.fetch_request(&request).await {
            Ok(doc) => CallToolResult::success(vec![Content::text(doc)]),
            Err(e) => {
                if e.is_caller_error() {
                    warn!("Rejected request: {}", e);
                } else {
                    error!("Fetch failed: {}", e);
                }
                CallToolResult::error(vec![Content::text(format!(
                    "{}: {}",
                    Self::ERROR_PREFIX,
                    e
                ))])
            }
        }
    }

    /// Input schema, with the supported providers spelled out for `provider`.
    fn input_schema() -> Arc<JsonObject> {
        let mut schema = (*cached_schema_for_type::<TerraformDocParams>()).clone();

        let provider = schema
            .get_mut("properties")
            .and_then(|p| p.get_mut("provider"))
            .and_then(|p| p.as_object_mut());
        if let Some(provider) = provider {
            provider.insert(
                "description".to_string(),
                serde_json::Value::String(format!(
                    "terraform provider name. supported providers are {}",
                    supported_providers().join(", ")
                )),
            );
        }

        Arc::new(schema)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: Self::input_schema(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Parse raw call arguments.
    pub fn parse_arguments(args: JsonObject) -> Result<TerraformDocParams, McpError> {
        serde_json::from_value(serde_json::Value::Object(args))
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }

    /// Create a ToolRoute for the rmcp router.
    pub fn create_route<S>(fetcher: Arc<DocFetcher>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let fetcher = fetcher.clone();
            async move {
                let params = Self::parse_arguments(args)?;
                Ok(Self::execute(&fetcher, &params).await)
            }
            .boxed()
        })
    }
}
