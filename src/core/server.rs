//! MCP Server implementation and lifecycle management.
//!
//! `McpServer` implements the rmcp `ServerHandler` by delegating tool calls
//! to the dynamically built `ToolRouter` and resource requests to the
//! `ResourceService`. Tools live in `domains/tools/definitions/`.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error;
use crate::domains::{
    resources::ResourceService, terraform::DocFetcher, tools::build_tool_router,
};

/// The main MCP server handler.
///
/// Cloned once per session by the transports; all clones share the same
/// fetcher and therefore the same HTTP connection pool.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server fetching from the configured GitHub endpoints.
    pub fn new(config: Config) -> error::Result<Self> {
        let fetcher = DocFetcher::from_config(&config.github)?;
        Ok(Self::with_fetcher(config, fetcher))
    }

    /// Create a new MCP server around an existing fetcher.
    pub fn with_fetcher(config: Config, fetcher: DocFetcher) -> Self {
        let config = Arc::new(config);
        let fetcher = Arc::new(fetcher);

        Self {
            tool_router: build_tool_router::<Self>(fetcher),
            resource_service: Arc::new(ResourceService::new()),
            config,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Metadata of every routed tool.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }
}

#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Fetches Terraform resource documentation (markdown) straight from the \
                 provider's GitHub repository. Call the terraform-doc tool with a provider, \
                 a resource type name and optionally a version (default: latest). The \
                 terraform://providers resource lists the supported providers."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        Ok(ListResourcesResult {
            resources: self.resource_service.list_resources(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .map_err(|e| McpError::resource_not_found(e.to_string(), None))
    }
}
