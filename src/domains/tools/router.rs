//! Tool Router - builds the rmcp ToolRouter from the tool definitions.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::TerraformDocTool;
use crate::domains::terraform::DocFetcher;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(fetcher: Arc<DocFetcher>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new().with_route(TerraformDocTool::create_route(fetcher))
}
