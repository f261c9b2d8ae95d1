use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::{
    client::{CompassClient, RecommendationApi},
    config::CompassConfig,
    recommend::recommend,
    types::{Query, RecommendRequest},
};

/// Name the tool is registered under
pub const TOOL_NAME: &str = "recommend-mcp-servers";

/// MCP server exposing the `recommend-mcp-servers` tool
#[derive(Clone)]
pub struct CompassMcpServer {
    api: Arc<dyn RecommendationApi>,
    tool_router: ToolRouter<Self>,
}

impl CompassMcpServer {
    pub fn new(api: Arc<dyn RecommendationApi>) -> Self {
        let tool_router = Self::tool_router();
        info!(
            "Tool router initialized with {} tools",
            tool_router.list_all().len()
        );

        Self { api, tool_router }
    }

    /// Build a server backed by the HTTP client described in `config`
    pub fn from_config(config: &CompassConfig) -> crate::error::Result<Self> {
        let client = CompassClient::new(config.api_base.clone(), &config.user_agent)?;
        info!(api_base = %client.base_url(), "Recommendation client ready");
        Ok(Self::new(Arc::new(client)))
    }

    /// Run the MCP server on stdio transport
    pub async fn run_stdio(self) -> miette::Result<()> {
        info!("Starting MCP server on stdio transport");

        let server = self
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| miette::miette!("Failed to start server: {}", e))?;

        let quit_reason = server
            .waiting()
            .await
            .map_err(|e| miette::miette!("Server error: {}", e))?;

        info!("Server stopped: {:?}", quit_reason);
        Ok(())
    }
}

#[tool_router]
impl CompassMcpServer {
    #[tool(
        name = "recommend-mcp-servers",
        description = "Use this tool when there is a need to find external MCP servers \
            that can extend your capabilities. Describe the capability you need in natural \
            language, naming the platform, the operation and any relevant context. Returns \
            a ranked list of matching servers with their GitHub URLs and similarity scores."
    )]
    async fn recommend_mcp_servers(
        &self,
        Parameters(request): Parameters<RecommendRequest>,
    ) -> std::result::Result<CallToolResult, McpError> {
        let query = Query::new(request.query).map_err(|e| {
            error!("Rejected tool call: {}", e);
            McpError::from(e)
        })?;

        match recommend(self.api.as_ref(), &query).await {
            Ok(text) => {
                info!("{} completed successfully", TOOL_NAME);
                Ok(CallToolResult::success(vec![Content::text(text)]))
            }
            Err(e) => {
                error!("{} failed: {}", TOOL_NAME, e);
                Err(e.into())
            }
        }
    }
}

#[tool_handler]
impl ServerHandler for CompassMcpServer {
    fn get_info(&self) -> ServerInfo {
        let info = ServerInfo {
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(
                "Discovers MCP servers that match a natural-language capability description"
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        };
        debug!("Returning server info: {:?}", info);
        info
    }
}
