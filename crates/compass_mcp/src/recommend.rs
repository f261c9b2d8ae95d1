//! The recommendation pipeline: query → remote call → rendered text

use tracing::{debug, info};

use crate::client::RecommendationApi;
use crate::error::Result;
use crate::render::render_servers;
use crate::types::Query;

/// Ask `api` for servers matching `query` and render the answer.
///
/// Makes exactly one call to `api`. An empty result is not an error and
/// renders as the advisory message.
pub async fn recommend(api: &dyn RecommendationApi, query: &Query) -> Result<String> {
    info!(query = %query, "Looking up MCP servers");

    let servers = api.recommend(query).await?;
    info!(count = servers.len(), "Received recommendations");
    for server in &servers {
        debug!(title = %server.title, similarity = server.similarity, "  - candidate");
    }

    Ok(render_servers(&servers))
}
