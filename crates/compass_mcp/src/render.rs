//! Text rendering of recommendation results

use crate::types::ServerDescriptor;

/// Returned when the service has no recommendation for a query
pub const NO_RESULTS_MESSAGE: &str = "No MCP servers found for the given query. \
Try to make your query more specific by mentioning the platform, the operation \
and the service provider (e.g. 'MCP Server for Stripe refund webhook handling').";

/// Format a similarity score in [0, 1] as a percentage with one decimal place.
///
/// Ties round half away from zero, so 0.3125 renders as `31.3%`.
pub fn format_similarity(similarity: f64) -> String {
    format!("{:.1}%", (similarity * 1000.0).round() / 10.0)
}

/// Render one server as its five-line block, numbered from 1
pub fn render_server(index: usize, server: &ServerDescriptor) -> String {
    format!(
        "Server {}:\nTitle: {}\nDescription: {}\nGitHub URL: {}\nSimilarity: {}",
        index + 1,
        server.title,
        server.description,
        server.github_url,
        format_similarity(server.similarity)
    )
}

/// Render the full tool output, preserving the order the service returned
pub fn render_servers(servers: &[ServerDescriptor]) -> String {
    if servers.is_empty() {
        return NO_RESULTS_MESSAGE.to_string();
    }

    servers
        .iter()
        .enumerate()
        .map(|(index, server)| render_server(index, server))
        .collect::<Vec<_>>()
        .join("\n\n")
}
