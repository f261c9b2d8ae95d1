use clap::Parser;
use compass_mcp::{CompassConfig, CompassMcpServer, DEFAULT_API_BASE, logging};
use miette::Result;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
/// MCP server that recommends other MCP servers for a described capability
struct Args {
    /// Base URL of the recommendation service
    #[arg(long, env = "COMPASS_API_URL", default_value = DEFAULT_API_BASE)]
    api_url: String,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = CompassConfig::default()
        .with_api_base(args.api_url)
        .verbose(args.verbose)
        .json_logs(args.json_logs);

    logging::init(&config.logging);

    info!("Starting compass MCP server...");
    let server = CompassMcpServer::from_config(&config)?;
    server.run_stdio().await
}
