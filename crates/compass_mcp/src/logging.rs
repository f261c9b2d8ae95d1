//! Tracing setup. stdout carries the MCP protocol, so logs always go to stderr.

use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingConfig;

/// Filter directive for a level: our crate at `level`, everything else at warn
pub fn filter_directive(level: &str) -> String {
    format!("compass_mcp={level},rmcp={level},warn")
}

fn build_filter(config: &LoggingConfig) -> EnvFilter {
    if config.verbose {
        return EnvFilter::new(filter_directive("debug"));
    }
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(&config.level)))
}

/// Install the global subscriber; later calls are ignored
pub fn init(config: &LoggingConfig) {
    let builder = fmt()
        .with_env_filter(build_filter(config))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_ansi(false)
        .with_timer(fmt::time::LocalTime::rfc_3339());

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };

    if let Err(e) = result {
        eprintln!("tracing already initialised: {e}");
    }
}
