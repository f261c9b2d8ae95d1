//! Runtime configuration for the compass MCP server

use crate::client::{DEFAULT_API_BASE, DEFAULT_USER_AGENT};

#[derive(Debug, Clone)]
pub struct CompassConfig {
    /// Origin of the recommendation service
    pub api_base: String,

    /// `User-Agent` header sent to the recommendation service
    pub user_agent: String,

    /// Logging configuration
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter level used when `RUST_LOG` is not set
    pub level: String,

    /// Force debug output for this crate, ignoring `RUST_LOG`
    pub verbose: bool,

    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for CompassConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            verbose: false,
            json: false,
        }
    }
}

impl CompassConfig {
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.logging.verbose = verbose;
        self
    }

    pub fn json_logs(mut self, json: bool) -> Self {
        self.logging.json = json;
        self
    }
}
