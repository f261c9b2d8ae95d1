//! Compass MCP - discover MCP servers from a capability description
//!
//! This crate exposes a single MCP tool, `recommend-mcp-servers`, that forwards
//! a natural-language query to a remote recommendation service and renders
//! the ranked servers it returns:
//! - `client`: the HTTP side, behind the `RecommendationApi` trait
//! - `render`: text output for the calling assistant
//! - `server`: the rmcp server handler and stdio runner

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod recommend;
pub mod render;
pub mod server;
pub mod types;

pub use client::{CompassClient, DEFAULT_API_BASE, DEFAULT_USER_AGENT, RecommendationApi};
pub use config::{CompassConfig, LoggingConfig};
pub use error::{CompassError, Result};
pub use recommend::recommend;
pub use server::{CompassMcpServer, TOOL_NAME};
pub use types::{Query, RecommendRequest, ServerDescriptor};
