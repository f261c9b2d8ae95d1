use miette::Diagnostic;
use rmcp::ErrorData as McpError;
use serde_json::json;
use thiserror::Error;

/// Errors produced while answering a recommendation request
#[derive(Error, Diagnostic, Debug)]
pub enum CompassError {
    #[error("Invalid parameter '{parameter}': {reason}")]
    #[diagnostic(
        code(compass::invalid_parameter),
        help("Describe the capability you need, e.g. 'MCP Server for Stripe refund webhook handling'")
    )]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },

    #[error("Recommendation API returned HTTP {status}")]
    #[diagnostic(
        code(compass::remote_request_failed),
        help("The recommendation service at {url} rejected the request or is unavailable")
    )]
    RemoteRequest { status: u16, url: String },

    #[error("Failed to reach the recommendation API")]
    #[diagnostic(
        code(compass::transport_failed),
        help("Check network connectivity to {url}")
    )]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Recommendation API returned a malformed response")]
    #[diagnostic(
        code(compass::malformed_response),
        help("Expected a JSON array of server descriptors")
    )]
    MalformedResponse {
        #[source]
        source: serde_json::Error,
        #[source_code]
        raw_body: String,
    },

    #[error("Failed to build HTTP client")]
    #[diagnostic(code(compass::http_client_init))]
    HttpClientInit {
        #[source]
        source: reqwest::Error,
    },
}

pub type Result<T> = std::result::Result<T, CompassError>;

impl CompassError {
    pub fn empty_query() -> Self {
        Self::InvalidParameter {
            parameter: "query",
            reason: "must contain at least one character".to_string(),
        }
    }

    /// Short machine-readable tag used in protocol error payloads
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidParameter { .. } => "invalid_parameter",
            Self::RemoteRequest { .. } => "remote_request_error",
            Self::Transport { .. } => "transport_error",
            Self::MalformedResponse { .. } => "malformed_response",
            Self::HttpClientInit { .. } => "http_client_init",
        }
    }
}

impl From<CompassError> for McpError {
    fn from(err: CompassError) -> Self {
        let kind = err.kind();
        match &err {
            CompassError::InvalidParameter { parameter, reason } => McpError::invalid_params(
                err.to_string(),
                Some(json!({
                    "parameter": parameter,
                    "error_type": kind,
                    "details": reason,
                })),
            ),
            CompassError::RemoteRequest { status, url } => McpError::internal_error(
                err.to_string(),
                Some(json!({
                    "status": status,
                    "url": url,
                    "error_type": kind,
                })),
            ),
            CompassError::Transport { url, source } => McpError::internal_error(
                err.to_string(),
                Some(json!({
                    "url": url,
                    "error_type": kind,
                    "details": source.to_string(),
                })),
            ),
            CompassError::MalformedResponse { source, .. } => McpError::internal_error(
                err.to_string(),
                Some(json!({
                    "error_type": kind,
                    "details": source.to_string(),
                    "line": source.line(),
                    "column": source.column(),
                })),
            ),
            CompassError::HttpClientInit { source } => McpError::internal_error(
                err.to_string(),
                Some(json!({
                    "error_type": kind,
                    "details": source.to_string(),
                })),
            ),
        }
    }
}
