//! HTTP access to the remote recommendation service

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error};

use crate::error::{CompassError, Result};
use crate::types::{Query, ServerDescriptor};

/// Production origin of the recommendation service
pub const DEFAULT_API_BASE: &str = "https://registry.mcphub.io";

/// `User-Agent` sent unless configured otherwise
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Anything that can turn a query into an ordered list of recommended servers
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecommendationApi: Send + Sync {
    /// Fetch recommendations, most relevant first.
    ///
    /// An empty vector means the service found nothing.
    async fn recommend(&self, query: &Query) -> Result<Vec<ServerDescriptor>>;
}

/// Build `{base}/recommend?description={query}` with the query percent-encoded
pub fn recommend_url(base: &str, query: &Query) -> String {
    format!(
        "{}/recommend?description={}",
        base.trim_end_matches('/'),
        urlencoding::encode(query.as_str())
    )
}

/// reqwest-backed client for the recommendation service
#[derive(Debug, Clone)]
pub struct CompassClient {
    base_url: String,
    client: Client,
}

impl CompassClient {
    /// Create a client for the given base origin
    pub fn new(base_url: impl Into<String>, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|source| CompassError::HttpClientInit { source })?;

        Ok(Self::with_client(base_url, client))
    }

    /// Use an existing reqwest client
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl RecommendationApi for CompassClient {
    async fn recommend(&self, query: &Query) -> Result<Vec<ServerDescriptor>> {
        let url = recommend_url(&self.base_url, query);
        debug!(url = %url, "Requesting recommendations");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| {
                error!(url = %url, "Recommendation request failed: {}", source);
                CompassError::Transport {
                    url: url.clone(),
                    source,
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            error!(status = status.as_u16(), url = %url, "Recommendation API returned an error status");
            return Err(CompassError::RemoteRequest {
                status: status.as_u16(),
                url,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| CompassError::Transport {
                url: url.clone(),
                source,
            })?;

        parse_recommendations(body)
    }
}

/// Decode a response body; `null` counts as an empty list
pub fn parse_recommendations(body: String) -> Result<Vec<ServerDescriptor>> {
    match serde_json::from_str::<Option<Vec<ServerDescriptor>>>(&body) {
        Ok(servers) => Ok(servers.unwrap_or_default()),
        Err(source) => {
            error!("Failed to parse recommendation response: {}", source);
            Err(CompassError::MalformedResponse {
                source,
                raw_body: body,
            })
        }
    }
}
