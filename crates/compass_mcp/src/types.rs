//! Request and response types for the recommendation tool

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::error::{CompassError, Result};

/// A capability description that is known to be non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(CompassError::empty_query());
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Query {
    type Error = CompassError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

/// One recommended MCP server as returned by the recommendation API.
///
/// Fields are decoded leniently: a missing or `null` field becomes an empty
/// string (or a zero similarity) instead of failing the whole response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerDescriptor {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(
        default,
        rename = "github_url",
        alias = "githubUrl",
        deserialize_with = "null_as_default"
    )]
    pub github_url: String,

    /// Relevance score in [0, 1]
    #[serde(default, deserialize_with = "null_as_default")]
    pub similarity: f64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parameters of the `recommend-mcp-servers` tool
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct RecommendRequest {
    #[schemars(
        length(min = 1),
        description = "Describe the MCP server you are looking for. Be specific: name the \
            target platform or vendor, the operation you need, and any relevant context.\n\
            Good: 'MCP Server for AWS Lambda Python3.9 deployment', \
            'MCP Server for United Airlines booking API', \
            'MCP Server for Stripe refund webhook handling'.\n\
            Bad: 'MCP Server for cloud', 'MCP Server for booking', 'MCP Server for payment'."
    )]
    pub query: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_query_rejects_empty() {
        let err = Query::new("").unwrap_err();
        assert!(matches!(
            err,
            CompassError::InvalidParameter {
                parameter: "query",
                ..
            }
        ));
    }

    #[test]
    fn test_query_keeps_text_verbatim() {
        let query = Query::new(" ").unwrap();
        assert_eq!(query.as_str(), " ");
        assert_eq!(query.to_string(), " ");
    }

    #[test]
    fn test_descriptor_decodes_wire_format() {
        let json = r#"{"title":"stripe-mcp","description":"Stripe API server","github_url":"https://github.com/x/stripe-mcp","similarity":0.912}"#;
        let descriptor: ServerDescriptor = serde_json::from_str(json).unwrap();

        assert_eq!(
            descriptor,
            ServerDescriptor {
                title: "stripe-mcp".to_string(),
                description: "Stripe API server".to_string(),
                github_url: "https://github.com/x/stripe-mcp".to_string(),
                similarity: 0.912,
            }
        );
    }

    #[test]
    fn test_descriptor_accepts_camel_case_url() {
        let descriptor: ServerDescriptor =
            serde_json::from_str(r#"{"githubUrl":"https://github.com/a/b"}"#).unwrap();
        assert_eq!(descriptor.github_url, "https://github.com/a/b");
    }

    #[test]
    fn test_descriptor_missing_and_null_fields_default() {
        let descriptor: ServerDescriptor =
            serde_json::from_str(r#"{"title":null,"similarity":null}"#).unwrap();
        assert_eq!(descriptor, ServerDescriptor::default());
    }

    #[test]
    fn test_request_schema_requires_non_empty_query() {
        let schema = serde_json::to_value(schemars::schema_for!(RecommendRequest)).unwrap();

        assert_eq!(schema["required"], serde_json::json!(["query"]));
        assert_eq!(schema["properties"]["query"]["type"], "string");
        assert_eq!(schema["properties"]["query"]["minLength"], 1);
        assert!(
            schema["properties"]["query"]["description"]
                .as_str()
                .unwrap()
                .contains("Stripe refund webhook")
        );
    }
}
