//! GraphQL transport over HTTP
//!
//! Posts `{ query, variables }` documents and hands back `{ data, errors }`
//! untouched; deciding what a non-empty `errors` means is up to the caller.

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::shared::config::AppConfig;
use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphqlRequest {
    pub query: String,
    pub variables: Value,
}

impl GraphqlRequest {
    pub fn new(query: &str, variables: Value) -> Self {
        Self {
            query: query.to_string(),
            variables,
        }
    }
}

/// Error entry reported by the server next to (or instead of) `data`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphqlError {
    pub message: String,
    #[serde(default)]
    pub path: Option<Vec<Value>>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct GraphqlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphqlError>>,
}

impl GraphqlResponse {
    pub fn with_data(data: Value) -> Self {
        Self {
            data: Some(data),
            errors: None,
        }
    }

    pub fn with_errors(messages: &[&str]) -> Self {
        Self {
            data: None,
            errors: Some(
                messages
                    .iter()
                    .map(|message| GraphqlError {
                        message: message.to_string(),
                        path: None,
                    })
                    .collect(),
            ),
        }
    }

    /// An empty `errors` array counts as no errors
    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|errors| !errors.is_empty())
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .flatten()
            .map(|error| error.message.clone())
            .collect()
    }

    /// Deserialize `data`, failing on reported errors or a missing payload
    pub fn into_data<T: DeserializeOwned>(self) -> AppResult<T> {
        if self.has_errors() {
            return Err(AppError::ApiError(format!(
                "GraphQL errors: {}",
                self.error_messages().join("; ")
            )));
        }

        let data = self
            .data
            .ok_or_else(|| AppError::ApiError("No data field in GraphQL response".to_string()))?;

        serde_json::from_value(data).map_err(|e| {
            AppError::SerializationError(format!("Failed to deserialize GraphQL data: {}", e))
        })
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GraphqlTransport: Send + Sync {
    async fn execute(&self, request: GraphqlRequest) -> AppResult<GraphqlResponse>;
}

/// reqwest-backed transport for a single GraphQL endpoint
pub struct HttpGraphqlClient {
    client: Client,
    endpoint: String,
    access_token: Option<String>,
}

impl HttpGraphqlClient {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("vas-admin/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.graphql_url.clone(),
            access_token: config.access_token.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GraphqlTransport for HttpGraphqlClient {
    async fn execute(&self, request: GraphqlRequest) -> AppResult<GraphqlResponse> {
        tracing::debug!(
            endpoint = %self.endpoint,
            variables = %request.variables,
            "sending GraphQL request"
        );

        let mut builder = self
            .client
            .post(&self.endpoint)
            .header(header::ACCEPT, "application/json")
            .json(&request);
        if let Some(token) = &self.access_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            // GraphQL servers often report errors with a 4xx and a JSON body
            let body = response.text().await.unwrap_or_default();
            if let Ok(parsed) = serde_json::from_str::<GraphqlResponse>(&body) {
                if parsed.has_errors() {
                    tracing::warn!(%status, "GraphQL endpoint returned errors");
                    return Ok(parsed);
                }
            }
            tracing::warn!(%status, "GraphQL endpoint returned an HTTP error");
            return Err(AppError::ApiError(format!(
                "GraphQL endpoint returned error: {}",
                status
            )));
        }

        let parsed: GraphqlResponse = response.json().await?;
        if parsed.has_errors() {
            tracing::warn!(errors = ?parsed.error_messages(), "GraphQL response carries errors");
        }
        Ok(parsed)
    }
}
