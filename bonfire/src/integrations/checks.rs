//! Per-type connectivity checks

use async_trait::async_trait;
use http::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use http::Method;
use serde_json::json;

use crate::errors::BonfireError;
use crate::http::client::HttpClient;
use crate::models::integration::{AuthScheme, CustomApiConfig, IntegrationConfig};

/// A live connectivity check for one integration type.
///
/// `Ok(false)` covers missing configuration and non-2xx responses; errors are
/// collapsed to `false` by the tester.
#[async_trait]
pub trait ConnectivityCheck: Send + Sync {
    async fn check(&self, config: &IntegrationConfig, http: &HttpClient) -> Result<bool, BonfireError>;
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn header_value(value: &str) -> Result<HeaderValue, BonfireError> {
    HeaderValue::from_str(value)
        .map_err(|e| BonfireError::ConfigError(format!("invalid header value: {}", e)))
}

/// Posts a test message to the webhook. A bot token alone is accepted as-is.
pub struct SlackCheck;

#[async_trait]
impl ConnectivityCheck for SlackCheck {
    async fn check(&self, config: &IntegrationConfig, http: &HttpClient) -> Result<bool, BonfireError> {
        let IntegrationConfig::Slack(slack) = config else {
            return Ok(false);
        };

        match (present(&slack.webhook_url), present(&slack.token)) {
            (Some(webhook_url), _) => {
                let request = http
                    .request(Method::POST, webhook_url)?
                    .json(&json!({ "text": "BonFire connection test" }));
                http.probe(request).await
            }
            (None, Some(_)) => Ok(true),
            (None, None) => Ok(false),
        }
    }
}

/// Fetches the authenticated Jira user.
pub struct JiraCheck;

#[async_trait]
impl ConnectivityCheck for JiraCheck {
    async fn check(&self, config: &IntegrationConfig, http: &HttpClient) -> Result<bool, BonfireError> {
        let IntegrationConfig::Jira(jira) = config else {
            return Ok(false);
        };
        let (Some(base_url), Some(email), Some(api_token)) = (
            present(&jira.base_url),
            present(&jira.email),
            present(&jira.api_token),
        ) else {
            return Ok(false);
        };

        let url = format!("{}/rest/api/3/myself", base_url.trim_end_matches('/'));
        let request = http
            .request(Method::GET, &url)?
            .basic_auth(email, Some(api_token))
            .header(CONTENT_TYPE, "application/json");
        http.probe(request).await
    }
}

/// Fetches the authenticated GitHub user.
pub struct GithubCheck {
    api_base: String,
}

impl GithubCheck {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }
}

#[async_trait]
impl ConnectivityCheck for GithubCheck {
    async fn check(&self, config: &IntegrationConfig, http: &HttpClient) -> Result<bool, BonfireError> {
        let IntegrationConfig::Github(github) = config else {
            return Ok(false);
        };
        let Some(token) = present(&github.token) else {
            return Ok(false);
        };

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, header_value(&format!("token {}", token))?);

        let url = format!("{}/user", self.api_base.trim_end_matches('/'));
        http.probe(http.get(&url, headers)?).await
    }
}

/// Placeholder: only verifies that a host and database name are configured.
pub struct DatabaseCheck;

#[async_trait]
impl ConnectivityCheck for DatabaseCheck {
    async fn check(&self, config: &IntegrationConfig, _http: &HttpClient) -> Result<bool, BonfireError> {
        let IntegrationConfig::Database(database) = config else {
            return Ok(false);
        };
        Ok(!database.host.is_empty() && !database.database.is_empty())
    }
}

/// Accepts any configuration carrying an API key.
pub struct McpCheck;

#[async_trait]
impl ConnectivityCheck for McpCheck {
    async fn check(&self, config: &IntegrationConfig, _http: &HttpClient) -> Result<bool, BonfireError> {
        let IntegrationConfig::Mcp(mcp) = config else {
            return Ok(false);
        };
        Ok(!mcp.api_key.is_empty())
    }
}

/// Calls the configured endpoint with its method, headers and auth.
pub struct CustomApiCheck;

impl CustomApiCheck {
    fn headers(config: &CustomApiConfig) -> Result<HeaderMap, BonfireError> {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| BonfireError::ConfigError(format!("invalid header name: {}", e)))?;
            headers.insert(name, header_value(value)?);
        }

        // Basic credentials are stored but never sent
        if let Some(auth) = &config.auth {
            match (auth.scheme, present(&auth.token)) {
                (AuthScheme::Bearer, Some(token)) => {
                    headers.insert(AUTHORIZATION, header_value(&format!("Bearer {}", token))?);
                }
                (AuthScheme::ApiKey, Some(token)) => {
                    headers.insert(HeaderName::from_static("x-api-key"), header_value(token)?);
                }
                _ => {}
            }
        }

        Ok(headers)
    }
}

#[async_trait]
impl ConnectivityCheck for CustomApiCheck {
    async fn check(&self, config: &IntegrationConfig, http: &HttpClient) -> Result<bool, BonfireError> {
        let IntegrationConfig::CustomApi(api) = config else {
            return Ok(false);
        };
        if api.base_url.is_empty() {
            return Ok(false);
        }

        let headers = Self::headers(api)?;
        let request = http.request(api.method.into(), &api.base_url)?.headers(headers);
        http.probe(request).await
    }
}
