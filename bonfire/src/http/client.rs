//! HTTP client implementation

use std::time::Duration;

use http::header::HeaderMap;
use http::Method;
use reqwest::{Client, RequestBuilder};
use tracing::{debug, warn};
use url::Url;

use crate::errors::BonfireError;

/// User agent sent with every outbound request
pub const USER_AGENT: &str = "BonFire";

/// HTTP client for outbound connectivity probes
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client
    pub fn new(timeout: Duration) -> Result<Self, BonfireError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client })
    }

    /// Start a request, rejecting URLs that do not parse
    pub fn request(&self, method: Method, url: &str) -> Result<RequestBuilder, BonfireError> {
        let url = Url::parse(url)
            .map_err(|e| BonfireError::ConfigError(format!("invalid URL {}: {}", url, e)))?;
        Ok(self.client.request(method, url))
    }

    /// Make a GET request with the given headers
    pub fn get(&self, url: &str, headers: HeaderMap) -> Result<RequestBuilder, BonfireError> {
        Ok(self.request(Method::GET, url)?.headers(headers))
    }

    /// Send a request and report whether the response status was 2xx
    pub async fn probe(&self, request: RequestBuilder) -> Result<bool, BonfireError> {
        let response = request.send().await?;
        let status = response.status();
        let host = response.url().host_str().unwrap_or("unknown").to_string();
        debug!("Probe {} -> {}", host, status);

        if !status.is_success() {
            warn!("Probe of {} failed: {}", host, status);
            return Ok(false);
        }

        Ok(true)
    }
}
