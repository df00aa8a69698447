//! Integration connectivity tester

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::errors::BonfireError;
use crate::http::client::HttpClient;
use crate::integrations::checks::{
    ConnectivityCheck, CustomApiCheck, DatabaseCheck, GithubCheck, JiraCheck, McpCheck, SlackCheck,
};
use crate::models::integration::{Integration, IntegrationStatus, IntegrationType};
use crate::store::IntegrationRepository;

/// Tester options
#[derive(Debug, Clone)]
pub struct TesterOptions {
    /// Timeout applied to each outbound request
    pub request_timeout: Duration,

    /// Base URL of the GitHub REST API
    pub github_api_base: String,
}

impl Default for TesterOptions {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            github_api_base: "https://api.github.com".to_string(),
        }
    }
}

/// Runs the connectivity check registered for an integration's type and
/// records the outcome in its status.
pub struct IntegrationTester {
    integrations: Arc<IntegrationRepository>,
    http_client: HttpClient,
    checks: HashMap<IntegrationType, Arc<dyn ConnectivityCheck>>,
}

impl IntegrationTester {
    /// Create a tester with the built-in checks registered
    pub fn new(
        integrations: Arc<IntegrationRepository>,
        options: &TesterOptions,
    ) -> Result<Self, BonfireError> {
        let mut tester = Self {
            integrations,
            http_client: HttpClient::new(options.request_timeout)?,
            checks: HashMap::new(),
        };

        tester
            .register(IntegrationType::Slack, Arc::new(SlackCheck))
            .register(IntegrationType::Jira, Arc::new(JiraCheck))
            .register(
                IntegrationType::Github,
                Arc::new(GithubCheck::new(options.github_api_base.clone())),
            )
            .register(IntegrationType::Database, Arc::new(DatabaseCheck))
            .register(IntegrationType::Mcp, Arc::new(McpCheck))
            .register(IntegrationType::CustomApi, Arc::new(CustomApiCheck));

        Ok(tester)
    }

    /// Register (or replace) the check for an integration type
    pub fn register(
        &mut self,
        integration_type: IntegrationType,
        check: Arc<dyn ConnectivityCheck>,
    ) -> &mut Self {
        self.checks.insert(integration_type, check);
        self
    }

    /// Test a stored integration by ID.
    ///
    /// Success marks it `connected`, failure marks it `error`.
    pub async fn test(&self, integration_id: &str) -> Result<bool, BonfireError> {
        let integration = self
            .integrations
            .get(integration_id)
            .ok_or_else(|| BonfireError::integration_not_found(integration_id))?;

        let connected = self.check(&integration).await;

        // Re-read so a concurrent delete is not undone
        if let Some(mut current) = self.integrations.get(integration_id) {
            current.status = if connected {
                IntegrationStatus::Connected
            } else {
                IntegrationStatus::Error
            };
            self.integrations.put(current);
        }

        info!(
            "Tested {} integration {}: {}",
            integration.integration_type(),
            integration.id,
            if connected { "connected" } else { "failed" }
        );
        Ok(connected)
    }

    /// Run the check for an integration without touching the store
    pub async fn check(&self, integration: &Integration) -> bool {
        let integration_type = integration.integration_type();
        let Some(check) = self.checks.get(&integration_type) else {
            debug!("No connectivity check registered for {}", integration_type);
            return false;
        };

        match check.check(&integration.config, &self.http_client).await {
            Ok(connected) => connected,
            Err(e) => {
                debug!("Connectivity check for {} failed: {}", integration.id, e);
                false
            }
        }
    }
}
