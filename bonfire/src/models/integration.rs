//! Integration models

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A typed connector configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Integration {
    /// Unique integration ID
    pub id: String,

    /// Display name
    pub name: String,

    /// Type tag and the configuration for that type
    #[serde(flatten)]
    pub config: IntegrationConfig,

    /// Connection status, changed only by connectivity tests
    #[serde(default)]
    pub status: IntegrationStatus,

    /// Free-form secrets, held in plaintext
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<HashMap<String, String>>,
}

impl Integration {
    pub fn integration_type(&self) -> IntegrationType {
        self.config.integration_type()
    }
}

/// Integration connection status
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IntegrationStatus {
    Connected,
    #[default]
    Disconnected,
    Error,
}

/// Integration type tag
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationType {
    Slack,
    Jira,
    Github,
    Database,
    Mcp,
    CustomApi,
}

impl IntegrationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntegrationType::Slack => "slack",
            IntegrationType::Jira => "jira",
            IntegrationType::Github => "github",
            IntegrationType::Database => "database",
            IntegrationType::Mcp => "mcp",
            IntegrationType::CustomApi => "custom_api",
        }
    }
}

impl std::fmt::Display for IntegrationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-type configuration. Serialized as `{"type": "...", "config": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "config", rename_all = "snake_case")]
pub enum IntegrationConfig {
    Slack(SlackConfig),
    Jira(JiraConfig),
    Github(GithubConfig),
    Database(DatabaseConfig),
    Mcp(McpConfig),
    CustomApi(CustomApiConfig),
}

impl IntegrationConfig {
    pub fn integration_type(&self) -> IntegrationType {
        match self {
            IntegrationConfig::Slack(_) => IntegrationType::Slack,
            IntegrationConfig::Jira(_) => IntegrationType::Jira,
            IntegrationConfig::Github(_) => IntegrationType::Github,
            IntegrationConfig::Database(_) => IntegrationType::Database,
            IntegrationConfig::Mcp(_) => IntegrationType::Mcp,
            IntegrationConfig::CustomApi(_) => IntegrationType::CustomApi,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlackConfig {
    #[serde(default)]
    pub webhook_url: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraConfig {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub api_token: Option<String>,
    #[serde(default)]
    pub project: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GithubConfig {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub repo: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseEngine {
    #[default]
    Postgres,
    Mysql,
    Mongodb,
    Redis,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(rename = "type", default)]
    pub engine: DatabaseEngine,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub database: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum McpProvider {
    #[default]
    Anthropic,
    Openai,
    Gemini,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McpConfig {
    #[serde(default)]
    pub provider: McpProvider,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl From<HttpMethod> for http::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => http::Method::GET,
            HttpMethod::Post => http::Method::POST,
            HttpMethod::Put => http::Method::PUT,
            HttpMethod::Delete => http::Method::DELETE,
            HttpMethod::Patch => http::Method::PATCH,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomApiConfig {
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub method: HttpMethod,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    #[serde(default)]
    pub auth: Option<ApiAuth>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AuthScheme {
    Bearer,
    Basic,
    ApiKey,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiAuth {
    #[serde(rename = "type")]
    pub scheme: AuthScheme,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// An integration to be created; ID and status are assigned on creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewIntegration {
    pub name: String,

    #[serde(flatten)]
    pub config: IntegrationConfig,

    #[serde(default)]
    pub credentials: Option<HashMap<String, String>>,
}

impl NewIntegration {
    pub fn new(name: impl Into<String>, config: IntegrationConfig) -> Self {
        Self {
            name: name.into(),
            config,
            credentials: None,
        }
    }

    pub fn into_integration(self, id: String) -> Integration {
        Integration {
            id,
            name: self.name,
            config: self.config,
            status: IntegrationStatus::Disconnected,
            credentials: self.credentials,
        }
    }
}

/// A ready-made integration template offered to callers
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationPreset {
    pub key: &'static str,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub integration_type: IntegrationType,
    pub description: &'static str,
    pub required_fields: &'static [&'static str],
}

/// Built-in integration presets
pub fn presets() -> Vec<IntegrationPreset> {
    vec![
        IntegrationPreset {
            key: "slack",
            name: "Slack",
            integration_type: IntegrationType::Slack,
            description: "Send messages and notifications to Slack channels",
            required_fields: &["webhookUrl", "channel"],
        },
        IntegrationPreset {
            key: "jira",
            name: "Jira",
            integration_type: IntegrationType::Jira,
            description: "Create and manage Jira issues",
            required_fields: &["baseUrl", "email", "apiToken", "project"],
        },
        IntegrationPreset {
            key: "github",
            name: "GitHub",
            integration_type: IntegrationType::Github,
            description: "Interact with GitHub repositories",
            required_fields: &["token"],
        },
        IntegrationPreset {
            key: "postgres",
            name: "PostgreSQL",
            integration_type: IntegrationType::Database,
            description: "Connect to PostgreSQL database",
            required_fields: &["host", "port", "database", "username", "password"],
        },
        IntegrationPreset {
            key: "anthropic",
            name: "Anthropic Claude (MCP)",
            integration_type: IntegrationType::Mcp,
            description: "AI-powered automation with Claude",
            required_fields: &["apiKey"],
        },
    ]
}
