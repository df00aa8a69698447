//! Settings file management

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::BonfireError;
use crate::filesys::file::File;
use crate::integrations::tester::TesterOptions;
use crate::logs::LogLevel;

/// Service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Emit logs as JSON
    #[serde(default)]
    pub json_logs: bool,

    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerSettings,

    /// Origin allowed by CORS
    #[serde(default = "default_web_url")]
    pub web_url: String,

    /// Integration tester configuration
    #[serde(default)]
    pub integrations: IntegrationSettings,

    /// Where store snapshots are read at start-up and written at shutdown
    #[serde(default)]
    pub snapshot_file: Option<PathBuf>,
}

fn default_web_url() -> String {
    "http://localhost:3000".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            json_logs: false,
            server: ServerSettings::default(),
            web_url: default_web_url(),
            integrations: IntegrationSettings::default(),
            snapshot_file: None,
        }
    }
}

impl Settings {
    /// Read settings from `file`, falling back to defaults if it does not exist
    pub async fn load(file: &File) -> Result<Self, BonfireError> {
        if !file.exists().await {
            info!("No settings file at {}, using defaults", file.path().display());
            return Ok(Self::default());
        }
        file.read_json().await
    }
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3001
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Integration tester settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrationSettings {
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_github_api_base")]
    pub github_api_base: String,
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_github_api_base() -> String {
    "https://api.github.com".to_string()
}

impl Default for IntegrationSettings {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_request_timeout_secs(),
            github_api_base: default_github_api_base(),
        }
    }
}

impl From<&IntegrationSettings> for TesterOptions {
    fn from(settings: &IntegrationSettings) -> Self {
        Self {
            request_timeout: Duration::from_secs(settings.request_timeout_secs),
            github_api_base: settings.github_api_base.clone(),
        }
    }
}
