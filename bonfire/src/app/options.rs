//! Application configuration options

use crate::filesys::file::File;
use crate::integrations::tester::TesterOptions;
use crate::storage::settings::Settings;

/// Main application options
#[derive(Debug, Clone)]
pub struct AppOptions {
    /// Server configuration
    pub server: ServerOptions,

    /// Origin allowed by CORS
    pub web_url: String,

    /// Integration tester options
    pub tester: TesterOptions,

    /// Snapshot file, if persistence across restarts is wanted
    pub snapshot_file: Option<File>,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for AppOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            server: ServerOptions {
                host: settings.server.host.clone(),
                port: settings.server.port,
            },
            web_url: settings.web_url.clone(),
            tester: TesterOptions::from(&settings.integrations),
            snapshot_file: settings.snapshot_file.clone().map(File::new),
        }
    }
}

/// HTTP server options
#[derive(Debug, Clone)]
pub struct ServerOptions {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3001,
        }
    }
}
