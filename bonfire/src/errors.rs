//! Error types for the BonFire service

use thiserror::Error;

/// Main error type for the BonFire service
#[derive(Error, Debug)]
pub enum BonfireError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("{0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Server error: {0}")]
    ServerError(String),
}

impl BonfireError {
    pub fn workflow_not_found() -> Self {
        BonfireError::NotFound("Workflow not found".to_string())
    }

    pub fn integration_not_found(id: &str) -> Self {
        BonfireError::NotFound(format!("Integration not found: {}", id))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, BonfireError::NotFound(_))
    }
}
