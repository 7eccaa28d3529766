//! Error types for the Marathon resource

use thiserror::Error;

/// Main error type for the resource
#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Marathon API error: {0}")]
    ApiError(String),

    #[error("App definition error: {0}")]
    PayloadError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Deployment {0} timed out")]
    DeploymentTimeout(String),

    #[error("Deployment {deployment_id} timed out and could not be cancelled: {reason}")]
    CancelFailed {
        deployment_id: String,
        reason: String,
    },

    #[error("Usage error: {0}")]
    UsageError(String),
}
