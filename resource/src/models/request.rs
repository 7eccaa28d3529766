//! Requests read from stdin

use secrecy::SecretString;
use serde::Deserialize;

use crate::logs::LogLevel;
use crate::models::response::Version;

/// Resource `source` configuration, shared by every command
#[derive(Debug, Deserialize)]
pub struct Source {
    /// Marathon base URL, e.g. `https://marathon.example.com:8080`
    #[serde(default)]
    pub uri: String,

    /// Marathon application ID
    #[serde(default)]
    pub app_id: String,

    /// HTTP basic auth credentials
    #[serde(default)]
    pub basic_auth: Option<BasicAuth>,

    /// DC/OS ACS token, sent as `Authorization: token=<api_token>`
    #[serde(default)]
    pub api_token: Option<SecretString>,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Emit logs as JSON lines
    #[serde(default)]
    pub json_logs: bool,

    /// Per-request HTTP timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for Source {
    fn default() -> Self {
        Self {
            uri: String::new(),
            app_id: String::new(),
            basic_auth: None,
            api_token: None,
            log_level: LogLevel::Info,
            json_logs: false,
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Basic auth credentials
#[derive(Debug, Deserialize)]
pub struct BasicAuth {
    pub user_name: String,
    pub password: SecretString,
}

/// `check` request
#[derive(Debug, Default, Deserialize)]
pub struct CheckRequest {
    #[serde(default)]
    pub source: Source,

    /// Last version seen by the pipeline; absent on the first check
    #[serde(default)]
    pub version: Option<Version>,
}

/// `in` request
#[derive(Debug, Deserialize)]
pub struct InRequest {
    #[serde(default)]
    pub source: Source,
    pub version: Version,
}

/// `out` request
#[derive(Debug, Deserialize)]
pub struct OutRequest {
    #[serde(default)]
    pub source: Source,
    pub params: OutParams,
}

/// `out` params
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutParams {
    /// Path of the app definition, relative to the sources directory
    pub app_json: String,

    /// Minutes to wait for the deployment before cancelling it
    #[serde(default = "default_timeout", alias = "time_out")]
    pub timeout: u64,

    /// Force the update even if the app is locked by another deployment
    #[serde(default)]
    pub force: bool,

    /// Text substitutions applied to the app definition before decoding
    #[serde(default)]
    pub replacements: Vec<Replacement>,
}

fn default_timeout() -> u64 {
    5
}

/// A `name` -> `value` substitution
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Replacement {
    pub name: String,
    pub value: String,
}
