//! Utility functions

use serde::{Deserialize, Serialize};

/// Version information for the resource binary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionInfo {
    pub version: String,
    pub git_hash: String,
    pub build_time: String,
}

/// Get version information
pub fn version_info() -> VersionInfo {
    VersionInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        git_hash: option_env!("GIT_HASH").unwrap_or("unknown").to_string(),
        build_time: option_env!("BUILD_TIME").unwrap_or("unknown").to_string(),
    }
}

/// Path segments of a Marathon app ID, e.g. `/group/web` -> `["group", "web"]`
pub fn app_id_segments(app_id: &str) -> Vec<&str> {
    app_id
        .split('/')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}
