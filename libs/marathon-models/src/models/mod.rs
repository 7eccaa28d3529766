//! API models

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Marathon application definition
///
/// The resource only reads `id`; every other field is carried through untouched
/// so that definitions round-trip without loss.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Application {
    /// Application ID, e.g. `/group/my-app`
    #[serde(default)]
    pub id: String,

    /// Remaining definition fields
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl Application {
    /// Docker image from `container.docker.image`, if any
    pub fn docker_image(&self) -> Option<&str> {
        self.fields
            .get("container")?
            .get("docker")?
            .get("image")?
            .as_str()
    }
}

/// Result of an app update or a deployment rollback
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentResult {
    #[serde(rename = "deploymentId")]
    pub deployment_id: String,
    pub version: String,
}

/// A running deployment as listed by `GET /v2/deployments`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deployment {
    pub id: String,

    #[serde(default)]
    pub version: String,

    #[serde(default, rename = "affectedApps")]
    pub affected_apps: Vec<String>,

    #[serde(default, rename = "currentStep")]
    pub current_step: Option<u32>,

    #[serde(default, rename = "totalSteps")]
    pub total_steps: Option<u32>,
}

/// Response of `GET /v2/apps/{id}/versions`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppVersions {
    #[serde(default)]
    pub versions: Vec<String>,
}

impl AppVersions {
    /// Versions ordered newest first.
    ///
    /// Marathon already answers newest first; the sort only matters when a proxy
    /// reorders the list. Versions that are not RFC 3339 timestamps keep their
    /// relative position at the end.
    pub fn newest_first(&self) -> Vec<String> {
        let mut parsed: Vec<(Option<DateTime<FixedOffset>>, &String)> = self
            .versions
            .iter()
            .map(|v| (DateTime::parse_from_rfc3339(v).ok(), v))
            .collect();

        // stable sort: None sorts last, ties keep input order
        parsed.sort_by(|(a, _), (b, _)| match (a, b) {
            (Some(a), Some(b)) => b.cmp(a),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });

        parsed.into_iter().map(|(_, v)| v.clone()).collect()
    }
}
