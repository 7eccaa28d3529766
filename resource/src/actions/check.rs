//! `check`: list new app versions

use tracing::{debug, info};

use crate::actions::require_app_id;
use crate::errors::ResourceError;
use crate::marathon::Marathoner;
use crate::models::request::CheckRequest;
use crate::models::response::{CheckOutput, Version};

/// Run the `check` action
pub async fn check<M>(request: &CheckRequest, client: &M) -> Result<CheckOutput, ResourceError>
where
    M: Marathoner + ?Sized,
{
    let app_id = require_app_id(&request.source)?;
    let current = request.version.as_ref().map(|v| v.reference.as_str());

    let versions = client.app_versions(app_id).await?;
    debug!("App {} has {} versions", app_id, versions.len());

    let selected = select_versions(&versions, current);
    info!("Check found {} versions for {}", selected.len(), app_id);
    Ok(selected)
}

/// Pick the versions to report from a newest-first list: the current version
/// and everything newer, oldest first. Without a known current version only
/// the latest is reported.
pub fn select_versions(newest_first: &[String], current: Option<&str>) -> Vec<Version> {
    let Some(latest) = newest_first.first() else {
        return Vec::new();
    };

    match current.and_then(|c| newest_first.iter().position(|v| v == c)) {
        Some(index) => newest_first[..=index]
            .iter()
            .rev()
            .map(|v| Version::new(v.as_str()))
            .collect(),
        None => vec![Version::new(latest.as_str())],
    }
}
