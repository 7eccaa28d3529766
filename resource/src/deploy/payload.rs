//! App definition loading

use std::path::Path;

use marathon_models::Application;
use tracing::debug;

use crate::errors::ResourceError;
use crate::filesys::file::File;
use crate::models::request::{OutParams, Replacement};

/// Read the app definition named by `params.app_json` from `base_dir`.
///
/// Replacements are applied to the raw text before decoding. A non-empty
/// `app_id` overrides the definition's own `id`.
pub async fn load_app(
    params: &OutParams,
    base_dir: &Path,
    app_id: &str,
) -> Result<Application, ResourceError> {
    let file = File::in_dir(base_dir, &params.app_json)?;
    debug!("Reading app definition from {}", file.path().display());

    let raw = file.read_string().await.map_err(|e| {
        ResourceError::PayloadError(format!("unable to read {}: {}", file.path().display(), e))
    })?;

    let mut app = parse_app(&apply_replacements(&raw, &params.replacements))?;

    if !app_id.is_empty() {
        app.id = app_id.to_string();
    }
    if app.id.is_empty() {
        return Err(ResourceError::PayloadError(
            "app definition has no id and source.app_id is not set".to_string(),
        ));
    }

    Ok(app)
}

/// Substitute every occurrence of each replacement name, in order
pub fn apply_replacements(raw: &str, replacements: &[Replacement]) -> String {
    replacements
        .iter()
        .filter(|r| !r.name.is_empty())
        .fold(raw.to_string(), |text, r| text.replace(&r.name, &r.value))
}

/// Decode an app definition
pub fn parse_app(raw: &str) -> Result<Application, ResourceError> {
    serde_json::from_str(raw)
        .map_err(|e| ResourceError::PayloadError(format!("invalid app definition: {}", e)))
}
