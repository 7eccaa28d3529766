//! Resource actions: `check`, `in` and `out`

pub mod check;
pub mod fetch;
pub mod out;

use crate::errors::ResourceError;
use crate::models::request::Source;

/// `source.app_id`, which `check` and `in` cannot work without
pub(crate) fn require_app_id(source: &Source) -> Result<&str, ResourceError> {
    if source.app_id.trim().is_empty() {
        return Err(ResourceError::ConfigError(
            "source.app_id is required".to_string(),
        ));
    }
    Ok(source.app_id.as_str())
}
