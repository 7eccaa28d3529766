//! File operations

use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::errors::ResourceError;

/// A file wrapper with path
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
}

impl File {
    /// Create a new file reference
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve `name` against a base directory.
    ///
    /// `name` must stay inside `base`: absolute paths and `..` components are
    /// rejected.
    pub fn in_dir(base: &Path, name: &str) -> Result<Self, ResourceError> {
        let relative = Path::new(name);
        let escapes = relative.is_absolute()
            || relative
                .components()
                .any(|c| matches!(c, std::path::Component::ParentDir));
        if name.is_empty() || escapes {
            return Err(ResourceError::PayloadError(format!(
                "invalid path {:?}: must be relative to {}",
                name,
                base.display()
            )));
        }
        Ok(Self::new(base.join(relative)))
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read file contents as string
    pub async fn read_string(&self) -> Result<String, ResourceError> {
        Ok(fs::read_to_string(&self.path).await?)
    }

    /// Read file as JSON
    pub async fn read_json<T: DeserializeOwned>(&self) -> Result<T, ResourceError> {
        let contents = self.read_string().await?;
        let value = serde_json::from_str(&contents)?;
        Ok(value)
    }

    /// Write string to file
    pub async fn write_string(&self, contents: &str) -> Result<(), ResourceError> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let mut file = fs::File::create(&self.path).await?;
        file.write_all(contents.as_bytes()).await?;
        file.sync_all().await?;
        Ok(())
    }

    /// Write pretty-printed JSON to file
    pub async fn write_json<T: Serialize>(&self, value: &T) -> Result<(), ResourceError> {
        let contents = serde_json::to_string_pretty(value)?;
        self.write_string(&contents).await
    }
}
