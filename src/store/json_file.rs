//! JSON-file preference store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, info};

use crate::error::StoreError;

use super::traits::{PreferenceStore, Preferences};

/// Preference store backed by a single pretty-printed JSON file.
///
/// The file is created on first save; loading before that yields defaults.
/// Parent directories are created as needed.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        info!(path = %path.display(), "Preference store at");
        Self { path }
    }

    /// Where the blob lives on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PreferenceStore for JsonFileStore {
    async fn load(&self) -> Result<Preferences, StoreError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No preference file yet, using defaults");
            return Ok(Preferences::default());
        }
        let raw = fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&raw)?)
    }

    async fn save(&self, prefs: &Preferences) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let raw = serde_json::to_string_pretty(prefs)?;
        fs::write(&self.path, raw).await?;
        debug!(path = %self.path.display(), "Preferences saved");
        Ok(())
    }
}
