//! In-memory preference store for tests and throwaway sessions.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StoreError;

use super::traits::{PreferenceStore, Preferences};

/// Keeps the preference blob in memory. Nothing survives a drop.
#[derive(Default)]
pub struct MemoryStore {
    prefs: RwLock<Preferences>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a specific blob instead of defaults.
    pub fn with_preferences(prefs: Preferences) -> Self {
        Self {
            prefs: RwLock::new(prefs),
        }
    }
}

#[async_trait]
impl PreferenceStore for MemoryStore {
    async fn load(&self) -> Result<Preferences, StoreError> {
        Ok(self.prefs.read().await.clone())
    }

    async fn save(&self, prefs: &Preferences) -> Result<(), StoreError> {
        *self.prefs.write().await = prefs.clone();
        Ok(())
    }
}
