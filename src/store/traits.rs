//! Preference persistence seam.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::onboarding::OnboardingRecord;
use crate::settings::ShellSettings;

/// Everything the shell persists, as one blob.
///
/// Loading tolerates missing sections so older files keep working when a
/// section is added.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// First-run record that decides launch routing.
    #[serde(default)]
    pub onboarding: OnboardingRecord,
    /// Wallpaper settings the settings screen mutates.
    #[serde(default)]
    pub settings: ShellSettings,
}

/// Backend-agnostic persistence for the preference blob.
///
/// Load-modify-save is the expected usage; callers that only own one
/// section read the blob, change their section and write it back whole.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// The persisted preferences, or defaults when nothing was saved yet.
    async fn load(&self) -> Result<Preferences, StoreError>;

    /// Persist the whole blob, replacing whatever was there.
    async fn save(&self, prefs: &Preferences) -> Result<(), StoreError>;
}
