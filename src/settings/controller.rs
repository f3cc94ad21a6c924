//! Settings-screen collaborator.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::signal::SharedSignal;
use crate::store::{PreferenceStore, Preferences};

use super::model::{IconPack, ShellSettings};

/// Mutates wallpaper settings, persists them, and raises the shared
/// icons-changed signal for icon-affecting fields.
///
/// Setting a field to its current value is a no-op: nothing is persisted
/// and the signal stays down. Persistence failures are logged and do not
/// block the in-memory change, so the running session keeps the value the
/// user picked.
pub struct SettingsController {
    settings: RwLock<ShellSettings>,
    store: Arc<dyn PreferenceStore>,
    icons_changed: Arc<SharedSignal>,
}

impl SettingsController {
    /// Controller seeded with an explicit settings snapshot.
    pub fn new(
        initial: ShellSettings,
        store: Arc<dyn PreferenceStore>,
        icons_changed: Arc<SharedSignal>,
    ) -> Self {
        Self {
            settings: RwLock::new(initial),
            store,
            icons_changed,
        }
    }

    /// Controller seeded from the persisted settings. Falls back to
    /// defaults when the store cannot be read.
    pub async fn from_store(store: Arc<dyn PreferenceStore>, icons_changed: Arc<SharedSignal>) -> Self {
        let settings = match store.load().await {
            Ok(prefs) => prefs.settings,
            Err(e) => {
                warn!(error = %e, "Failed to load settings, starting from defaults");
                ShellSettings::default()
            }
        };
        Self::new(settings, store, icons_changed)
    }

    /// Current settings snapshot.
    pub async fn settings(&self) -> ShellSettings {
        *self.settings.read().await
    }

    /// Switch icon packs. Icon-affecting: raises the shared signal.
    pub async fn set_icon_pack(&self, pack: IconPack) {
        let changed = {
            let mut settings = self.settings.write().await;
            if settings.icon_pack == pack {
                false
            } else {
                settings.icon_pack = pack;
                true
            }
        };
        if !changed {
            return;
        }
        info!(pack = %pack, "Icon pack changed");
        self.persist().await;
        self.icons_changed.set(true).await;
    }

    /// Toggle icon animation. Icon-affecting: raises the shared signal.
    pub async fn set_animated_icons(&self, on: bool) {
        let changed = {
            let mut settings = self.settings.write().await;
            if settings.animated_icons == on {
                false
            } else {
                settings.animated_icons = on;
                true
            }
        };
        if !changed {
            return;
        }
        info!(animated = on, "Icon animation toggled");
        self.persist().await;
        self.icons_changed.set(true).await;
    }

    /// Toggle the double-tap gesture. Persisted, but not icon-affecting,
    /// so the signal stays as it is.
    pub async fn set_double_tap_cycle(&self, on: bool) {
        let changed = {
            let mut settings = self.settings.write().await;
            if settings.double_tap_cycle == on {
                false
            } else {
                settings.double_tap_cycle = on;
                true
            }
        };
        if !changed {
            return;
        }
        info!(double_tap = on, "Double-tap cycle toggled");
        self.persist().await;
    }

    /// Home-side acknowledgement: the icon state has been rebuilt, lower
    /// the signal so late subscribers do not re-handle a stale change.
    pub async fn acknowledge_icons_refreshed(&self) {
        self.icons_changed.set(false).await;
    }

    async fn persist(&self) {
        let settings = *self.settings.read().await;
        let mut prefs = match self.store.load().await {
            Ok(prefs) => prefs,
            Err(e) => {
                warn!(error = %e, "Failed to load preferences before saving settings");
                Preferences::default()
            }
        };
        prefs.settings = settings;
        if let Err(e) = self.store.save(&prefs).await {
            warn!(error = %e, "Failed to persist settings");
        }
    }
}
