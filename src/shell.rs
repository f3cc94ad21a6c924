//! Shell wiring — session scope, launch routing, component construction.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::config::ShellConfig;
use crate::error::Result;
use crate::nav::{NavOptions, NavigationBridge, NavigationHost, Route};
use crate::onboarding::{OnboardingFlow, SlideDeck};
use crate::settings::SettingsController;
use crate::signal::SharedSignal;
use crate::store::PreferenceStore;

/// State shared by the screens of one logical session.
///
/// Owns the icons-changed signal. Screens receive the signal by reference,
/// never construct their own, so a change raised on the settings screen is
/// the same observable the home screen watches. Dropping the scope ends
/// every subscription.
pub struct SessionScope {
    id: Uuid,
    icons_changed: Arc<SharedSignal>,
}

impl SessionScope {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            icons_changed: Arc::new(SharedSignal::default()),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The shared icons-changed signal.
    pub fn icons_changed(&self) -> &Arc<SharedSignal> {
        &self.icons_changed
    }
}

impl Default for SessionScope {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-level wiring for the live-wallpaper UI shell.
///
/// Holds the store and navigation host every component shares, plus the
/// session scope. A rendering surface builds one of these at startup and
/// asks it for the pieces each screen needs.
pub struct AppShell {
    config: ShellConfig,
    scope: SessionScope,
    store: Arc<dyn PreferenceStore>,
    host: Arc<dyn NavigationHost>,
}

impl AppShell {
    pub fn new(
        config: ShellConfig,
        store: Arc<dyn PreferenceStore>,
        host: Arc<dyn NavigationHost>,
    ) -> Self {
        Self {
            config,
            scope: SessionScope::new(),
            store,
            host,
        }
    }

    /// Resolve the launch destination and leave splash behind.
    ///
    /// First run goes to onboarding, a completed one straight to home.
    /// Either way splash is cleared from history, so back-navigation can
    /// never land on it. An unreadable store is treated as a first run.
    pub async fn launch(&self) -> Result<Route> {
        let completed = match self.store.load().await {
            Ok(prefs) => prefs.onboarding.completed,
            Err(e) => {
                warn!(session = %self.scope.id, error = %e, "Failed to load preferences, treating launch as first run");
                false
            }
        };

        let target = if completed {
            Route::Home
        } else {
            Route::Onboarding
        };
        self.host
            .navigate_to(target, NavOptions::clearing(Route::Splash))
            .await?;

        info!(session = %self.scope.id, app = %self.config.app_name, route = %target, "Launch resolved");
        Ok(target)
    }

    /// Build the onboarding flow and the bridge that drives it.
    pub fn begin_onboarding(&self, deck: SlideDeck) -> NavigationBridge {
        NavigationBridge::new(
            self.scope.id,
            OnboardingFlow::new(deck),
            Arc::clone(&self.host),
            Arc::clone(&self.store),
        )
    }

    /// Build the settings-screen collaborator bound to this scope's
    /// icons-changed signal.
    pub async fn settings_controller(&self) -> SettingsController {
        SettingsController::from_store(
            Arc::clone(&self.store),
            Arc::clone(self.scope.icons_changed()),
        )
        .await
    }

    pub fn scope(&self) -> &SessionScope {
        &self.scope
    }

    pub fn store(&self) -> &Arc<dyn PreferenceStore> {
        &self.store
    }

    pub fn host(&self) -> &Arc<dyn NavigationHost> {
        &self.host
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::BackStackNavigator;
    use crate::settings::IconPack;
    use crate::store::{MemoryStore, Preferences};
    use tokio_stream::StreamExt;

    fn shell_over(store: Arc<dyn PreferenceStore>) -> (AppShell, Arc<BackStackNavigator>) {
        let host = Arc::new(BackStackNavigator::new(Route::Splash));
        let shell = AppShell::new(ShellConfig::default(), store, host.clone());
        (shell, host)
    }

    #[tokio::test]
    async fn first_run_launches_into_onboarding() {
        let (shell, host) = shell_over(Arc::new(MemoryStore::new()));

        let route = shell.launch().await.unwrap();

        assert_eq!(route, Route::Onboarding);
        // Splash is gone, not buried.
        assert_eq!(host.stack().await, vec![Route::Onboarding]);
        assert_eq!(host.back().await, None);
    }

    #[tokio::test]
    async fn completed_run_launches_straight_home() {
        let mut prefs = Preferences::default();
        prefs.onboarding.completed = true;
        let (shell, host) = shell_over(Arc::new(MemoryStore::with_preferences(prefs)));

        let route = shell.launch().await.unwrap();

        assert_eq!(route, Route::Home);
        assert_eq!(host.stack().await, vec![Route::Home]);
    }

    #[tokio::test]
    async fn settings_changes_reach_the_scope_signal() {
        let (shell, _host) = shell_over(Arc::new(MemoryStore::new()));
        let controller = shell.settings_controller().await;

        let mut stream = shell.scope().icons_changed().subscribe().await;
        assert_eq!(stream.next().await, Some(false));

        controller.set_icon_pack(IconPack::Neon).await;
        assert_eq!(stream.next().await, Some(true));
    }
}
