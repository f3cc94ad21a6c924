//! End-to-end journeys through the shell: launch routing, the onboarding
//! pager, the terminal transition, and the settings/home signal loop.

use std::sync::Arc;
use std::time::Duration;

use futures_util::StreamExt;
use tokio::time::timeout;

use wallflow::config::ShellConfig;
use wallflow::nav::{AdvanceOutcome, BackStackNavigator, Route};
use wallflow::onboarding::{Slide, SlideDeck};
use wallflow::settings::IconPack;
use wallflow::shell::AppShell;
use wallflow::store::{JsonFileStore, MemoryStore, PreferenceStore};

const TEST_TIMEOUT: Duration = Duration::from_secs(5);

fn deck(slides: usize) -> SlideDeck {
    SlideDeck::new(
        (0..slides)
            .map(|i| Slide::new(format!("slides/{i}.png"), format!("Slide {i}"), "…"))
            .collect(),
    )
    .expect("test decks are non-empty")
}

fn shell_over(store: Arc<dyn PreferenceStore>) -> (AppShell, Arc<BackStackNavigator>) {
    let host = Arc::new(BackStackNavigator::new(Route::Splash));
    let shell = AppShell::new(ShellConfig::default(), store, host.clone());
    (shell, host)
}

#[tokio::test]
async fn first_run_walks_onboarding_and_lands_home() {
    timeout(TEST_TIMEOUT, async {
        let store: Arc<dyn PreferenceStore> = Arc::new(MemoryStore::new());
        let (shell, host) = shell_over(Arc::clone(&store));

        // Fresh install: splash resolves to onboarding and is pruned.
        assert_eq!(shell.launch().await.unwrap(), Route::Onboarding);
        assert_eq!(host.stack().await, vec![Route::Onboarding]);

        let bridge = shell.begin_onboarding(deck(3));
        assert_eq!(
            bridge.on_advance_requested().await,
            AdvanceOutcome::Advanced { index: 1 }
        );
        assert_eq!(
            bridge.on_advance_requested().await,
            AdvanceOutcome::Advanced { index: 2 }
        );
        assert!(bridge.is_last().await);

        // The Start tap: navigate home, clear onboarding from history.
        assert_eq!(bridge.on_advance_requested().await, AdvanceOutcome::Finished);
        assert_eq!(host.stack().await, vec![Route::Home]);
        assert_eq!(host.back().await, None);

        let record = store.load().await.unwrap().onboarding;
        assert!(record.completed);
        assert!(record.completed_at.is_some());
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn completed_run_skips_onboarding_on_relaunch() {
    timeout(TEST_TIMEOUT, async {
        let store: Arc<dyn PreferenceStore> = Arc::new(MemoryStore::new());

        {
            let (shell, _host) = shell_over(Arc::clone(&store));
            shell.launch().await.unwrap();
            let bridge = shell.begin_onboarding(deck(1));
            assert_eq!(bridge.on_advance_requested().await, AdvanceOutcome::Finished);
        }

        // Same preferences, new session: straight to home.
        let (shell, host) = shell_over(store);
        assert_eq!(shell.launch().await.unwrap(), Route::Home);
        assert_eq!(host.stack().await, vec![Route::Home]);
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn taps_after_completion_never_leave_home() {
    timeout(TEST_TIMEOUT, async {
        let store: Arc<dyn PreferenceStore> = Arc::new(MemoryStore::new());
        let (shell, host) = shell_over(store);
        shell.launch().await.unwrap();

        let bridge = shell.begin_onboarding(deck(2));
        bridge.on_advance_requested().await;
        assert_eq!(bridge.on_advance_requested().await, AdvanceOutcome::Finished);

        for _ in 0..3 {
            assert_eq!(bridge.on_advance_requested().await, AdvanceOutcome::Ignored);
        }
        assert_eq!(host.stack().await, vec![Route::Home]);
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn settings_change_reaches_the_home_subscriber() {
    timeout(TEST_TIMEOUT, async {
        let (shell, _host) = shell_over(Arc::new(MemoryStore::new()));
        let controller = shell.settings_controller().await;

        // Home subscribes and immediately sees the current (lowered) value.
        let mut changes = shell.scope().icons_changed().subscribe().await;
        assert_eq!(changes.next().await, Some(false));

        // Settings screen switches to an icon-affecting value.
        controller.set_icon_pack(IconPack::Outline).await;
        assert_eq!(changes.next().await, Some(true));

        // Home rebuilds its icon state and acknowledges.
        controller.acknowledge_icons_refreshed().await;
        assert_eq!(changes.next().await, Some(false));

        // A late joiner only sees the acknowledged value.
        let mut late = shell.scope().icons_changed().subscribe().await;
        assert_eq!(late.next().await, Some(false));
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn preferences_survive_restarts_on_disk() {
    timeout(TEST_TIMEOUT, async {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        {
            let store: Arc<dyn PreferenceStore> = Arc::new(JsonFileStore::new(&path));
            let (shell, _host) = shell_over(store);
            shell.launch().await.unwrap();
            let bridge = shell.begin_onboarding(deck(1));
            assert_eq!(bridge.on_advance_requested().await, AdvanceOutcome::Finished);
        }

        // A brand-new store over the same file still routes straight home.
        let store: Arc<dyn PreferenceStore> = Arc::new(JsonFileStore::new(&path));
        let (shell, host) = shell_over(store);
        assert_eq!(shell.launch().await.unwrap(), Route::Home);
        assert_eq!(host.current().await, Route::Home);
    })
    .await
    .expect("test timed out");
}
