//! Bridge from onboarding decisions to route transitions.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::onboarding::{Advance, OnboardingFlow, OnboardingViewState, Slide};
use crate::store::{PreferenceStore, Preferences};

use super::host::{NavOptions, NavigationHost};
use super::route::Route;

/// What a single advance request did, consumed by the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// The flow moved; scroll the pager to this slide index.
    Advanced { index: usize },
    /// Onboarding completed and the terminal transition to home went
    /// through. The surface is being torn down.
    Finished,
    /// The request was dropped: another request was in flight, the flow
    /// had already finished, or the host refused the transition (logged,
    /// and a later request may retry).
    Ignored,
}

/// One-way life cycle of the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BridgePhase {
    /// Accepting requests.
    Idle,
    /// A request is being handled; duplicates are dropped.
    Transitioning,
    /// The terminal transition succeeded. Every later request is dropped.
    Finished,
}

/// Owns the onboarding flow and turns its advance/completion decisions
/// into navigation.
///
/// Rapid duplicate requests cannot double-advance: a request that arrives
/// while another is in flight is dropped, and once the terminal transition
/// to [`Route::Home`] succeeds the bridge latches shut. The transition
/// clears [`Route::Onboarding`] from history, so back-navigation from home
/// cannot re-enter a completed flow. Completion is persisted before
/// navigating; if the host then fails, the bridge re-arms so a later
/// request can retry the navigation.
pub struct NavigationBridge {
    session: Uuid,
    flow: RwLock<OnboardingFlow>,
    host: Arc<dyn NavigationHost>,
    store: Arc<dyn PreferenceStore>,
    phase: Mutex<BridgePhase>,
}

impl NavigationBridge {
    pub fn new(
        session: Uuid,
        flow: OnboardingFlow,
        host: Arc<dyn NavigationHost>,
        store: Arc<dyn PreferenceStore>,
    ) -> Self {
        Self {
            session,
            flow: RwLock::new(flow),
            host,
            store,
            phase: Mutex::new(BridgePhase::Idle),
        }
    }

    /// Handle one advance request from the surface (a tap on Next/Start,
    /// or a swipe committed by the pager).
    pub async fn on_advance_requested(&self) -> AdvanceOutcome {
        // Claim the transition slot before touching the flow.
        {
            let mut phase = self.phase.lock().await;
            match *phase {
                BridgePhase::Idle => *phase = BridgePhase::Transitioning,
                busy @ (BridgePhase::Transitioning | BridgePhase::Finished) => {
                    debug!(session = %self.session, phase = ?busy, "Advance request dropped");
                    return AdvanceOutcome::Ignored;
                }
            }
        }

        let step = self.flow.write().await.advance();
        let outcome = match step {
            Advance::Moved { index } => {
                info!(session = %self.session, index, "Onboarding advanced");
                AdvanceOutcome::Advanced { index }
            }
            Advance::Completed => self.finish().await,
        };

        let mut phase = self.phase.lock().await;
        *phase = if outcome == AdvanceOutcome::Finished {
            BridgePhase::Finished
        } else {
            BridgePhase::Idle
        };
        outcome
    }

    /// True once the terminal transition has gone through.
    pub async fn has_finished(&self) -> bool {
        *self.phase.lock().await == BridgePhase::Finished
    }

    /// Snapshot for the surface to draw.
    pub async fn view_state(&self) -> OnboardingViewState {
        self.flow.read().await.view_state()
    }

    /// The slide currently shown.
    pub async fn current(&self) -> Slide {
        self.flow.read().await.current().clone()
    }

    /// Whether the flow sits on its final slide.
    pub async fn is_last(&self) -> bool {
        self.flow.read().await.is_last()
    }

    /// Dot-indicator states for the current position.
    pub async fn indicator_states(&self) -> Vec<bool> {
        self.flow.read().await.indicator_states()
    }

    /// Current slide index.
    pub async fn position(&self) -> usize {
        self.flow.read().await.position()
    }

    /// Record completion and issue the terminal transition.
    async fn finish(&self) -> AdvanceOutcome {
        self.record_completion().await;

        let target = Route::Home;
        match self
            .host
            .navigate_to(target, NavOptions::clearing(Route::Onboarding))
            .await
        {
            Ok(()) => {
                info!(session = %self.session, route = %target, "Onboarding finished");
                AdvanceOutcome::Finished
            }
            Err(e) => {
                warn!(session = %self.session, error = %e, "Terminal transition failed, will accept a retry");
                AdvanceOutcome::Ignored
            }
        }
    }

    /// Persist the first-run record. Only writes once; a retry after a
    /// failed navigation must not stamp a second timestamp.
    async fn record_completion(&self) {
        let mut prefs = match self.store.load().await {
            Ok(prefs) => prefs,
            Err(e) => {
                warn!(session = %self.session, error = %e, "Failed to load preferences, recording completion on defaults");
                Preferences::default()
            }
        };
        if prefs.onboarding.completed {
            return;
        }
        prefs.onboarding.completed = true;
        prefs.onboarding.completed_at = Some(Utc::now());
        if let Err(e) = self.store.save(&prefs).await {
            warn!(session = %self.session, error = %e, "Failed to persist onboarding completion");
        }
    }
}
