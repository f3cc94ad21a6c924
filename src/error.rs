//! Error types for Wallflow.

use crate::nav::Route;

/// Top-level error type for the shell.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Flow error: {0}")]
    Flow(#[from] FlowError),

    #[error("Navigation error: {0}")]
    Nav(#[from] NavError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Onboarding flow errors. The only failure mode is at construction —
/// once a deck exists, every flow operation is total.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("Onboarding deck needs at least one slide")]
    EmptyDeck,
}

/// Navigation errors reported by a host.
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    #[error("Transition to {route} failed: {reason}")]
    TransitionFailed { route: Route, reason: String },
}

/// Preference persistence errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse preferences: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias for the shell.
pub type Result<T> = std::result::Result<T, Error>;
