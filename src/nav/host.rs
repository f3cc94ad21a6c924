//! Host seam between flow logic and whatever executes transitions.

use async_trait::async_trait;

use crate::error::NavError;

use super::route::Route;

/// How a transition manipulates back-stack history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavOptions {
    /// Remove this route and everything above it before pushing the
    /// target. A route that appears more than once is cleared from its
    /// most recent occurrence. `None` leaves history alone.
    pub clear_history_up_to: Option<Route>,
}

impl NavOptions {
    /// Plain push, history untouched.
    pub fn push() -> Self {
        Self::default()
    }

    /// Replace-style transition: `route` and everything above it are
    /// removed, then the target is pushed.
    pub fn clearing(route: Route) -> Self {
        Self {
            clear_history_up_to: Some(route),
        }
    }
}

/// Executes route transitions on behalf of the flow components.
///
/// The flow side decides *where* to go and *what* to clear; the host owns
/// the actual history. Implementations must apply the history pruning and
/// the push as one atomic step so observers never see an intermediate
/// stack.
#[async_trait]
pub trait NavigationHost: Send + Sync {
    /// Navigate to `route`, applying `options` to the back stack first.
    async fn navigate_to(&self, route: Route, options: NavOptions) -> Result<(), NavError>;
}
