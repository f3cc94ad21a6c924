//! In-process back-stack navigator.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::error::NavError;

use super::host::{NavOptions, NavigationHost};
use super::route::Route;

/// Reference [`NavigationHost`] backed by a plain route stack.
///
/// The stack is never empty: it starts with a root route and `back` refuses
/// to pop the last entry. Pruning and pushing happen under one write lock,
/// so a transition is observed all-or-nothing. A boundary route that appears
/// more than once is pruned from its most recent occurrence, matching
/// pop-to-destination back-stack semantics.
pub struct BackStackNavigator {
    stack: RwLock<Vec<Route>>,
}

impl BackStackNavigator {
    /// Create a navigator sitting on `root`.
    pub fn new(root: Route) -> Self {
        Self {
            stack: RwLock::new(vec![root]),
        }
    }

    /// The route currently on top.
    pub async fn current(&self) -> Route {
        *self
            .stack
            .read()
            .await
            .last()
            .expect("back stack is never empty")
    }

    /// Pop the top route and return the newly exposed one, or `None` when
    /// already at the root.
    pub async fn back(&self) -> Option<Route> {
        let mut stack = self.stack.write().await;
        if stack.len() <= 1 {
            debug!("Back pressed at root, nothing to pop");
            return None;
        }
        let left = stack.pop();
        let now = *stack.last().expect("back stack is never empty");
        debug!(left = ?left, now = %now, "Back navigation");
        Some(now)
    }

    /// Snapshot of the stack, bottom first.
    pub async fn stack(&self) -> Vec<Route> {
        self.stack.read().await.clone()
    }

    /// Number of entries on the stack.
    pub async fn depth(&self) -> usize {
        self.stack.read().await.len()
    }
}

#[async_trait]
impl NavigationHost for BackStackNavigator {
    async fn navigate_to(&self, route: Route, options: NavOptions) -> Result<(), NavError> {
        let mut stack = self.stack.write().await;

        if let Some(boundary) = options.clear_history_up_to
            && let Some(pos) = stack.iter().rposition(|r| *r == boundary)
        {
            stack.truncate(pos);
        }

        // Re-entering the top route is a no-op, not a duplicate entry.
        if stack.last() != Some(&route) {
            stack.push(route);
        }

        info!(route = %route, stack = ?stack, "Navigated");
        Ok(())
    }
}
