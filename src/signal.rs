//! Shared signal — a scoped observable boolean with replay-latest semantics.
//!
//! The live-wallpaper shell uses one of these per session scope: the
//! settings screen raises it when an icon-affecting value changes, and the
//! home screen subscribes to know when to rebuild icon state. It is an
//! explicit observer list plus a last-value cell, injected into the screens
//! that share it — never a process-wide global.

use tokio::sync::{RwLock, mpsc};
use tokio_stream::wrappers::UnboundedReceiverStream;
use tracing::debug;

/// Stream of values handed to each subscriber.
///
/// The first item is the value that was current at subscribe time; every
/// later item is one `set` call, in order, with nothing skipped. The stream
/// ends when the signal's owning scope is dropped.
pub type SignalStream = UnboundedReceiverStream<bool>;

struct SignalState {
    last: bool,
    subscribers: Vec<mpsc::UnboundedSender<bool>>,
}

/// Replay-latest boolean cell with ordered fan-out.
///
/// Registration and publication are serialized by one lock, so a subscriber
/// that joins while a `set` is in progress observes that update exactly
/// once: either the old value is replayed and the new one follows, or the
/// new value is replayed on its own.
pub struct SharedSignal {
    state: RwLock<SignalState>,
}

impl SharedSignal {
    /// Create a signal holding `initial`.
    pub fn new(initial: bool) -> Self {
        Self {
            state: RwLock::new(SignalState {
                last: initial,
                subscribers: Vec::new(),
            }),
        }
    }

    /// Store a new value and notify every live subscriber.
    ///
    /// Subscribers whose stream has been dropped are pruned here.
    pub async fn set(&self, value: bool) {
        let mut state = self.state.write().await;
        state.last = value;
        state.subscribers.retain(|tx| tx.send(value).is_ok());
        debug!(value, subscribers = state.subscribers.len(), "Signal set");
    }

    /// Snapshot of the current value.
    pub async fn get(&self) -> bool {
        self.state.read().await.last
    }

    /// Subscribe to the signal.
    ///
    /// The returned stream immediately yields the most recently set value,
    /// then every subsequent `set` in order.
    pub async fn subscribe(&self) -> SignalStream {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut state = self.state.write().await;
        // Replay under the same lock that serializes `set`, so a joiner
        // racing a publish still sees that update exactly once.
        let _ = tx.send(state.last);
        state.subscribers.push(tx);
        UnboundedReceiverStream::new(rx)
    }

    /// Number of registered subscribers, including ones not yet pruned.
    pub async fn subscriber_count(&self) -> usize {
        self.state.read().await.subscribers.len()
    }
}

impl Default for SharedSignal {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tokio_stream::StreamExt;

    use super::*;

    #[tokio::test]
    async fn replay_latest_on_subscribe() {
        let signal = SharedSignal::new(false);
        signal.set(true).await;

        let mut stream = signal.subscribe().await;
        assert_eq!(stream.next().await, Some(true));
    }

    #[tokio::test]
    async fn new_subscriber_sees_only_the_latest_value() {
        let signal = SharedSignal::new(false);
        signal.set(true).await;
        signal.set(false).await;

        let mut stream = signal.subscribe().await;
        assert_eq!(stream.next().await, Some(false));

        // Nothing else is buffered; the next item only arrives on a set.
        signal.set(true).await;
        assert_eq!(stream.next().await, Some(true));
    }

    #[tokio::test]
    async fn subscribers_observe_sets_in_order() {
        let signal = SharedSignal::new(false);
        let mut a = signal.subscribe().await;
        let mut b = signal.subscribe().await;

        for value in [true, false, true] {
            signal.set(value).await;
        }

        let expected = [false, true, false, true]; // replay + three sets
        for want in expected {
            assert_eq!(a.next().await, Some(want));
            assert_eq!(b.next().await, Some(want));
        }
    }

    #[tokio::test]
    async fn get_reflects_last_set() {
        let signal = SharedSignal::default();
        assert!(!signal.get().await);

        signal.set(true).await;
        assert!(signal.get().await);
    }

    #[tokio::test]
    async fn dropped_subscribers_are_pruned_on_set() {
        let signal = SharedSignal::new(false);
        let stream = signal.subscribe().await;
        assert_eq!(signal.subscriber_count().await, 1);

        drop(stream);
        signal.set(true).await;
        assert_eq!(signal.subscriber_count().await, 0);
    }

    #[tokio::test]
    async fn joiner_during_set_sees_update_exactly_once() {
        let signal = Arc::new(SharedSignal::new(false));

        let setter = {
            let signal = Arc::clone(&signal);
            tokio::spawn(async move { signal.set(true).await })
        };
        let mut stream = signal.subscribe().await;
        setter.await.unwrap();

        // Either the old value was replayed and the update follows, or the
        // update itself was the replay. Both or neither would be a bug.
        match stream.next().await {
            Some(false) => assert_eq!(stream.next().await, Some(true)),
            Some(true) => {}
            other => panic!("expected a value, got {other:?}"),
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn subscribe_racing_set_sees_the_update_exactly_once() {
        for _ in 0..200 {
            let signal = Arc::new(SharedSignal::new(false));

            let setter = {
                let signal = Arc::clone(&signal);
                tokio::spawn(async move { signal.set(true).await })
            };
            let mut stream = signal.subscribe().await;
            setter.await.unwrap();
            drop(signal);

            let mut seen = Vec::new();
            while let Some(value) = stream.next().await {
                seen.push(value);
            }
            assert!(seen == [false, true] || seen == [true], "joiner saw {seen:?}");
        }
    }

    #[tokio::test]
    async fn stream_ends_when_signal_is_dropped() {
        let signal = SharedSignal::new(true);
        let mut stream = signal.subscribe().await;
        assert_eq!(stream.next().await, Some(true));

        drop(signal);
        assert_eq!(stream.next().await, None);
    }
}
