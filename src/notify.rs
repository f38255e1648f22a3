//! Change notifications - "something changed, re-read" signals.
//!
//! After every successful mutation the store broadcasts a [`ChangeEvent`] on
//! the [`STORE_CHANGED`] event. Events name what kind of mutation happened
//! and in which collection; they never carry the data itself.
//!
//! **Requires the `emitter` feature for [`ChangeNotifier`].**

use serde::{Deserialize, Serialize};

/// Event name every store change is emitted under.
pub const STORE_CHANGED: &str = "store_changed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChangeKind {
    CollectionCreated,
    CollectionDropped,
    Inserted,
    Updated,
    Deleted,
    Cleared,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub kind: ChangeKind,
    /// `None` for namespace-wide changes such as [`ChangeKind::Cleared`].
    pub collection: Option<String>,
}

impl ChangeEvent {
    pub fn new(kind: ChangeKind, collection: &str) -> Self {
        Self {
            kind,
            collection: Some(collection.to_string()),
        }
    }

    pub fn cleared() -> Self {
        Self {
            kind: ChangeKind::Cleared,
            collection: None,
        }
    }
}

#[cfg(feature = "emitter")]
pub use emitter::ChangeNotifier;

#[cfg(feature = "emitter")]
mod emitter {
    use std::sync::{Arc, Mutex};

    use event_emitter_rs::EventEmitter;
    use tracing::error;

    use super::{ChangeEvent, STORE_CHANGED};

    /// Broadcasts [`ChangeEvent`]s to registered listeners.
    ///
    /// Clone-friendly via Arc: hand one notifier to several stores sharing a
    /// backend and every view hears about every store's writes. Listeners are
    /// invoked on emitter threads, not on the writer's thread.
    #[derive(Clone)]
    pub struct ChangeNotifier {
        emitter: Arc<Mutex<EventEmitter>>,
    }

    impl Default for ChangeNotifier {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ChangeNotifier {
        pub fn new() -> Self {
            Self {
                emitter: Arc::new(Mutex::new(EventEmitter::new())),
            }
        }

        /// Register a listener. Returns an id usable with [`remove_listener`](Self::remove_listener).
        pub fn on_change<F>(&self, listener: F) -> Option<String>
        where
            F: Fn(ChangeEvent) + Send + Sync + 'static,
        {
            match self.emitter.lock() {
                Ok(mut emitter) => Some(emitter.on(STORE_CHANGED, listener)),
                Err(_) => {
                    error!("change notifier lock poisoned, listener not registered");
                    None
                }
            }
        }

        /// Unregister a listener. Returns false if the id was unknown.
        pub fn remove_listener(&self, listener_id: &str) -> bool {
            match self.emitter.lock() {
                Ok(mut emitter) => emitter.remove_listener(listener_id).is_some(),
                Err(_) => {
                    error!("change notifier lock poisoned, listener not removed");
                    false
                }
            }
        }

        pub fn notify(&self, event: ChangeEvent) {
            match self.emitter.lock() {
                Ok(mut emitter) => {
                    emitter.emit(STORE_CHANGED, event);
                }
                Err(_) => error!(?event, "change notifier lock poisoned, event dropped"),
            }
        }
    }

}
