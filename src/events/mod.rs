//! Event bus interface for decoupled communication between app components.
//!
//! The bus itself lives in the host application; this crate only depends on
//! the publish/subscribe surface below. Dispatch is synchronous on the UI
//! thread: `publish` invokes every current listener before returning, and
//! publishing never fails even when no one is listening.

pub mod types;

pub use types::AppEvent;

use std::sync::Arc;

/// A listener object registered with the event bus.
///
/// Listeners receive every published event and filter for the kinds they
/// care about.
pub trait EventListener: Send + Sync {
    /// Called synchronously for each published event.
    fn on_event(&self, event: &AppEvent);
}

/// The host application's publish/subscribe event bus.
pub trait EventBus: Send + Sync {
    /// Publish an event to all current subscribers. Fire-and-forget.
    fn publish(&self, event: AppEvent);

    /// Register a listener, returning the handle needed to remove it again.
    fn subscribe(&self, listener: Arc<dyn EventListener>) -> SubscriptionSet;

    /// Remove every subscription in the set.
    fn unsubscribe(&self, subscriptions: SubscriptionSet);
}

/// Identifier of a single bus subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Opaque handle over the subscriptions created by one `subscribe` call.
///
/// Owned by the subscriber and passed back to [`EventBus::unsubscribe`] for
/// teardown. An empty set is valid and tears down nothing.
#[derive(Debug, Default)]
pub struct SubscriptionSet {
    ids: Vec<SubscriptionId>,
}

impl SubscriptionSet {
    pub fn new(ids: Vec<SubscriptionId>) -> Self {
        Self { ids }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> &[SubscriptionId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
