//! # Stack Store
//!
//! Holds the back-stack and tells subscribers when it changes.
//!
//! ```text
//! StackStore
//! ├── entries: Vec<BackStackEntry>      // index 0 = oldest, last = visible
//! ├── subscribers: Vec<(id, callback)>  // notified in registration order
//! └── next_subscription: u64
//! ```
//!
//! The store is mutated only by `replace()`, which swaps the whole sequence
//! and then runs every subscriber with the new entries. Subscribers never see
//! a half-built stack. The type is deliberately not `Clone`: one navigation
//! scope owns exactly one store.

use log::{debug, trace};
use uuid::Uuid;

use crate::core::destination::Destination;

/// One slot in the back-stack.
///
/// `id` is assigned on push and survives a single-top update, so screen
/// state keyed by it follows the entry rather than the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackStackEntry {
    pub id: Uuid,
    pub destination: Destination,
}

impl BackStackEntry {
    pub fn new(destination: Destination) -> Self {
        Self {
            id: Uuid::new_v4(),
            destination,
        }
    }
}

/// Handle returned by `subscribe()`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&[BackStackEntry])>;

#[derive(Default)]
pub struct StackStore {
    entries: Vec<BackStackEntry>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl StackStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Owned copy of the current entries.
    pub fn snapshot(&self) -> Vec<BackStackEntry> {
        self.entries.clone()
    }

    pub fn entries(&self) -> &[BackStackEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The visible entry, or `None` at root.
    pub fn top(&self) -> Option<&BackStackEntry> {
        self.entries.last()
    }

    /// Swap in a new stack and notify every subscriber synchronously.
    pub fn replace(&mut self, entries: Vec<BackStackEntry>) {
        self.entries = entries;
        debug!(
            "Back-stack replaced (depth={}, subscribers={})",
            self.entries.len(),
            self.subscribers.len()
        );
        for (id, subscriber) in self.subscribers.iter_mut() {
            trace!("Notifying subscriber {:?}", id);
            subscriber(&self.entries);
        }
    }

    /// Register a listener called once per `replace()`.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&[BackStackEntry]) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        debug!("Subscriber {:?} registered", id);
        id
    }

    /// Remove a listener. Returns false if the handle was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        before != self.subscribers.len()
    }
}
