//! # Navigation Controller
//!
//! Push/pop over the `StackStore`, with pop-up-to and single-top options.
//! Every operation reads a snapshot, transforms it, and commits it with one
//! `replace()`, so subscribers see each navigation as a single step.
//!
//! ```text
//! [A, B, C]  navigate(D, pop_up_to(A, inclusive=false))  →  [A, D]
//! [A, B, C]  navigate(D, pop_up_to(A, inclusive=true))   →  [D]
//! [A, B]     navigate(B', single_top)                    →  [A, B']
//! [A, B, A]  pop_up_to(A, inclusive=true)                →  [A, B]
//! ```
//!
//! Nothing here can fail. Popping at root or popping up to a kind that is
//! not on the stack leaves the stack alone and returns `false`.

use log::{debug, info};

use crate::core::destination::{Destination, Kind};
use crate::core::store::{BackStackEntry, StackStore, SubscriptionId};

/// Target of a pop-up-to: the nearest entry of `kind`, optionally removed too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopUpTo {
    pub kind: Kind,
    pub inclusive: bool,
}

/// Options for `navigate()`. The default is a plain push.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavOptions {
    pub launch_single_top: bool,
    pub pop_up_to: Option<PopUpTo>,
}

impl NavOptions {
    pub fn single_top(mut self) -> Self {
        self.launch_single_top = true;
        self
    }

    pub fn pop_up_to(mut self, kind: Kind, inclusive: bool) -> Self {
        self.pop_up_to = Some(PopUpTo { kind, inclusive });
        self
    }
}

pub struct NavController {
    store: StackStore,
}

impl Default for NavController {
    fn default() -> Self {
        Self::new()
    }
}

impl NavController {
    pub fn new() -> Self {
        Self {
            store: StackStore::new(),
        }
    }

    pub fn store(&self) -> &StackStore {
        &self.store
    }

    pub fn back_stack(&self) -> &[BackStackEntry] {
        self.store.entries()
    }

    pub fn depth(&self) -> usize {
        self.store.len()
    }

    /// The visible entry, or `None` when the root screen is showing.
    pub fn current(&self) -> Option<&BackStackEntry> {
        self.store.top()
    }

    /// The entry that becomes visible after a `pop_back_stack()`.
    pub fn previous(&self) -> Option<&BackStackEntry> {
        let entries = self.store.entries();
        entries.len().checked_sub(2).map(|i| &entries[i])
    }

    pub fn contains(&self, kind: Kind) -> bool {
        self.store.entries().iter().any(|e| e.destination.kind() == kind)
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&[BackStackEntry]) + 'static,
    {
        self.store.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    pub fn navigate(&mut self, destination: Destination, options: NavOptions) {
        let mut entries = self.store.snapshot();

        if let Some(target) = options.pop_up_to
            && truncate_to_nearest(&mut entries, target).is_none()
        {
            debug!("pop_up_to {} found no entry, stack kept", target.kind);
        }

        if options.launch_single_top
            && let Some(top) = entries.last_mut()
            && top.destination.kind() == destination.kind()
        {
            info!("Navigate single-top: {} → {}", top.destination, destination);
            top.destination = destination;
        } else {
            info!("Navigate: push {} (depth {})", destination, entries.len() + 1);
            entries.push(BackStackEntry::new(destination));
        }

        self.store.replace(entries);
    }

    /// Remove the visible entry. Returns false at root.
    pub fn pop_back_stack(&mut self) -> bool {
        let mut entries = self.store.snapshot();
        match entries.pop() {
            Some(popped) => {
                info!("Pop back stack: {}", popped.destination);
                self.store.replace(entries);
                true
            }
            None => {
                debug!("Pop back stack at root, nothing to pop");
                false
            }
        }
    }

    /// Truncate to the nearest entry of `kind`. Returns whether anything was removed.
    pub fn pop_up_to(&mut self, kind: Kind, inclusive: bool) -> bool {
        let mut entries = self.store.snapshot();
        match truncate_to_nearest(&mut entries, PopUpTo { kind, inclusive }) {
            Some(removed) => {
                info!("Pop up to {kind} (inclusive={inclusive}): removed {removed}");
                self.store.replace(entries);
                removed > 0
            }
            None => {
                debug!("Pop up to {kind}: not on the stack");
                false
            }
        }
    }

    /// Clear the stack back to the root screen.
    pub fn pop_up_to_root(&mut self) -> bool {
        let removed = self.store.len();
        info!("Pop up to root: removed {removed}");
        self.store.replace(Vec::new());
        removed > 0
    }
}

/// Scan from the top for the nearest entry of `target.kind` and cut the
/// stack above it (or at it, when inclusive). Returns the number of entries
/// removed, or `None` when no entry matched.
fn truncate_to_nearest(entries: &mut Vec<BackStackEntry>, target: PopUpTo) -> Option<usize> {
    let index = entries
        .iter()
        .rposition(|e| e.destination.kind() == target.kind)?;
    let keep = if target.inclusive { index } else { index + 1 };
    let removed = entries.len() - keep;
    entries.truncate(keep);
    Some(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{controller_with, kinds};

    #[test]
    fn test_push_appends() {
        let mut nav = NavController::new();
        nav.navigate(Destination::Toasts, NavOptions::default());
        nav.navigate(Destination::Charts, NavOptions::default());
        assert_eq!(kinds(&nav), vec![Kind::Toasts, Kind::Charts]);
    }

    #[test]
    fn test_push_allows_duplicate_kinds() {
        let mut nav = controller_with(&[Destination::Detail { id: 1 }]);
        nav.navigate(Destination::Detail { id: 2 }, NavOptions::default());
        assert_eq!(nav.depth(), 2);
    }

    #[test]
    fn test_single_top_replaces_in_place_and_keeps_id() {
        let mut nav = controller_with(&[Destination::Toasts, Destination::Detail { id: 1 }]);
        let top_id = nav.current().unwrap().id;

        nav.navigate(Destination::Detail { id: 2 }, NavOptions::default().single_top());

        assert_eq!(nav.depth(), 2);
        let top = nav.current().unwrap();
        assert_eq!(top.destination, Destination::Detail { id: 2 });
        assert_eq!(top.id, top_id);
    }

    #[test]
    fn test_single_top_pushes_when_kinds_differ() {
        let mut nav = controller_with(&[Destination::Toasts]);
        nav.navigate(Destination::Charts, NavOptions::default().single_top());
        assert_eq!(kinds(&nav), vec![Kind::Toasts, Kind::Charts]);
    }

    #[test]
    fn test_single_top_on_empty_stack_pushes() {
        let mut nav = NavController::new();
        nav.navigate(Destination::Charts, NavOptions::default().single_top());
        assert_eq!(kinds(&nav), vec![Kind::Charts]);
    }

    #[test]
    fn test_single_top_only_checks_top() {
        let mut nav = controller_with(&[Destination::Detail { id: 1 }, Destination::Toasts]);
        nav.navigate(Destination::Detail { id: 2 }, NavOptions::default().single_top());
        assert_eq!(kinds(&nav), vec![Kind::Detail, Kind::Toasts, Kind::Detail]);
    }

    #[test]
    fn test_navigate_pop_up_to_then_single_top() {
        // Truncation happens first, so the kept target becomes the new top.
        let mut nav = controller_with(&[
            Destination::Charts,
            Destination::Toasts,
            Destination::TextFields,
        ]);
        nav.navigate(
            Destination::Toasts,
            NavOptions::default().pop_up_to(Kind::Toasts, false).single_top(),
        );
        assert_eq!(kinds(&nav), vec![Kind::Charts, Kind::Toasts]);
    }

    #[test]
    fn test_navigate_pop_up_to_missing_kind_still_pushes() {
        let mut nav = controller_with(&[Destination::Toasts, Destination::Charts]);
        nav.navigate(
            Destination::Detail { id: 9 },
            NavOptions::default().pop_up_to(Kind::TextFields, true),
        );
        assert_eq!(kinds(&nav), vec![Kind::Toasts, Kind::Charts, Kind::Detail]);
    }

    #[test]
    fn test_pop_up_to_matches_nearest() {
        let mut nav = controller_with(&[
            Destination::Detail { id: 1 },
            Destination::Toasts,
            Destination::Detail { id: 2 },
            Destination::Charts,
        ]);
        assert!(nav.pop_up_to(Kind::Detail, false));
        assert_eq!(
            nav.current().unwrap().destination,
            Destination::Detail { id: 2 }
        );
        assert_eq!(nav.depth(), 3);
    }

    #[test]
    fn test_pop_up_to_non_inclusive_at_top_removes_nothing() {
        let mut nav = controller_with(&[Destination::Toasts, Destination::Charts]);
        assert!(!nav.pop_up_to(Kind::Charts, false));
        assert_eq!(nav.depth(), 2);
    }

    #[test]
    fn test_pop_up_to_absent_is_noop_without_notify() {
        let mut nav = controller_with(&[Destination::Toasts]);
        let notified = std::rc::Rc::new(std::cell::Cell::new(false));
        let flag = notified.clone();
        nav.subscribe(move |_| flag.set(true));

        assert!(!nav.pop_up_to(Kind::Charts, true));
        assert!(!notified.get());
        assert_eq!(kinds(&nav), vec![Kind::Toasts]);
    }

    #[test]
    fn test_pop_back_stack_at_root_does_not_notify() {
        let mut nav = NavController::new();
        let notified = std::rc::Rc::new(std::cell::Cell::new(false));
        let flag = notified.clone();
        nav.subscribe(move |_| flag.set(true));

        assert!(!nav.pop_back_stack());
        assert!(!notified.get());
    }

    #[test]
    fn test_pop_up_to_root_reports_change() {
        let mut nav = controller_with(&[Destination::Toasts]);
        assert!(nav.pop_up_to_root());
        assert!(!nav.pop_up_to_root());
        assert!(nav.current().is_none());
    }

    #[test]
    fn test_previous_and_contains() {
        let nav = controller_with(&[Destination::Toasts, Destination::Charts]);
        assert_eq!(nav.previous().unwrap().destination, Destination::Toasts);
        assert!(nav.contains(Kind::Charts));
        assert!(!nav.contains(Kind::Detail));
        assert!(NavController::new().previous().is_none());
    }

    #[test]
    fn test_truncate_to_nearest_counts_removed() {
        let mut entries: Vec<BackStackEntry> = [Kind::Toasts, Kind::Charts, Kind::TextFields]
            .into_iter()
            .map(|k| BackStackEntry::new(k.default_destination()))
            .collect();
        let removed = truncate_to_nearest(
            &mut entries,
            PopUpTo {
                kind: Kind::Charts,
                inclusive: true,
            },
        );
        assert_eq!(removed, Some(2));
        assert_eq!(entries.len(), 1);
    }
}
