//! # Screens
//!
//! Maps the visible back-stack entry to a screen. Every function here is an
//! exhaustive `match` over `Destination`, so a new destination variant
//! doesn't compile until it has a screen, key handling, and help text.
//!
//! Screen state is kept per back-stack entry (keyed by entry id) in
//! `ScreenStates`. Two `Detail` entries on the stack each keep their own
//! state, and state is dropped as soon as its entry leaves the stack.

mod charts;
mod detail;
mod text_field;
mod toasts;

use std::collections::HashMap;

use log::debug;
use ratatui::Frame;
use ratatui::layout::Rect;
use uuid::Uuid;

use crate::core::action::Action;
use crate::core::destination::Destination;
use crate::core::store::BackStackEntry;
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

/// Presentation state owned by one back-stack entry.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ScreenState {
    /// Toasts raised from this entry.
    pub toasts_shown: u32,
    /// Selected chart series.
    pub series: usize,
    /// Text field contents.
    pub input: String,
}

/// Per-entry screen state, kept in step with the back-stack snapshots.
#[derive(Debug, Default)]
pub struct ScreenStates {
    states: HashMap<Uuid, ScreenState>,
}

impl ScreenStates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop state for entries no longer on the stack.
    pub fn sync(&mut self, entries: &[BackStackEntry]) {
        let before = self.states.len();
        self.states
            .retain(|id, _| entries.iter().any(|entry| entry.id == *id));
        let dropped = before - self.states.len();
        if dropped > 0 {
            debug!("Dropped screen state for {} popped entries", dropped);
        }
    }

    pub fn get(&self, entry: &BackStackEntry) -> Option<&ScreenState> {
        self.states.get(&entry.id)
    }

    pub fn get_mut(&mut self, entry: &BackStackEntry) -> &mut ScreenState {
        self.states.entry(entry.id).or_default()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// What a screen asks the adapter to do.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenEvent {
    Navigate(Action),
    Toast(String),
}

/// Render the screen for `entry`.
pub fn render(frame: &mut Frame, area: Rect, entry: &BackStackEntry, state: &ScreenState, depth: usize) {
    match &entry.destination {
        Destination::Toasts => toasts::ToastsScreen::new(state.toasts_shown).render(frame, area),
        Destination::Charts => charts::ChartsScreen::new(state.series).render(frame, area),
        Destination::TextFields => text_field::TextFieldScreen::new(&state.input).render(frame, area),
        Destination::Detail { id } => detail::DetailScreen::new(*id, depth).render(frame, area),
    }
}

/// Route a key event to the screen for `entry`.
pub fn handle_event(
    entry: &BackStackEntry,
    state: &mut ScreenState,
    event: &TuiEvent,
) -> Option<ScreenEvent> {
    match &entry.destination {
        Destination::Toasts => toasts::handle_event(state, event),
        Destination::Charts => charts::handle_event(state, event),
        Destination::TextFields => text_field::handle_event(state, event),
        Destination::Detail { id } => detail::handle_event(*id, event),
    }
}

/// Key hints for the help line.
pub fn help_text(destination: &Destination) -> &'static str {
    match destination {
        Destination::Toasts => " t Toast  Esc Back  Home Catalogue ",
        Destination::Charts => " ←→ Series  d Detail  Esc Back  Home Catalogue ",
        Destination::TextFields => " Enter Submit  Esc Back  Home Catalogue ",
        Destination::Detail { .. } => {
            " n Next  s Next (single-top)  c Up to Charts  Esc Back  Home Catalogue "
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_drops_popped_entries() {
        let kept = BackStackEntry::new(Destination::Toasts);
        let popped = BackStackEntry::new(Destination::TextFields);
        let mut states = ScreenStates::new();
        states.get_mut(&kept).toasts_shown = 2;
        states.get_mut(&popped).input = "draft".to_string();

        states.sync(std::slice::from_ref(&kept));

        assert_eq!(states.len(), 1);
        assert_eq!(states.get(&kept).unwrap().toasts_shown, 2);
        assert!(states.get(&popped).is_none());
    }

    #[test]
    fn test_state_follows_entry_not_kind() {
        let first = BackStackEntry::new(Destination::TextFields);
        let second = BackStackEntry::new(Destination::TextFields);
        let mut states = ScreenStates::new();
        states.get_mut(&first).input = "one".to_string();

        assert_eq!(states.get_mut(&second).input, "");
        assert_eq!(states.get(&first).unwrap().input, "one");
    }

    #[test]
    fn test_single_top_update_keeps_state() {
        let mut entry = BackStackEntry::new(Destination::Detail { id: 1 });
        let mut states = ScreenStates::new();
        states.get_mut(&entry).toasts_shown = 1;

        entry.destination = Destination::Detail { id: 2 };
        states.sync(std::slice::from_ref(&entry));

        assert_eq!(states.get(&entry).unwrap().toasts_shown, 1);
    }

    #[test]
    fn test_every_destination_has_help() {
        for kind in crate::core::destination::Kind::ALL {
            assert!(help_text(&kind.default_destination()).contains("Esc Back"));
        }
    }
}
