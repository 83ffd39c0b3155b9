//! # Catalogue Component
//!
//! The root screen. Lists every sample kind; Enter opens the selected one.
//! The catalogue is never a back-stack entry: it is what shows when the
//! stack is empty.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CatalogueState` lives in `TuiState`
//! - `Catalogue` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding};

use crate::core::destination::Kind;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::truncate_str;
use crate::tui::event::TuiEvent;

/// Persistent state for the catalogue list.
pub struct CatalogueState {
    pub kinds: Vec<Kind>,
    pub selected: usize,
    pub list_state: ListState,
}

impl Default for CatalogueState {
    fn default() -> Self {
        Self::new(Kind::ALL.to_vec())
    }
}

impl CatalogueState {
    pub fn new(kinds: Vec<Kind>) -> Self {
        let mut list_state = ListState::default();
        if !kinds.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            kinds,
            selected: 0,
            list_state,
        }
    }
}

/// Events emitted by the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogueEvent {
    Open(Kind),
    Quit,
}

impl EventHandler for CatalogueState {
    type Event = CatalogueEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<CatalogueEvent> {
        match event {
            TuiEvent::CursorUp => {
                if !self.kinds.is_empty() {
                    self.selected = self.selected.saturating_sub(1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::CursorDown => {
                if !self.kinds.is_empty() {
                    self.selected = (self.selected + 1).min(self.kinds.len() - 1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::Submit => self.kinds.get(self.selected).copied().map(CatalogueEvent::Open),
            TuiEvent::InputChar('q') => Some(CatalogueEvent::Quit),
            _ => None,
        }
    }
}

/// Transient render wrapper for the catalogue.
pub struct Catalogue<'a> {
    state: &'a mut CatalogueState,
}

impl<'a> Catalogue<'a> {
    pub fn new(state: &'a mut CatalogueState) -> Self {
        Self { state }
    }
}

impl Component for Catalogue<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Catalogue ")
            .title_alignment(Alignment::Left)
            .padding(Padding::horizontal(1));

        let inner_width = area.width.saturating_sub(4) as usize; // borders + padding
        let label_width = Kind::ALL
            .iter()
            .map(|k| k.label().len())
            .max()
            .unwrap_or(0);

        let items: Vec<ListItem> = self
            .state
            .kinds
            .iter()
            .enumerate()
            .map(|(i, kind)| {
                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let label = format!("{:<width$}", kind.label(), width = label_width);
                let desc_width = inner_width.saturating_sub(label_width + 2);
                let desc = truncate_str(kind.description(), desc_width);

                ListItem::new(Line::from(vec![
                    Span::styled(label, style),
                    Span::styled("  ", style),
                    Span::styled(
                        desc,
                        if i == self.state.selected {
                            style
                        } else {
                            Style::default().fg(Color::DarkGray)
                        },
                    ),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
