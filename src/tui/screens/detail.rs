//! Detail sample: a parameterized screen for exercising the stack options.
//!
//! - `n` pushes the next detail (the stack grows with same-kind entries)
//! - `s` opens the next detail single-top (replaces this entry in place)
//! - `c` pops up to the nearest Charts screen

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::ScreenEvent;
use crate::core::action::Action;
use crate::core::controller::NavOptions;
use crate::core::destination::{Destination, Kind};
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

pub struct DetailScreen {
    id: u32,
    depth: usize,
}

impl DetailScreen {
    pub fn new(id: u32, depth: usize) -> Self {
        Self { id, depth }
    }
}

impl Component for DetailScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::styled(
                format!("Item {}", self.id),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
            Line::from(format!("{} screen(s) above the catalogue", self.depth)),
        ];
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" Detail #{} ", self.id)),
            );
        frame.render_widget(paragraph, area);
    }
}

pub fn handle_event(id: u32, event: &TuiEvent) -> Option<ScreenEvent> {
    let next = Destination::Detail {
        id: id.saturating_add(1),
    };
    match event {
        TuiEvent::InputChar('n') => Some(ScreenEvent::Navigate(Action::Navigate {
            destination: next,
            options: NavOptions::default(),
        })),
        TuiEvent::InputChar('s') => Some(ScreenEvent::Navigate(Action::Navigate {
            destination: next,
            options: NavOptions::default().single_top(),
        })),
        TuiEvent::InputChar('c') => Some(ScreenEvent::Navigate(Action::PopUpTo {
            kind: Kind::Charts,
            inclusive: false,
        })),
        _ => None,
    }
}
