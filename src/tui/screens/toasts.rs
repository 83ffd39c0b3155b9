//! Toasts sample: `t` raises a toast and counts how many this entry has shown.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::{ScreenEvent, ScreenState};
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

pub struct ToastsScreen {
    shown: u32,
}

impl ToastsScreen {
    pub fn new(shown: u32) -> Self {
        Self { shown }
    }
}

impl Component for ToastsScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from("Press t to raise a toast."),
            Line::from(""),
            Line::styled(
                format!("Toasts shown from this screen: {}", self.shown),
                Style::default().fg(Color::DarkGray),
            ),
        ];
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" Toasts "));
        frame.render_widget(paragraph, area);
    }
}

pub fn handle_event(state: &mut ScreenState, event: &TuiEvent) -> Option<ScreenEvent> {
    match event {
        TuiEvent::InputChar('t') => {
            state.toasts_shown += 1;
            Some(ScreenEvent::Toast(format!("Toast #{}", state.toasts_shown)))
        }
        _ => None,
    }
}
