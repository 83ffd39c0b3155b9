//! Text field sample. Enter submits the field and replaces the form with
//! the matching detail screen: back from the detail skips the form.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::{ScreenEvent, ScreenState};
use crate::core::action::Action;
use crate::core::controller::NavOptions;
use crate::core::destination::{Destination, Kind};
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

pub struct TextFieldScreen<'a> {
    input: &'a str,
}

impl<'a> TextFieldScreen<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }
}

impl Component for TextFieldScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [prompt_area, field_area, _] =
            Layout::vertical([Constraint::Length(2), Constraint::Length(3), Constraint::Min(0)])
                .areas(area);

        frame.render_widget(
            Paragraph::new("Type a detail id (or any text) and press Enter.")
                .style(Style::default().fg(Color::DarkGray)),
            prompt_area,
        );
        frame.render_widget(
            Paragraph::new(self.input).block(Block::default().borders(Borders::ALL).title(" Detail id ")),
            field_area,
        );
    }
}

/// Detail id for submitted text: the number typed, else the text length.
fn detail_id(input: &str) -> u32 {
    let trimmed = input.trim();
    trimmed
        .parse::<u32>()
        .unwrap_or(trimmed.chars().count() as u32)
}

pub fn handle_event(state: &mut ScreenState, event: &TuiEvent) -> Option<ScreenEvent> {
    match event {
        TuiEvent::InputChar(c) => {
            state.input.push(*c);
            None
        }
        TuiEvent::Paste(text) => {
            state.input.extend(text.chars().filter(|c| !c.is_control()));
            None
        }
        TuiEvent::Backspace => {
            state.input.pop();
            None
        }
        TuiEvent::Submit => {
            if state.input.trim().is_empty() {
                return Some(ScreenEvent::Toast("Type something first".to_string()));
            }
            Some(ScreenEvent::Navigate(Action::Navigate {
                destination: Destination::Detail {
                    id: detail_id(&state.input),
                },
                options: NavOptions::default().pop_up_to(Kind::TextFields, true),
            }))
        }
        _ => None,
    }
}
