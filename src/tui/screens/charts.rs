//! Charts sample: a bar chart over a few fixed series.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{BarChart, Block, Borders};

use super::{ScreenEvent, ScreenState};
use crate::core::action::Action;
use crate::core::destination::Destination;
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

/// Sample series: a name and (label, value) bars.
pub static SERIES: [(&str, [(&str, u64); 6]); 3] = [
    (
        "Weekly visits",
        [("Mon", 12), ("Tue", 18), ("Wed", 9), ("Thu", 22), ("Fri", 15), ("Sat", 6)],
    ),
    (
        "Build minutes",
        [("Mon", 40), ("Tue", 35), ("Wed", 52), ("Thu", 31), ("Fri", 44), ("Sat", 8)],
    ),
    (
        "Open issues",
        [("Mon", 7), ("Tue", 9), ("Wed", 11), ("Thu", 8), ("Fri", 5), ("Sat", 5)],
    ),
];

pub struct ChartsScreen {
    series: usize,
}

impl ChartsScreen {
    pub fn new(series: usize) -> Self {
        Self {
            series: series % SERIES.len(),
        }
    }
}

impl Component for ChartsScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (name, bars) = &SERIES[self.series];
        let title = format!(" {} ({}/{}) ", name, self.series + 1, SERIES.len());
        let chart = BarChart::default()
            .block(Block::default().borders(Borders::ALL).title(title))
            .data(&bars[..])
            .bar_width(5)
            .bar_gap(2)
            .bar_style(Style::default().fg(Color::Green))
            .value_style(Style::default().fg(Color::Black).bg(Color::Green));
        frame.render_widget(chart, area);
    }
}

pub fn handle_event(state: &mut ScreenState, event: &TuiEvent) -> Option<ScreenEvent> {
    match event {
        TuiEvent::CursorRight => {
            state.series = (state.series + 1) % SERIES.len();
            None
        }
        TuiEvent::CursorLeft => {
            state.series = (state.series + SERIES.len() - 1) % SERIES.len();
            None
        }
        // Detail ids are 1-based series numbers
        TuiEvent::InputChar('d') => Some(ScreenEvent::Navigate(Action::Open(
            Destination::Detail {
                id: state.series as u32 + 1,
            },
        ))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_series_cycles_both_ways() {
        let mut state = ScreenState::default();
        handle_event(&mut state, &TuiEvent::CursorLeft);
        assert_eq!(state.series, SERIES.len() - 1);
        handle_event(&mut state, &TuiEvent::CursorRight);
        assert_eq!(state.series, 0);
    }

    #[test]
    fn test_d_opens_detail_for_series() {
        let mut state = ScreenState {
            series: 1,
            ..Default::default()
        };
        assert_eq!(
            handle_event(&mut state, &TuiEvent::InputChar('d')),
            Some(ScreenEvent::Navigate(Action::Open(Destination::Detail { id: 2 })))
        );
    }

    #[test]
    fn test_renders_series_title() {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| ChartsScreen::new(2).render(f, f.area()))
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Open issues (3/3)"));
    }
}
