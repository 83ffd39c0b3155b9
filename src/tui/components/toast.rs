//! # Toast Component
//!
//! A short message drawn over the bottom-right corner of the screen area
//! until it expires. Raised by the Toasts sample and by navigations that
//! had no effect (e.g. popping up to a kind that is not on the stack).

use std::time::{Duration, Instant};

use log::warn;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

/// Fallback lifetime when the requested one can't be represented.
const MAX_DURATION: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, now: Instant, duration: Duration) -> Self {
        let expires_at = now.checked_add(duration).unwrap_or_else(|| {
            warn!("Toast duration {:?} overflows the clock, using {:?}", duration, MAX_DURATION);
            now + MAX_DURATION
        });
        Self {
            message: message.into(),
            expires_at,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

impl Component for Toast {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let rect = toast_rect(&self.message, area);
        frame.render_widget(Clear, rect);
        let paragraph = Paragraph::new(self.message.as_str())
            .style(Style::default().fg(Color::White))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );
        frame.render_widget(paragraph, rect);
    }
}

/// Bottom-right box sized to the message, clamped to `area`.
fn toast_rect(message: &str, area: Rect) -> Rect {
    let width = u16::try_from(message.width())
        .unwrap_or(u16::MAX)
        .saturating_add(4)
        .min(area.width);
    let height = 3.min(area.height);
    Rect {
        x: area.x + area.width.saturating_sub(width.saturating_add(1)),
        y: area.y + area.height.saturating_sub(height + 1),
        width,
        height,
    }
}
