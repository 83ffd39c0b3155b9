//! # TitleBar Component
//!
//! Top status bar showing where the user is in the back-stack.
//!
//! ## Responsibilities
//!
//! - Display the visible screen's title
//! - Display the back-stack depth (0 = catalogue root)
//! - Display the status message, when there is one
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"Backstack | Detail #2 (depth 3) | Back at the catalogue"`
//! 2. **Default**: `"Backstack | Detail #2 (depth 3)"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Top status bar. Purely presentational: all fields are props.
pub struct TitleBar {
    /// Title of the visible screen
    pub screen_title: String,
    /// Number of entries above the root
    pub depth: usize,
    /// Status message (may be empty)
    pub status_message: String,
}

impl TitleBar {
    pub fn new(screen_title: String, depth: usize, status_message: String) -> Self {
        Self {
            screen_title,
            depth,
            status_message,
        }
    }

    fn text(&self) -> String {
        if self.status_message.is_empty() {
            format!("Backstack | {} (depth {})", self.screen_title, self.depth)
        } else {
            format!(
                "Backstack | {} (depth {}) | {}",
                self.screen_title, self.depth, self.status_message
            )
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.text(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar =
            TitleBar::new("Detail #2".to_string(), 3, "Back at the catalogue".to_string());
        let text = rendered(&mut title_bar);

        assert!(text.contains("Backstack"));
        assert!(text.contains("Detail #2 (depth 3)"));
        assert!(text.contains("Back at the catalogue"));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut title_bar = TitleBar::new("Catalogue".to_string(), 0, String::new());
        let text = rendered(&mut title_bar);

        assert!(text.contains("Catalogue (depth 0)"));
        assert_eq!(text.matches('|').count(), 1);
    }
}
