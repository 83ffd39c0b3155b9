//! # Stack Panel Component
//!
//! Side panel listing the back-stack, newest entry first, ending with the
//! implicit root. Each row shows the entry's depth, title, and the first
//! eight hex digits of its entry id, so single-top updates (same id, new
//! title) are visible at a glance.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem};

use crate::core::store::BackStackEntry;
use crate::tui::component::Component;
use crate::tui::components::truncate_str;

pub struct StackPanel<'a> {
    pub entries: &'a [BackStackEntry],
}

impl<'a> StackPanel<'a> {
    pub fn new(entries: &'a [BackStackEntry]) -> Self {
        Self { entries }
    }
}

/// Short form of an entry id for display.
pub fn short_id(entry: &BackStackEntry) -> String {
    entry.id.simple().to_string()[..8].to_string()
}

impl Component for StackPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(2) as usize;
        let top_index = self.entries.len().checked_sub(1);

        let mut items: Vec<ListItem> = self
            .entries
            .iter()
            .enumerate()
            .rev()
            .map(|(i, entry)| {
                let style = if Some(i) == top_index {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let depth = format!("{:>2} ", i + 1);
                let id = format!(" {}", short_id(entry));
                let title_width = inner_width.saturating_sub(depth.len() + id.len());
                let title = format!(
                    "{:<width$}",
                    truncate_str(&entry.destination.title(), title_width),
                    width = title_width
                );
                ListItem::new(Line::from(vec![
                    Span::styled(depth, Style::default().fg(Color::DarkGray)),
                    Span::styled(title, style),
                    Span::styled(id, Style::default().fg(Color::DarkGray)),
                ]))
            })
            .collect();

        let root_style = if self.entries.is_empty() {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        items.push(ListItem::new(Line::from(vec![
            Span::styled(" · ", Style::default().fg(Color::DarkGray)),
            Span::styled("Catalogue (root)", root_style),
        ])));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Back stack ");
        frame.render_widget(List::new(items).block(block), area);
    }
}
