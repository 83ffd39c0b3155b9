use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Catalogue, StackPanel, TitleBar};
use crate::tui::screens;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

/// Width of the back-stack side panel.
pub const STACK_PANEL_WIDTH: u16 = 32;

const ROOT_HELP: &str = " ↑↓ Select  Enter Open  q Quit ";

/// Split the frame into title, screen, optional stack panel, and help line.
pub fn layout(area: Rect, show_stack_panel: bool) -> (Rect, Rect, Option<Rect>, Rect) {
    use Constraint::{Length, Min};
    let [title_area, main_area, help_area] = Layout::vertical([Length(1), Min(0), Length(1)]).areas(area);

    if show_stack_panel {
        let [screen_area, panel_area] =
            Layout::horizontal([Min(0), Length(STACK_PANEL_WIDTH)]).areas(main_area);
        (title_area, screen_area, Some(panel_area), help_area)
    } else {
        (title_area, main_area, None, help_area)
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let (title_area, screen_area, panel_area, help_area) =
        layout(frame.area(), tui.show_stack_panel);

    let depth = tui.back_stack.len();
    let screen_title = tui
        .back_stack
        .last()
        .map(|entry| entry.destination.title())
        .unwrap_or_else(|| "Catalogue".to_string());
    TitleBar::new(screen_title, depth, app.status_message.clone()).render(frame, title_area);

    // Top of the stack decides the screen; empty stack shows the root.
    let help = match tui.back_stack.last() {
        Some(entry) => {
            let state = tui.screens.get_mut(entry);
            screens::render(frame, screen_area, entry, state, depth);
            screens::help_text(&entry.destination)
        }
        None => {
            Catalogue::new(&mut tui.catalogue).render(frame, screen_area);
            ROOT_HELP
        }
    };

    if let Some(panel_area) = panel_area {
        StackPanel::new(&tui.back_stack).render(frame, panel_area);
    }

    frame.render_widget(
        Line::styled(help, Style::default().fg(Color::DarkGray)),
        help_area,
    );

    if let Some(toast) = tui.toast.as_mut() {
        toast.render(frame, screen_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::destination::Destination;
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(100, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_root_shows_catalogue() {
        let mut app = test_app();
        let mut tui = TuiState::new(&mut app.nav, true);
        let text = draw(&app, &mut tui);
        assert!(text.contains("Catalogue (depth 0)"));
        assert!(text.contains("Enter Open"));
        assert!(text.contains("Back stack"));
    }

    #[test]
    fn test_top_entry_decides_screen() {
        let mut app = test_app();
        let mut tui = TuiState::new(&mut app.nav, false);
        update(&mut app, Action::Open(Destination::Toasts));
        update(&mut app, Action::Open(Destination::Detail { id: 9 }));
        tui.sync();

        let text = draw(&app, &mut tui);
        assert!(text.contains("Detail #9 (depth 2)"));
        assert!(text.contains("Item 9"));
        assert!(!text.contains("Back stack"));
    }

    #[test]
    fn test_layout_without_panel() {
        let (_, screen, panel, _) = layout(Rect::new(0, 0, 80, 24), false);
        assert!(panel.is_none());
        assert_eq!(screen.width, 80);
        assert_eq!(screen.height, 22);
    }

    #[test]
    fn test_layout_with_panel() {
        let (_, screen, panel, _) = layout(Rect::new(0, 0, 80, 24), true);
        assert_eq!(panel.unwrap().width, STACK_PANEL_WIDTH);
        assert_eq!(screen.width, 80 - STACK_PANEL_WIDTH);
    }
}
