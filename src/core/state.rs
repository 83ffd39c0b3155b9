//! # Application State
//!
//! Core state for Backstack. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── nav: NavController            // the scope's back-stack
//! ├── status_message: String        // status bar text
//! └── launch_single_top: bool       // default for Action::Open
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::controller::NavController;

pub struct App {
    pub nav: NavController,
    pub status_message: String,
    pub launch_single_top: bool,
}

impl App {
    pub fn new(launch_single_top: bool) -> Self {
        Self {
            nav: NavController::new(),
            status_message: String::from("Welcome to Backstack!"),
            launch_single_top,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.launch_single_top)
    }

    /// Title of the visible screen.
    pub fn current_title(&self) -> String {
        self.nav
            .current()
            .map(|entry| entry.destination.title())
            .unwrap_or_else(|| "Catalogue".to_string())
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Welcome to Backstack!");
        assert_eq!(app.nav.depth(), 0);
        assert!(!app.launch_single_top);
        assert_eq!(app.current_title(), "Catalogue");
    }
}
