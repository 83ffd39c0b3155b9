//! # Actions
//!
//! Everything that can move the back-stack becomes an `Action`.
//! User opens a sample from the catalogue? That's `Action::Open(destination)`.
//! User presses Esc? That's `Action::Back`.
//!
//! The `update()` function applies an action to the `App` and returns an
//! `Effect` for the adapter to carry out. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::core::controller::NavOptions;
use crate::core::destination::{Destination, Kind};
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Navigate with explicit options.
    Navigate {
        destination: Destination,
        options: NavOptions,
    },
    /// Navigate with the configured single-top default.
    Open(Destination),
    Back,
    PopUpTo { kind: Kind, inclusive: bool },
    Home,
    Quit,
}

/// What the adapter should do after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    /// Show a transient message; the stack did not change.
    Notify(String),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Navigate {
            destination,
            options,
        } => {
            app.nav.navigate(destination, options);
            app.status_message.clear();
            Effect::None
        }
        Action::Open(destination) => {
            let options = if app.launch_single_top {
                NavOptions::default().single_top()
            } else {
                NavOptions::default()
            };
            app.nav.navigate(destination, options);
            app.status_message.clear();
            Effect::None
        }
        Action::Back => {
            if app.nav.pop_back_stack() {
                app.status_message.clear();
                Effect::None
            } else {
                // Already at root: leaving the root screen is the adapter's call.
                Effect::Quit
            }
        }
        Action::PopUpTo { kind, inclusive } => {
            if app.nav.contains(kind) {
                app.nav.pop_up_to(kind, inclusive);
                app.status_message.clear();
                Effect::None
            } else {
                Effect::Notify(format!("No {kind} screen on the stack"))
            }
        }
        Action::Home => {
            if app.nav.pop_up_to_root() {
                app.status_message = String::from("Back at the catalogue");
                Effect::None
            } else {
                Effect::Notify(String::from("Already at the catalogue"))
            }
        }
        Action::Quit => Effect::Quit,
    }
}
