//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the visible
//! back-stack entry, and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Back-stack subscription
//!
//! `TuiState` subscribes to the navigation store when it is created. The
//! subscriber forwards every committed snapshot over an mpsc channel, and
//! `TuiState::sync()` drains it: the latest snapshot becomes the rendered
//! stack and per-entry screen state for popped entries is dropped.
//!
//! ## Redraw Strategy
//!
//! The loop only redraws after input, a stack change, or a toast expiring.
//! Otherwise it sleeps in `poll` for the configured interval.

mod component;
pub mod components;
pub mod event;
pub mod screens;
pub mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::controller::NavController;
use crate::core::state::App;
use crate::core::store::{BackStackEntry, SubscriptionId};
use crate::tui::component::EventHandler;
use crate::tui::components::{CatalogueEvent, CatalogueState, Toast};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::screens::{ScreenEvent, ScreenStates};

/// TUI-specific presentation state (not part of core navigation logic)
pub struct TuiState {
    /// Latest snapshot received from the store subscription.
    pub back_stack: Vec<BackStackEntry>,
    /// Per-entry screen state, keyed by entry id.
    pub screens: ScreenStates,
    /// Root screen list.
    pub catalogue: CatalogueState,
    pub toast: Option<Toast>,
    pub show_stack_panel: bool,
    pub toast_duration: Duration,
    subscription: SubscriptionId,
    snapshots: mpsc::Receiver<Vec<BackStackEntry>>,
}

impl TuiState {
    /// Create the renderer state and subscribe it to `nav`'s store.
    pub fn new(nav: &mut NavController, show_stack_panel: bool) -> Self {
        let (tx, rx) = mpsc::channel();
        let subscription = nav.subscribe(move |entries| {
            if tx.send(entries.to_vec()).is_err() {
                warn!("Back-stack snapshot dropped: renderer receiver gone");
            }
        });
        Self {
            back_stack: nav.back_stack().to_vec(),
            screens: ScreenStates::new(),
            catalogue: CatalogueState::default(),
            toast: None,
            show_stack_panel,
            toast_duration: Duration::from_millis(crate::core::config::DEFAULT_TOAST_DURATION_MS),
            subscription,
            snapshots: rx,
        }
    }

    pub fn subscription(&self) -> SubscriptionId {
        self.subscription
    }

    /// Apply pending snapshots. Returns true if any arrived.
    pub fn sync(&mut self) -> bool {
        let mut changed = false;
        while let Ok(entries) = self.snapshots.try_recv() {
            self.back_stack = entries;
            changed = true;
        }
        if changed {
            self.screens.sync(&self.back_stack);
            debug!("Renderer synced (depth={})", self.back_stack.len());
        }
        changed
    }

    pub fn show_toast(&mut self, message: impl Into<String>, now: Instant) {
        self.toast = Some(Toast::new(message, now, self.toast_duration));
    }

    /// Clear an expired toast. Returns true if one was cleared.
    pub fn expire_toast(&mut self, now: Instant) -> bool {
        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.toast = None;
            return true;
        }
        false
    }
}

/// Restores the terminal on drop, so an early `?` return doesn't leave it in raw mode.
struct TerminalRestoreGuard;

impl Drop for TerminalRestoreGuard {
    fn drop(&mut self) {
        ratatui::restore();
        debug!("Terminal restored");
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste)?;
        info!("Terminal modes enabled (bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
    }
}

/// Apply an action and carry out its effect. Returns true when the app should quit.
fn apply(app: &mut App, tui: &mut TuiState, action: Action, now: Instant) -> bool {
    let effect = update(app, action);
    tui.sync();
    match effect {
        Effect::Quit => true,
        Effect::Notify(message) => {
            tui.show_toast(message, now);
            false
        }
        Effect::None => false,
    }
}

/// Route one input event. Returns true when the app should quit.
pub fn dispatch(app: &mut App, tui: &mut TuiState, event: TuiEvent, now: Instant) -> bool {
    match event {
        TuiEvent::Resize => false,
        TuiEvent::ForceQuit => apply(app, tui, Action::Quit, now),
        TuiEvent::Escape => apply(app, tui, Action::Back, now),
        TuiEvent::Home => apply(app, tui, Action::Home, now),
        event => match tui.back_stack.last().cloned() {
            Some(entry) => {
                let state = tui.screens.get_mut(&entry);
                match screens::handle_event(&entry, state, &event) {
                    Some(ScreenEvent::Navigate(action)) => apply(app, tui, action, now),
                    Some(ScreenEvent::Toast(message)) => {
                        tui.show_toast(message, now);
                        false
                    }
                    None => false,
                }
            }
            None => match tui.catalogue.handle_event(&event) {
                Some(CatalogueEvent::Open(kind)) => {
                    apply(app, tui, Action::Open(kind.default_destination()), now)
                }
                Some(CatalogueEvent::Quit) => apply(app, tui, Action::Quit, now),
                None => false,
            },
        },
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(&mut app.nav, config.show_stack_panel);
    tui.toast_duration = Duration::from_millis(config.toast_duration_ms);
    let poll_interval = Duration::from_millis(config.poll_interval_ms);

    let mut terminal = ratatui::init();
    let _restore_guard = TerminalRestoreGuard;
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    let mut needs_redraw = true; // Force first frame

    loop {
        if tui.expire_toast(Instant::now()) {
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(poll_interval);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if dispatch(&mut app, &mut tui, event, Instant::now()) {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Exiting at depth {}", app.nav.depth());
    app.nav.unsubscribe(tui.subscription());
    Ok(())
}
