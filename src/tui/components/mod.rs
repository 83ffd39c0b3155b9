//! # TUI Components
//!
//! Chrome shared by every screen: the title bar, the root catalogue, the
//! back-stack panel, and toasts. The per-destination screens live in
//! `tui::screens`.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: screen title, depth, and status
//! - `StackPanel`: the back-stack, newest first
//! - `Toast`: transient message overlay
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `Catalogue`: root list with selection; emits `CatalogueEvent`
//!
//! Components receive external data as props, not by reaching into `App`.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs
//! ├── catalogue.rs
//! ├── stack_panel.rs
//! └── toast.rs
//! ```

pub mod catalogue;
pub mod stack_panel;
mod title_bar;
pub mod toast;

pub use catalogue::{Catalogue, CatalogueEvent, CatalogueState};
pub use stack_panel::StackPanel;
pub use title_bar::TitleBar;
pub use toast::Toast;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate a string to fit within `max_width` columns, adding "..." if needed.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let budget = max_width - 3;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}
