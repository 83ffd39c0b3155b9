//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::controller::{NavController, NavOptions};
use crate::core::destination::{Destination, Kind};
use crate::core::state::App;

/// Creates a test App with plain-push defaults.
pub fn test_app() -> App {
    App::new(false)
}

/// A controller with `destinations` pushed in order.
pub fn controller_with(destinations: &[Destination]) -> NavController {
    let mut nav = NavController::new();
    for destination in destinations {
        nav.navigate(destination.clone(), NavOptions::default());
    }
    nav
}

/// Kinds on the stack, oldest first.
pub fn kinds(nav: &NavController) -> Vec<Kind> {
    nav.back_stack()
        .iter()
        .map(|entry| entry.destination.kind())
        .collect()
}
