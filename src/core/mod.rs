//! # Core Navigation Logic
//!
//! This module contains the back-stack state machine.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────────┐
//!                    │            CORE             │
//!                    │  (this module)              │
//!                    │                             │
//!                    │  • Destination / Kind       │
//!                    │  • StackStore (+ observers) │
//!                    │  • NavController            │
//!                    │  • Action → update()        │
//!                    │                             │
//!                    │  No I/O. No UI. Pure.       │
//!                    └──────────────┬──────────────┘
//!                                   │ subscribe()
//!                                   ▼
//!                            ┌────────────┐
//!                            │    TUI     │
//!                            │  Renderer  │
//!                            │ (ratatui)  │
//!                            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`destination`]: `Destination` and its payload-free `Kind`
//! - [`store`]: `StackStore`, the single owner of the back-stack
//! - [`controller`]: `NavController` with navigate / pop operations
//! - [`state`]: The `App` struct: navigation scope plus status text
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: Config file loading and resolution

pub mod action;
pub mod config;
pub mod controller;
pub mod destination;
pub mod state;
pub mod store;

pub use controller::{NavController, NavOptions, PopUpTo};
pub use destination::{Destination, Kind, same_kind};
pub use store::{BackStackEntry, StackStore, SubscriptionId};
