//! # Application State
//!
//! Core business state for Lineup. This module contains domain state only -
//! no TUI-specific types. Presentation state (focus, cursors, form buffers)
//! lives in the `tui` module.
//!
//! ```text
//! App
//! ├── api: Arc<dyn RosterApi>   // remote roster service
//! ├── roster: Vec<Player>       // all contestants currently known
//! └── selected: Option<Player>  // player shown in the detail panel
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;

use crate::api::{Player, RosterApi};

pub struct App {
    pub api: Arc<dyn RosterApi>,
    /// Replaced wholesale on every successful list fetch; empty at startup.
    pub roster: Vec<Player>,
    /// Set by a successful single-player fetch, cleared when that player is
    /// removed. `None` until the user picks someone.
    pub selected: Option<Player>,
}

impl App {
    pub fn new(api: Arc<dyn RosterApi>) -> Self {
        Self {
            api,
            roster: Vec::new(),
            selected: None,
        }
    }
}
