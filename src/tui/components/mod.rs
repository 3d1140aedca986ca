//! # TUI Components
//!
//! All UI components for the terminal interface. Each file is
//! self-contained: state types, event types, rendering, and tests live
//! together.
//!
//! Two patterns, following the rest of the crate's architecture:
//!
//! - **Stateless** (`PlayerDetail`): created fresh each frame from core
//!   state, renders, done.
//! - **Persistent state + transient wrapper** (`RosterList`,
//!   `NewPlayerForm`): a `*State` struct lives in `TuiState` across
//!   frames (cursor position, form buffers), and a borrowing wrapper is
//!   created each frame to render it.
//!
//! Components receive roster data as props; they never reach into global
//! state themselves.

mod new_player_form;
mod player_detail;
mod roster_list;

pub use new_player_form::{FormEvent, NewPlayerForm, NewPlayerFormState};
pub use player_detail::PlayerDetail;
pub use roster_list::{RosterEvent, RosterList, RosterListState};
