//! # Actions
//!
//! Everything that can happen in Lineup becomes an `Action`.
//! User activates a roster entry? That's `Action::SelectPlayer(id)`.
//! The list fetch lands? That's `Action::RosterLoaded(players)`.
//!
//! The `update()` function applies an action to the state and returns the
//! follow-up `Effect`, if any. No I/O here - the TUI loop dispatches
//! effects onto background tasks and feeds their completions back in as
//! actions.
//!
//! ```text
//! State + Action  →  update()  →  mutated State + Option<Effect>
//! ```
//!
//! Completions are applied strictly in arrival order on the UI task, so
//! two in-flight fetches that finish out of issue order resolve
//! last-writer-wins. Failed requests never become actions at all: the
//! dispatcher logs them and the state stays as it was.

use crate::api::{NewPlayer, Player};
use crate::core::state::App;

/// Every state transition in the application.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// User activated a roster entry; its details should be fetched.
    SelectPlayer(u64),
    /// User submitted the invite form.
    InvitePlayer(NewPlayer),
    /// User activated the removal control on the selected player.
    RemovePlayer(u64),
    /// List fetch completed: replace the roster wholesale.
    RosterLoaded(Vec<Player>),
    /// Single-player fetch completed: show this player in the detail panel.
    PlayerLoaded(Player),
    /// Create request reached the service (status not inspected).
    InviteCompleted,
    /// Delete request reached the service (status not inspected).
    RemoveCompleted,
}

/// Side effects produced by `update()`. Each one becomes a background task
/// that talks to the service and reports back with another action.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchRoster,
    FetchPlayer(u64),
    CreatePlayer(NewPlayer),
    DeletePlayer(u64),
}

/// Applies `action` to `app`, returning the effect to dispatch next, if any.
pub fn update(app: &mut App, action: Action) -> Option<Effect> {
    match action {
        Action::SelectPlayer(id) => Some(Effect::FetchPlayer(id)),
        Action::InvitePlayer(fields) => Some(Effect::CreatePlayer(fields)),
        Action::RemovePlayer(id) => Some(Effect::DeletePlayer(id)),
        Action::RosterLoaded(players) => {
            app.roster = players;
            None
        }
        Action::PlayerLoaded(player) => {
            app.selected = Some(player);
            None
        }
        // Writes resynchronize with a fresh list fetch whatever the service
        // answered; a removal also drops the stale selection.
        Action::InviteCompleted => Some(Effect::FetchRoster),
        Action::RemoveCompleted => {
            app.selected = None;
            Some(Effect::FetchRoster)
        }
    }
}
