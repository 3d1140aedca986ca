//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal, renders the UI, and
//! translates keyboard events into `core::Action` values. This is the
//! only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop redraws when input arrives or an API completion lands;
//! otherwise it sleeps in `poll_event_timeout` for up to 200ms before
//! checking the completion channel again. There are no animations, so
//! idle frames are never drawn twice.
//!
//! ## Effects
//!
//! `update()` returns `Effect`s instead of doing I/O. Each effect is
//! spawned as a tokio task that performs one API call and sends the
//! completion back over an mpsc channel as an `Action`. A failed call is
//! logged and sends nothing: state stays as it was, nothing re-renders,
//! and no error reaches the user.

mod component;
mod components;
mod event;
mod ui;

use log::{error, info};
use std::sync::{mpsc, Arc};

use crate::api::{HttpRosterClient, RosterApi};
use crate::core::action::{update, Action, Effect};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{FormEvent, NewPlayerFormState, RosterEvent, RosterListState};
use crate::tui::event::{poll_event_immediate, poll_event_timeout, TuiEvent};

/// Which pane receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrow keys move through the roster; Enter selects a player;
    /// d removes the selected one; Tab jumps to the form; Esc quits.
    Roster,
    /// Keystrokes edit the invite form; Tab cycles its fields; Enter
    /// submits; Esc returns to the roster.
    Form,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub roster_list: RosterListState,
    pub form: NewPlayerFormState,
    pub focus: Focus,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            roster_list: RosterListState::new(),
            form: NewPlayerFormState::new(),
            focus: Focus::Roster,
        }
    }
}

/// Spawns a background task for `effect`; the completion comes back on
/// `tx` as an `Action`, or not at all if the request failed.
pub fn dispatch_effect(effect: Effect, api: Arc<dyn RosterApi>, tx: mpsc::Sender<Action>) {
    tokio::spawn(async move {
        let completion = match effect {
            Effect::FetchRoster => match api.list_players().await {
                Ok(players) => Some(Action::RosterLoaded(players)),
                Err(e) => {
                    error!("list players failed: {e}");
                    None
                }
            },
            Effect::FetchPlayer(id) => match api.get_player(id).await {
                Ok(player) => Some(Action::PlayerLoaded(player)),
                Err(e) => {
                    error!("get player {id} failed: {e}");
                    None
                }
            },
            Effect::CreatePlayer(fields) => match api.create_player(&fields).await {
                Ok(()) => Some(Action::InviteCompleted),
                Err(e) => {
                    error!("create player failed: {e}");
                    None
                }
            },
            Effect::DeletePlayer(id) => match api.delete_player(id).await {
                Ok(()) => Some(Action::RemoveCompleted),
                Err(e) => {
                    error!("delete player {id} failed: {e}");
                    None
                }
            },
        };

        if let Some(action) = completion {
            // Send fails only when the UI loop is already gone.
            let _ = tx.send(action);
        }
    });
}

/// Applies an action and dispatches whatever effect it produces.
fn apply(app: &mut App, tui: &mut TuiState, tx: &mpsc::Sender<Action>, action: Action) {
    if let Some(effect) = update(app, action) {
        dispatch_effect(effect, app.api.clone(), tx.clone());
    }
    tui.roster_list.clamp(app.roster.len());
}

/// Routes one terminal event according to the current focus, returning
/// the action it produced, if any. Quit is signaled via the return flag.
fn route_event(event: &TuiEvent, app: &App, tui: &mut TuiState) -> (Option<Action>, bool) {
    if matches!(event, TuiEvent::Quit) {
        return (None, true);
    }

    match tui.focus {
        Focus::Form => match event {
            TuiEvent::Escape => {
                tui.focus = Focus::Roster;
                (None, false)
            }
            other => match tui.form.handle_event(other) {
                Some(FormEvent::Submit(fields)) => (Some(Action::InvitePlayer(fields)), false),
                None => (None, false),
            },
        },
        Focus::Roster => match event {
            TuiEvent::Escape => (None, true),
            TuiEvent::NextField => {
                tui.focus = Focus::Form;
                (None, false)
            }
            TuiEvent::Delete | TuiEvent::InputChar('d') => (
                app.selected.as_ref().map(|p| Action::RemovePlayer(p.id)),
                false,
            ),
            other => match tui.roster_list.handle_event(other, &app.roster) {
                Some(RosterEvent::Activate(id)) => (Some(Action::SelectPlayer(id)), false),
                None => (None, false),
            },
        },
    }
}

pub fn run() -> std::io::Result<()> {
    let api: Arc<dyn RosterApi> = Arc::new(HttpRosterClient::new(None));
    let mut app = App::new(api);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();

    // Channel for completions from background tasks
    let (tx, rx) = mpsc::channel();

    // Initial roster fetch. The first frame below draws regardless of its
    // outcome, so a dead service still gets the full UI shell with an
    // empty roster.
    dispatch_effect(Effect::FetchRoster, app.api.clone(), tx.clone());

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Process first event + drain ALL pending events before next draw
        let first_event = poll_event_timeout(std::time::Duration::from_millis(200));
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            needs_redraw = true;
            let (action, quit) = route_event(&event, &app, &mut tui);
            should_quit |= quit;
            if let Some(action) = action {
                apply(&mut app, &mut tui, &tx, action);
            }
        }

        // Apply API completions in arrival order (last writer wins).
        for action in rx.try_iter() {
            needs_redraw = true;
            apply(&mut app, &mut tui, &tx, action);
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    info!("Lineup shutting down");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_app, test_player};

    fn channel() -> (mpsc::Sender<Action>, mpsc::Receiver<Action>) {
        mpsc::channel()
    }

    #[test]
    fn test_tab_moves_focus_to_the_form_and_esc_back() {
        let app = test_app();
        let mut tui = TuiState::new();

        route_event(&TuiEvent::NextField, &app, &mut tui);
        assert_eq!(tui.focus, Focus::Form);

        route_event(&TuiEvent::Escape, &app, &mut tui);
        assert_eq!(tui.focus, Focus::Roster);
    }

    #[test]
    fn test_esc_from_the_roster_quits() {
        let app = test_app();
        let mut tui = TuiState::new();

        let (_, quit) = route_event(&TuiEvent::Escape, &app, &mut tui);
        assert!(quit);
    }

    #[test]
    fn test_enter_on_a_roster_row_selects_that_player() {
        let mut app = test_app();
        app.roster = vec![test_player(1, "Rex"), test_player(2, "Fido")];
        let mut tui = TuiState::new();
        tui.roster_list.clamp(app.roster.len());

        route_event(&TuiEvent::CursorDown, &app, &mut tui);
        let (action, _) = route_event(&TuiEvent::Submit, &app, &mut tui);

        assert_eq!(action, Some(Action::SelectPlayer(2)));
    }

    #[test]
    fn test_removal_key_targets_the_selected_player_only() {
        let mut app = test_app();
        let mut tui = TuiState::new();

        // Nothing selected: the key does nothing.
        let (action, _) = route_event(&TuiEvent::InputChar('d'), &app, &mut tui);
        assert_eq!(action, None);

        app.selected = Some(test_player(7, "Rex"));
        let (action, _) = route_event(&TuiEvent::InputChar('d'), &app, &mut tui);
        assert_eq!(action, Some(Action::RemovePlayer(7)));
    }

    #[test]
    fn test_typing_d_in_the_form_is_text_not_removal() {
        let mut app = test_app();
        app.selected = Some(test_player(7, "Rex"));
        let mut tui = TuiState::new();
        tui.focus = Focus::Form;

        let (action, _) = route_event(&TuiEvent::InputChar('d'), &app, &mut tui);

        assert_eq!(action, None);
        assert_eq!(tui.form.name, "d");
    }

    #[test]
    fn test_apply_clamps_the_cursor_after_a_shrunken_roster() {
        let mut app = test_app();
        app.roster = vec![
            test_player(1, "Rex"),
            test_player(2, "Fido"),
            test_player(3, "Bella"),
        ];
        let mut tui = TuiState::new();
        tui.roster_list.clamp(app.roster.len());
        tui.roster_list.cursor = 2;
        let (tx, _rx) = channel();

        apply(
            &mut app,
            &mut tui,
            &tx,
            Action::RosterLoaded(vec![test_player(1, "Rex")]),
        );

        assert_eq!(tui.roster_list.cursor, 0);
    }
}
