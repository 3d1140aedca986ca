//! # Roster List Component
//!
//! One row per contestant, in service order, labeled by name. Activating
//! a row asks the service for that player's full record. Rows carry no
//! other affordance, and an empty roster renders zero rows - no
//! placeholder.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `RosterListState` lives in `TuiState`
//! - `RosterList` is created each frame with borrowed state

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, List, ListItem, ListState};
use ratatui::Frame;

use crate::api::Player;
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

/// Persistent cursor state for the roster list.
pub struct RosterListState {
    pub cursor: usize,
    pub list_state: ListState,
}

/// Events emitted by the roster list.
#[derive(Debug, PartialEq, Eq)]
pub enum RosterEvent {
    /// The user activated the row for this player id.
    Activate(u64),
}

impl RosterListState {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            list_state: ListState::default(),
        }
    }

    /// Keeps the cursor valid after the roster is replaced wholesale.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.cursor = 0;
            self.list_state.select(None);
        } else {
            self.cursor = self.cursor.min(len - 1);
            self.list_state.select(Some(self.cursor));
        }
    }

    /// Handle a key event against the current roster, returning an event
    /// when a row is activated.
    ///
    /// Takes the players as a parameter (rather than owning a copy)
    /// because the roster is replaced wholesale on every list fetch.
    pub fn handle_event(&mut self, event: &TuiEvent, players: &[Player]) -> Option<RosterEvent> {
        match event {
            TuiEvent::CursorUp => {
                if !players.is_empty() {
                    self.cursor = self.cursor.saturating_sub(1);
                    self.list_state.select(Some(self.cursor));
                }
                None
            }
            TuiEvent::CursorDown => {
                if !players.is_empty() {
                    self.cursor = (self.cursor + 1).min(players.len() - 1);
                    self.list_state.select(Some(self.cursor));
                }
                None
            }
            TuiEvent::Submit => players
                .get(self.cursor)
                .map(|player| RosterEvent::Activate(player.id)),
            _ => None,
        }
    }
}

/// Transient render wrapper for the roster list.
pub struct RosterList<'a> {
    state: &'a mut RosterListState,
    players: &'a [Player],
    focused: bool,
}

impl<'a> RosterList<'a> {
    pub fn new(state: &'a mut RosterListState, players: &'a [Player], focused: bool) -> Self {
        Self {
            state,
            players,
            focused,
        }
    }
}

impl Component for RosterList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::bordered()
            .title(" Puppy Contestants ")
            .border_style(border_style);

        let items: Vec<ListItem> = self
            .players
            .iter()
            .map(|player| ListItem::new(player.name.clone()))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::BOLD).bg(Color::DarkGray))
            .highlight_symbol("> ");

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
