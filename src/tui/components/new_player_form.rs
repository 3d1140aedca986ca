//! # New Player Form Component
//!
//! Four inputs - name, breed, status, image URL - and a submit action.
//! Tab cycles fields, typing edits the active text field, Space toggles
//! the status selector, Enter submits. Name and breed are required:
//! submission is ignored while either is empty.
//!
//! ## State Management
//!
//! The field buffers are internal state (`NewPlayerFormState`, owned by
//! `TuiState`), not core state: they are in-progress input, not roster
//! data. On a successful submission the form emits the four values as a
//! `NewPlayer` and resets itself to a fresh, empty instance.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::api::{NewPlayer, PlayerStatus};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// The four form fields, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Breed,
    Status,
    ImageUrl,
}

impl FormField {
    fn next(self) -> FormField {
        match self {
            FormField::Name => FormField::Breed,
            FormField::Breed => FormField::Status,
            FormField::Status => FormField::ImageUrl,
            FormField::ImageUrl => FormField::Name,
        }
    }

    fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Breed => "Breed",
            FormField::Status => "Status",
            FormField::ImageUrl => "Image URL",
        }
    }
}

/// High-level events emitted by the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// User submitted a complete form (Enter with name and breed filled).
    Submit(NewPlayer),
}

/// Persistent form state: the four in-progress inputs plus the active field.
pub struct NewPlayerFormState {
    pub name: String,
    pub breed: String,
    pub status: PlayerStatus,
    pub image_url: String,
    pub field: FormField,
}

impl NewPlayerFormState {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            breed: String::new(),
            status: PlayerStatus::default(),
            image_url: String::new(),
            field: FormField::Name,
        }
    }

    fn active_buffer(&mut self) -> Option<&mut String> {
        match self.field {
            FormField::Name => Some(&mut self.name),
            FormField::Breed => Some(&mut self.breed),
            FormField::Status => None,
            FormField::ImageUrl => Some(&mut self.image_url),
        }
    }

    /// Builds the invite record and resets the form, or returns `None`
    /// while a required field is still empty.
    fn take_submission(&mut self) -> Option<NewPlayer> {
        if self.name.is_empty() || self.breed.is_empty() {
            return None;
        }
        let invite = NewPlayer {
            name: std::mem::take(&mut self.name),
            breed: std::mem::take(&mut self.breed),
            status: self.status,
            image_url: std::mem::take(&mut self.image_url),
        };
        *self = NewPlayerFormState::new();
        Some(invite)
    }
}

impl EventHandler for NewPlayerFormState {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<FormEvent> {
        match event {
            TuiEvent::NextField => {
                self.field = self.field.next();
                None
            }
            TuiEvent::InputChar(c) => {
                // Status is a two-option selector, not a text field.
                if self.field == FormField::Status {
                    if *c == ' ' {
                        self.status = self.status.toggle();
                    }
                } else if let Some(buffer) = self.active_buffer() {
                    buffer.push(*c);
                }
                None
            }
            TuiEvent::Backspace => {
                if let Some(buffer) = self.active_buffer() {
                    buffer.pop();
                }
                None
            }
            TuiEvent::Submit => self.take_submission().map(FormEvent::Submit),
            _ => None,
        }
    }
}

/// Transient render wrapper for the invite form.
pub struct NewPlayerForm<'a> {
    state: &'a NewPlayerFormState,
    focused: bool,
}

impl<'a> NewPlayerForm<'a> {
    pub fn new(state: &'a NewPlayerFormState, focused: bool) -> Self {
        Self { state, focused }
    }

    fn field_line(&self, field: FormField, value: &str) -> Line<'_> {
        let active = self.focused && self.state.field == field;
        let value_style = if active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };

        let mut spans = vec![
            Span::styled(
                format!("{:<10}", field.label()),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(value.to_string(), value_style),
        ];
        if active {
            spans.push(Span::styled("▏", Style::default().fg(Color::Cyan)));
        }
        Line::from(spans)
    }
}

impl Component for NewPlayerForm<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::bordered()
            .title(" Add a new Player ")
            .title_bottom(Line::from(" Enter Invite Player  Tab Next field ").centered())
            .border_style(border_style);

        let status_value = if self.focused && self.state.field == FormField::Status {
            format!("< {} >", self.state.status.label())
        } else {
            self.state.status.label().to_string()
        };

        let lines = vec![
            self.field_line(FormField::Name, &self.state.name),
            self.field_line(FormField::Breed, &self.state.breed),
            self.field_line(FormField::Status, &status_value),
            self.field_line(FormField::ImageUrl, &self.state.image_url),
        ];

        let form = Paragraph::new(lines).block(block);
        frame.render_widget(form, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn type_str(state: &mut NewPlayerFormState, text: &str) {
        for c in text.chars() {
            state.handle_event(&TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_typing_routes_to_the_active_field() {
        let mut state = NewPlayerFormState::new();

        type_str(&mut state, "Rex");
        state.handle_event(&TuiEvent::NextField);
        type_str(&mut state, "Lab");

        assert_eq!(state.name, "Rex");
        assert_eq!(state.breed, "Lab");
    }

    #[test]
    fn test_tab_cycles_through_all_fields_and_wraps() {
        let mut state = NewPlayerFormState::new();
        assert_eq!(state.field, FormField::Name);

        for expected in [
            FormField::Breed,
            FormField::Status,
            FormField::ImageUrl,
            FormField::Name,
        ] {
            state.handle_event(&TuiEvent::NextField);
            assert_eq!(state.field, expected);
        }
    }

    #[test]
    fn test_status_defaults_to_bench_and_space_toggles() {
        let mut state = NewPlayerFormState::new();
        assert_eq!(state.status, PlayerStatus::Bench);

        state.field = FormField::Status;
        state.handle_event(&TuiEvent::InputChar(' '));
        assert_eq!(state.status, PlayerStatus::Field);

        // Other characters leave the selector alone.
        state.handle_event(&TuiEvent::InputChar('x'));
        assert_eq!(state.status, PlayerStatus::Field);
    }

    #[test]
    fn test_backspace_edits_the_active_field() {
        let mut state = NewPlayerFormState::new();
        type_str(&mut state, "Rexx");
        state.handle_event(&TuiEvent::Backspace);

        assert_eq!(state.name, "Rex");
    }

    #[test]
    fn test_submit_requires_name_and_breed() {
        let mut state = NewPlayerFormState::new();

        assert_eq!(state.handle_event(&TuiEvent::Submit), None);

        type_str(&mut state, "Rex");
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
        assert_eq!(state.name, "Rex");
    }

    #[test]
    fn test_submit_emits_the_four_fields_and_resets() {
        let mut state = NewPlayerFormState::new();
        type_str(&mut state, "Rex");
        state.handle_event(&TuiEvent::NextField);
        type_str(&mut state, "Lab");
        state.field = FormField::Status;
        state.handle_event(&TuiEvent::InputChar(' '));

        let event = state.handle_event(&TuiEvent::Submit);
        assert_eq!(
            event,
            Some(FormEvent::Submit(NewPlayer {
                name: "Rex".to_string(),
                breed: "Lab".to_string(),
                status: PlayerStatus::Field,
                image_url: String::new(),
            }))
        );

        // Fresh, empty instance afterwards.
        assert!(state.name.is_empty());
        assert!(state.breed.is_empty());
        assert!(state.image_url.is_empty());
        assert_eq!(state.status, PlayerStatus::Bench);
        assert_eq!(state.field, FormField::Name);
    }

    #[test]
    fn test_render_shows_labels_and_values() {
        let mut state = NewPlayerFormState::new();
        type_str(&mut state, "Rex");

        let backend = TestBackend::new(50, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                NewPlayerForm::new(&state, true).render(f, f.area());
            })
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Add a new Player"));
        assert!(text.contains("Name"));
        assert!(text.contains("Rex"));
        assert!(text.contains("Breed"));
        assert!(text.contains("Bench"));
        assert!(text.contains("Image URL"));
        assert!(text.contains("Invite Player"));
    }
}
