//! # Player Detail Component
//!
//! Stateless panel for the currently selected player. With no selection it
//! shows a prompt instead; with one it shows the player's record and the
//! removal control. It is rebuilt from `App.selected` on every draw.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

use crate::api::Player;
use crate::tui::component::Component;

/// Prompt shown while no player has been chosen.
const PLACEHOLDER: &str = "Please select a player to see stats...";

/// Transient render wrapper for the detail panel.
pub struct PlayerDetail<'a> {
    player: Option<&'a Player>,
}

impl<'a> PlayerDetail<'a> {
    pub fn new(player: Option<&'a Player>) -> Self {
        Self { player }
    }

    fn detail_lines(player: &Player) -> Vec<Line<'_>> {
        let label = Style::default().fg(Color::DarkGray);

        let mut lines = vec![Line::from(vec![
            Span::styled("Name: ", label),
            Span::styled(
                player.name.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(" | ID: ", label),
            Span::raw(player.id.to_string()),
        ])];

        if let Some(url) = player.image_url.as_deref() {
            if !url.is_empty() {
                lines.push(Line::from(vec![
                    Span::styled("Image: ", label),
                    Span::raw(url),
                ]));
            }
        }

        let team = match player.team_id {
            Some(team_id) => team_id.to_string(),
            None => "unassigned".to_string(),
        };
        lines.push(Line::from(vec![Span::styled("Team: ", label), Span::raw(team)]));
        lines.push(Line::from(vec![
            Span::styled("Breed: ", label),
            Span::raw(player.breed.as_str()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Status: ", label),
            Span::raw(player.status.as_str()),
        ]));

        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("d ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::styled("Remove Player", Style::default().fg(Color::Red)),
        ]));

        lines
    }
}

impl Component for PlayerDetail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Puppy Details ")
            .border_style(Style::default().fg(Color::DarkGray));

        let paragraph = match self.player {
            None => Paragraph::new(PLACEHOLDER)
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            Some(player) => Paragraph::new(Self::detail_lines(player))
                .wrap(Wrap { trim: true })
                .block(block),
        };

        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::PlayerStatus;
    use crate::test_support::{buffer_text, test_player};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(player: Option<&Player>) -> String {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                PlayerDetail::new(player).render(f, f.area());
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_placeholder_when_nothing_selected() {
        let text = draw(None);
        assert!(text.contains("Please select a player to see stats..."));
    }

    #[test]
    fn test_detail_shows_the_record_and_removal_control() {
        let mut player = test_player(7, "Rex");
        player.breed = "Dalmatian".to_string();
        player.status = PlayerStatus::Field;
        player.team_id = Some(3);
        player.image_url = Some("https://example.com/rex.jpg".to_string());

        let text = draw(Some(&player));
        assert!(text.contains("Name: Rex | ID: 7"));
        assert!(text.contains("Image: https://example.com/rex.jpg"));
        assert!(text.contains("Team: 3"));
        assert!(text.contains("Breed: Dalmatian"));
        assert!(text.contains("Status: field"));
        assert!(text.contains("Remove Player"));
    }

    #[test]
    fn test_unassigned_team_and_missing_image() {
        let player = test_player(1, "Fido");

        let text = draw(Some(&player));
        assert!(text.contains("Team: unassigned"));
        assert!(!text.contains("Image:"));
    }
}
