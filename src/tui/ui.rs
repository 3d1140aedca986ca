//! Render orchestrator: every draw rebuilds the whole widget tree from
//! current state. There is no diffing and no incremental patching - a
//! title bar, the contestants column (roster list over the invite form),
//! and the details column are computed fresh each time.

use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{NewPlayerForm, PlayerDetail, RosterList};
use crate::tui::{Focus, TuiState};

use ratatui::layout::{Constraint, Layout};
use ratatui::text::Span;
use ratatui::Frame;

/// Rows reserved for the invite form: four fields plus the border.
const FORM_HEIGHT: u16 = 6;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min, Percentage};

    let layout = Layout::vertical([Length(1), Min(0)]);
    let [title_area, main_area] = layout.areas(frame.area());

    let title_text = format!(
        "PUPPY BOWL | {} contestant(s) | Tab Form  Enter Select  d Remove  Esc Quit",
        app.roster.len()
    );
    frame.render_widget(Span::raw(title_text), title_area);

    let [contestants_area, details_area] =
        Layout::horizontal([Percentage(50), Percentage(50)]).areas(main_area);
    let [list_area, form_area] =
        Layout::vertical([Min(0), Length(FORM_HEIGHT)]).areas(contestants_area);

    RosterList::new(&mut tui.roster_list, &app.roster, tui.focus == Focus::Roster)
        .render(frame, list_area);
    NewPlayerForm::new(&tui.form, tui.focus == Focus::Form).render(frame, form_area);
    PlayerDetail::new(app.selected.as_ref()).render(frame, details_area);
}
