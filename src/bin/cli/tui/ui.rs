use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use super::app_state::TuiState;
use super::{card_widget, progress_widget, status_bar};

pub fn draw(f: &mut Frame, state: &mut TuiState) {
    let size = f.area();

    // Title + card + progress strip + status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(7),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(size);

    let title_area = rows[0];
    let card_area = rows[1];
    let progress_area = rows[2];
    let status_area = rows[3];

    // Save areas for mouse hit-testing
    state.card_area = Some(card_area);
    state.progress_area = Some(progress_area);

    let stats = state.session.stats();
    let title = if state.summary.is_some() {
        format!(" kartei — {} ", state.project_name)
    } else {
        format!(
            " kartei — {} — card {}/{} ",
            state.project_name,
            state.session.position() + 1,
            stats.total
        )
    };
    f.render_widget(
        Paragraph::new(title).style(Style::default().add_modifier(Modifier::BOLD)),
        title_area,
    );

    card_widget::draw(f, card_area, state);
    progress_widget::draw(f, progress_area, state);
    status_bar::draw(f, status_area, state);
}
