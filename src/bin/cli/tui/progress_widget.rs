use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use kartei::flashcards::Level;

use super::app_state::TuiState;

/// One cell per queue slot, colored by the level chosen this session.
/// The same geometry backs the mouse hit-test in `TuiState`.
pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    let len = state.session.queue().len();
    if len == 0 {
        return;
    }

    let cell_w = (area.width / len as u16).max(1) as usize;
    let mut spans = Vec::with_capacity(len);

    for i in 0..len {
        let color = match state.session.outcome_at(i) {
            None => Color::DarkGray,
            Some(Level::New) => Color::Cyan,
            Some(Level::Unsure) => Color::Yellow,
            Some(Level::Known) => Color::Green,
        };

        let mut style = Style::default().fg(color);
        if i == state.session.position() {
            style = style.add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled("█".repeat(cell_w), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
