use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use super::app_state::TuiState;

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    // Show flash message if present
    if let Some(ref msg) = state.flash_message {
        let flash = Paragraph::new(format!(" {}", msg))
            .style(Style::default().bg(Color::Yellow).fg(Color::Black));
        f.render_widget(flash, area);
        return;
    }

    let hints = if state.summary.is_some() {
        " Any key: exit "
    } else {
        " Space: flip  ←/a: new  ↓/s: unsure  →/d: known  Backspace: back  ?: keys  q: quit "
    };

    let status = Paragraph::new(hints).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    f.render_widget(status, area);
}
