use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::app_state::TuiState;

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    if let Some(summary) = state.summary {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  Session complete — {} of {} card(s) rated.", summary.rated, summary.total),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "  Press any key to leave.",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let block = Block::default()
            .title(" Done ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green));
        f.render_widget(Paragraph::new(text).block(block), area);
        return;
    }

    if state.show_help {
        let text = vec![
            Line::from(""),
            Line::from("  Space/Enter  flip the card"),
            Line::from("  ←/a          rate new"),
            Line::from("  ↓/s          rate unsure"),
            Line::from("  →/d          rate known"),
            Line::from("  Backspace/b  previous card"),
            Line::from("  click strip  jump to a card"),
            Line::from("  q/Esc        end the session"),
        ];
        let block = Block::default().title(" Keys ").borders(Borders::ALL);
        f.render_widget(Paragraph::new(text).block(block), area);
        return;
    }

    let Some(card) = state.session.current_card() else {
        return;
    };

    let revealed = state.session.is_revealed();
    let (title, body, accent) = if revealed {
        (" Answer ", card.back.as_str(), Color::Green)
    } else {
        (" Question ", card.front.as_str(), Color::Cyan)
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    let mut lines = vec![Line::from("")];
    for line in body.lines() {
        lines.push(Line::from(format!("  {}", line)));
    }
    lines.push(Line::from(""));
    if !revealed {
        lines.push(Line::from(Span::styled(
            "  Space flips • ← new  ↓ unsure  → known",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}
