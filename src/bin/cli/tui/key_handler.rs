use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use kartei::flashcards::Level;

use super::app_state::TuiState;

pub fn handle_key(state: &mut TuiState, key: KeyEvent) {
    // Clear flash message on any keypress
    state.flash_message = None;

    // Done screen: any key leaves
    if state.summary.is_some() {
        state.quit = true;
        return;
    }

    if state.show_help {
        state.show_help = false;
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.quit = true,
        KeyCode::Char(' ') | KeyCode::Enter => state.session.reveal(),
        KeyCode::Left | KeyCode::Char('a') => state.rate(Level::New),
        KeyCode::Down | KeyCode::Char('s') => state.rate(Level::Unsure),
        KeyCode::Right | KeyCode::Char('d') => state.rate(Level::Known),
        KeyCode::Backspace | KeyCode::Char('b') => state.session.go_back(),
        KeyCode::Char('?') => state.show_help = true,
        _ => {}
    }
}

pub fn handle_mouse(state: &mut TuiState, mouse: MouseEvent) {
    if state.summary.is_some() {
        return;
    }

    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        let col = mouse.column;
        let row = mouse.row;

        // Click on the progress strip jumps to that card
        if let Some(ref area) = state.progress_area {
            if row >= area.y && row < area.y + area.height {
                if let Some(index) = state.progress_slot_at(col) {
                    state.flash_message = None;
                    state.session.jump_to(index);
                }
                return;
            }
        }

        // Click on the card flips it
        if let Some(ref area) = state.card_area {
            if col >= area.x
                && col < area.x + area.width
                && row >= area.y
                && row < area.y + area.height
            {
                state.flash_message = None;
                state.session.reveal();
            }
        }
    }
}
