use ratatui::prelude::Rect;

use kartei::flashcards::{Card, CardStore, Level};
use kartei::review::{RateStatus, ReviewSession, SessionSummary};

pub struct TuiState<'a> {
    pub project_name: String,
    pub session: ReviewSession<'a>,

    /// Set once the final card is rated; switches to the done screen
    pub summary: Option<SessionSummary>,

    // Panel areas for mouse hit-testing (updated each draw)
    pub card_area: Option<Rect>,
    pub progress_area: Option<Rect>,

    pub flash_message: Option<String>,
    pub show_help: bool,
    pub quit: bool,
}

impl<'a> TuiState<'a> {
    pub fn new(store: &'a dyn CardStore, project_name: &str, queue: Vec<Card>) -> Self {
        Self {
            project_name: project_name.to_string(),
            session: ReviewSession::start(store, queue),
            summary: None,
            card_area: None,
            progress_area: None,
            flash_message: None,
            show_help: false,
            quit: false,
        }
    }

    /// Rate the current card; store trouble lands in the flash line,
    /// never in the navigation.
    pub fn rate(&mut self, level: Level) {
        let Some(outcome) = self.session.rate(level) else {
            return;
        };

        match outcome.status {
            RateStatus::Saved(_) => {}
            RateStatus::SaveFailed(err) => {
                self.flash_message = Some(format!("Level change may not have saved: {}", err));
            }
            RateStatus::CardMissing => {
                self.flash_message = Some("Card was deleted elsewhere; skipped".to_string());
            }
        }

        if outcome.summary.is_some() {
            self.summary = outcome.summary;
        }
    }

    /// Progress-strip slot under a screen column, if any
    pub fn progress_slot_at(&self, col: u16) -> Option<usize> {
        let area = self.progress_area?;
        let len = self.session.queue().len();
        if len == 0 || col < area.x {
            return None;
        }

        let cell_w = (area.width / len as u16).max(1);
        let index = ((col - area.x) / cell_w) as usize;
        let strip_end = area.x.saturating_add(cell_w.saturating_mul(len as u16));
        if index < len && col < strip_end {
            Some(index)
        } else {
            None
        }
    }

    pub fn finish(self) -> SessionSummary {
        match self.summary {
            Some(summary) => summary,
            None => self.session.exit(),
        }
    }
}
