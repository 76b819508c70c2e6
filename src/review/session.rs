//! Leveled review session state machine
//!
//! An ephemeral, ordered walk over a snapshot of deck cards. The session
//! owns its cursor, reveal state and per-card outcomes; persistence goes
//! through the `CardStore` seam, one card per rating. Any frontend
//! (line-mode CLI, TUI) drives it through the same transitions.

use crate::flashcards::{Card, CardStore, Level};
use crate::storage::StoreError;

/// Display state for the current card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    /// Question side shown
    AwaitingReveal,
    /// Answer side shown
    Revealed,
}

/// What happened on the persistence side of a rating
#[derive(Debug)]
pub enum RateStatus {
    /// Level change committed to the store
    Saved(Card),
    /// Store write failed; the session advanced anyway
    SaveFailed(StoreError),
    /// The card vanished from the store mid-session; skipped unrated
    CardMissing,
}

/// Result of a single `rate` call
#[derive(Debug)]
pub struct RateOutcome {
    pub status: RateStatus,
    /// Present when this rating finished the session
    pub summary: Option<SessionSummary>,
}

/// Reported when a session finishes or is exited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub total: usize,
    pub rated: usize,
}

/// Point-in-time statistics, derived on demand and never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub total: usize,
    pub completed: usize,
    pub rated: usize,
    pub new: usize,
    pub unsure: usize,
    pub known: usize,
}

/// One study pass over a fixed queue of cards.
///
/// The queue is a snapshot taken at session start; cards added or removed
/// in the deck afterwards do not affect it. Dropping or exiting the
/// session ends it; a torn-down session cannot be mutated.
pub struct ReviewSession<'s> {
    store: &'s dyn CardStore,
    queue: Vec<Card>,
    position: usize,
    display: DisplayState,
    /// Level assigned per queue slot during this session; distinct from
    /// the persisted level on the card.
    outcomes: Vec<Option<Level>>,
}

impl<'s> ReviewSession<'s> {
    /// Start a session over a queue snapshot. An empty queue yields a
    /// session that is terminal from the start ("nothing to study").
    pub fn start(store: &'s dyn CardStore, queue: Vec<Card>) -> Self {
        let outcomes = vec![None; queue.len()];
        Self {
            store,
            queue,
            position: 0,
            display: DisplayState::AwaitingReveal,
            outcomes,
        }
    }

    pub fn queue(&self) -> &[Card] {
        &self.queue
    }

    /// Zero-based cursor; equals the number of cards passed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.queue.get(self.position)
    }

    pub fn display(&self) -> DisplayState {
        self.display
    }

    pub fn is_revealed(&self) -> bool {
        self.display == DisplayState::Revealed
    }

    pub fn is_finished(&self) -> bool {
        self.position == self.queue.len()
    }

    /// Level assigned to a queue slot during this session, if any
    pub fn outcome_at(&self, index: usize) -> Option<Level> {
        self.outcomes.get(index).copied().flatten()
    }

    /// Toggle between question and answer for the current card.
    /// Toggling twice restores the original state; terminal sessions
    /// ignore the call.
    pub fn reveal(&mut self) {
        if self.is_finished() {
            return;
        }
        self.display = match self.display {
            DisplayState::AwaitingReveal => DisplayState::Revealed,
            DisplayState::Revealed => DisplayState::AwaitingReveal,
        };
    }

    /// Apply a level to the current card and advance.
    ///
    /// The advance is optimistic: a failed store write surfaces in the
    /// returned status but never blocks or reverts navigation. A card
    /// that no longer exists in the store is skipped without recording
    /// an outcome. Returns `None` when the session is already terminal.
    pub fn rate(&mut self, level: Level) -> Option<RateOutcome> {
        let card = self.queue.get(self.position)?;

        let status = match self.store.set_level(card.project_id, card.id, level) {
            Ok(saved) => {
                self.outcomes[self.position] = Some(level);
                RateStatus::Saved(saved)
            }
            Err(StoreError::CardNotFound(_)) => RateStatus::CardMissing,
            Err(err) => {
                self.outcomes[self.position] = Some(level);
                RateStatus::SaveFailed(err)
            }
        };

        self.position += 1;
        self.display = DisplayState::AwaitingReveal;

        let summary = if self.is_finished() {
            Some(self.summary())
        } else {
            None
        };
        Some(RateOutcome { status, summary })
    }

    /// Step back one card for re-display. Navigation only: recorded
    /// outcomes and persisted levels stay as they are. No-op at the
    /// start of the queue.
    pub fn go_back(&mut self) {
        if self.position == 0 {
            return;
        }
        self.position -= 1;
        self.display = DisplayState::AwaitingReveal;
    }

    /// Jump to a queue slot (the progress-strip click). Out-of-range
    /// indices are a no-op.
    pub fn jump_to(&mut self, index: usize) {
        if index >= self.queue.len() {
            return;
        }
        self.position = index;
        self.display = DisplayState::AwaitingReveal;
    }

    /// End the session where it stands. Consumes the session; nothing
    /// beyond prior `rate` commits is persisted.
    pub fn exit(self) -> SessionSummary {
        self.summary()
    }

    pub fn stats(&self) -> SessionStats {
        let mut stats = SessionStats {
            total: self.queue.len(),
            completed: self.position,
            rated: 0,
            new: 0,
            unsure: 0,
            known: 0,
        };
        for outcome in self.outcomes.iter().flatten() {
            stats.rated += 1;
            match outcome {
                Level::New => stats.new += 1,
                Level::Unsure => stats.unsure += 1,
                Level::Known => stats.known += 1,
            }
        }
        stats
    }

    fn summary(&self) -> SessionSummary {
        SessionSummary {
            total: self.queue.len(),
            rated: self.outcomes.iter().filter(|o| o.is_some()).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use uuid::Uuid;

    use crate::flashcards::{Deck, StudyFilter, DEFAULT_KNOWN_REVIEW_CAP};
    use crate::storage::{Result, StoreError};

    use super::*;

    /// In-memory store that counts writes and can be told to fail
    struct MemoryStore {
        cards: RefCell<Vec<Card>>,
        writes: RefCell<usize>,
        fail_writes: bool,
    }

    impl MemoryStore {
        fn new(cards: Vec<Card>) -> Self {
            Self {
                cards: RefCell::new(cards),
                writes: RefCell::new(0),
                fail_writes: false,
            }
        }

        fn failing(cards: Vec<Card>) -> Self {
            Self {
                fail_writes: true,
                ..Self::new(cards)
            }
        }

        fn writes(&self) -> usize {
            *self.writes.borrow()
        }

        fn remove(&self, card_id: Uuid) {
            self.cards.borrow_mut().retain(|c| c.id != card_id);
        }

        fn get(&self, card_id: Uuid) -> Card {
            self.cards
                .borrow()
                .iter()
                .find(|c| c.id == card_id)
                .cloned()
                .unwrap()
        }
    }

    impl CardStore for MemoryStore {
        fn list_by_project(&self, project_id: Uuid) -> Result<Vec<Card>> {
            Ok(self
                .cards
                .borrow()
                .iter()
                .filter(|c| c.project_id == project_id)
                .cloned()
                .collect())
        }

        fn set_level(&self, _project_id: Uuid, card_id: Uuid, level: Level) -> Result<Card> {
            if self.fail_writes {
                return Err(StoreError::Io(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    "disk full",
                )));
            }

            let mut cards = self.cards.borrow_mut();
            let card = cards
                .iter_mut()
                .find(|c| c.id == card_id)
                .ok_or(StoreError::CardNotFound(card_id))?;

            card.level = level;
            card.review_count += 1;
            card.last_reviewed_at = Some(chrono::Utc::now());
            *self.writes.borrow_mut() += 1;
            Ok(card.clone())
        }
    }

    fn make_cards(n: usize) -> Vec<Card> {
        let project_id = Uuid::new_v4();
        (0..n)
            .map(|i| {
                let mut card =
                    Card::new(project_id, format!("front {}", i), format!("back {}", i)).unwrap();
                card.position = i as i32;
                card
            })
            .collect()
    }

    #[test]
    fn full_pass_rates_every_card() {
        let cards = make_cards(4);
        let store = MemoryStore::new(cards.clone());
        let mut session = ReviewSession::start(&store, cards);

        let mut summary = None;
        for _ in 0..4 {
            assert!(!session.is_finished());
            let outcome = session.rate(Level::Known).unwrap();
            assert!(matches!(outcome.status, RateStatus::Saved(_)));
            summary = outcome.summary;
        }

        assert!(session.is_finished());
        assert_eq!(summary, Some(SessionSummary { total: 4, rated: 4 }));
        assert_eq!(store.writes(), 4);
    }

    #[test]
    fn empty_queue_is_terminal_from_the_start() {
        let store = MemoryStore::new(Vec::new());
        let mut session = ReviewSession::start(&store, Vec::new());

        assert!(session.is_finished());
        assert!(session.current_card().is_none());
        assert!(session.rate(Level::New).is_none());

        let summary = session.exit();
        assert_eq!(summary, SessionSummary { total: 0, rated: 0 });
    }

    #[test]
    fn reveal_toggles_and_double_reveal_restores() {
        let cards = make_cards(1);
        let store = MemoryStore::new(cards.clone());
        let mut session = ReviewSession::start(&store, cards);

        assert_eq!(session.display(), DisplayState::AwaitingReveal);
        session.reveal();
        assert_eq!(session.display(), DisplayState::Revealed);
        session.reveal();
        assert_eq!(session.display(), DisplayState::AwaitingReveal);
    }

    #[test]
    fn rating_resets_reveal_for_the_next_card() {
        let cards = make_cards(2);
        let store = MemoryStore::new(cards.clone());
        let mut session = ReviewSession::start(&store, cards);

        session.reveal();
        session.rate(Level::Unsure).unwrap();

        assert_eq!(session.position(), 1);
        assert_eq!(session.display(), DisplayState::AwaitingReveal);
    }

    #[test]
    fn go_back_then_rate_commits_exactly_one_more_write() {
        let cards = make_cards(3);
        let store = MemoryStore::new(cards.clone());
        let first_id = cards[0].id;
        let mut session = ReviewSession::start(&store, cards);

        session.rate(Level::Unsure).unwrap();
        let writes_before = store.writes();

        session.go_back();
        assert_eq!(session.position(), 0);
        session.rate(Level::Unsure).unwrap();

        assert_eq!(store.writes(), writes_before + 1);
        // The store saw both ratings; back-navigation undoes neither
        assert_eq!(store.get(first_id).review_count, 2);
    }

    #[test]
    fn go_back_at_the_start_is_a_noop() {
        let cards = make_cards(2);
        let store = MemoryStore::new(cards.clone());
        let mut session = ReviewSession::start(&store, cards);

        session.reveal();
        session.go_back();

        assert_eq!(session.position(), 0);
        // Untouched by the rejected transition
        assert_eq!(session.display(), DisplayState::Revealed);
    }

    #[test]
    fn jump_to_lands_on_the_question_side() {
        let cards = make_cards(3);
        let store = MemoryStore::new(cards.clone());
        let mut session = ReviewSession::start(&store, cards);

        session.reveal();
        session.jump_to(2);

        assert_eq!(session.position(), 2);
        assert_eq!(session.display(), DisplayState::AwaitingReveal);
        session.reveal();
        assert_eq!(session.display(), DisplayState::Revealed);
    }

    #[test]
    fn jump_out_of_range_is_a_noop() {
        let cards = make_cards(2);
        let store = MemoryStore::new(cards.clone());
        let mut session = ReviewSession::start(&store, cards);

        session.jump_to(2);
        assert_eq!(session.position(), 0);
    }

    #[test]
    fn failed_write_still_advances_and_records() {
        let cards = make_cards(2);
        let store = MemoryStore::failing(cards.clone());
        let mut session = ReviewSession::start(&store, cards);

        let outcome = session.rate(Level::Known).unwrap();

        assert!(matches!(outcome.status, RateStatus::SaveFailed(_)));
        assert_eq!(session.position(), 1);
        assert_eq!(session.outcome_at(0), Some(Level::Known));
    }

    #[test]
    fn card_deleted_mid_session_is_skipped_unrated() {
        let cards = make_cards(3);
        let store = MemoryStore::new(cards.clone());
        let deleted_id = cards[1].id;
        let mut session = ReviewSession::start(&store, cards);

        session.rate(Level::Known).unwrap();
        store.remove(deleted_id);

        let outcome = session.rate(Level::Unsure).unwrap();
        assert!(matches!(outcome.status, RateStatus::CardMissing));
        assert_eq!(session.position(), 2);
        assert_eq!(session.outcome_at(1), None);

        let outcome = session.rate(Level::New).unwrap();
        let summary = outcome.summary.unwrap();
        assert_eq!(summary, SessionSummary { total: 3, rated: 2 });
    }

    #[test]
    fn exit_mid_session_keeps_only_committed_writes() {
        let cards = make_cards(3);
        let store = MemoryStore::new(cards.clone());
        let untouched: Vec<Uuid> = cards[1..].iter().map(|c| c.id).collect();
        let mut session = ReviewSession::start(&store, cards);

        session.rate(Level::Unsure).unwrap();
        let summary = session.exit();

        assert_eq!(summary, SessionSummary { total: 3, rated: 1 });
        assert_eq!(store.writes(), 1);
        for id in untouched {
            assert_eq!(store.get(id).review_count, 0);
        }
    }

    #[test]
    fn stats_track_per_level_outcomes() {
        let cards = make_cards(4);
        let store = MemoryStore::new(cards.clone());
        let mut session = ReviewSession::start(&store, cards);

        session.rate(Level::New).unwrap();
        session.rate(Level::Known).unwrap();
        session.rate(Level::Known).unwrap();

        let stats = session.stats();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.completed, 3);
        assert_eq!(stats.rated, 3);
        assert_eq!(stats.new, 1);
        assert_eq!(stats.unsure, 0);
        assert_eq!(stats.known, 2);
    }

    #[test]
    fn default_queue_scenario_leaves_capped_card_untouched() {
        // A(new), B(unsure), C(known at the cap): the default study set
        // is [A, B]; a full pass bumps A and B once and never touches C.
        let project_id = Uuid::new_v4();
        let a = Card::new(project_id, "A".into(), "a".into()).unwrap();
        let mut b = Card::new(project_id, "B".into(), "b".into()).unwrap();
        b.level = Level::Unsure;
        b.position = 1;
        let mut c = Card::new(project_id, "C".into(), "c".into()).unwrap();
        c.level = Level::Known;
        c.review_count = DEFAULT_KNOWN_REVIEW_CAP;
        c.position = 2;
        let (a_id, b_id, c_id) = (a.id, b.id, c.id);

        let store = MemoryStore::new(vec![a, b, c]);
        let deck = Deck::new(store.list_by_project(project_id).unwrap());
        let queue = deck.study_queue(DEFAULT_KNOWN_REVIEW_CAP);
        assert_eq!(queue.len(), 2);

        let mut session = ReviewSession::start(&store, queue);
        session.rate(Level::Known).unwrap();
        let outcome = session.rate(Level::Unsure).unwrap();
        assert_eq!(
            outcome.summary,
            Some(SessionSummary { total: 2, rated: 2 })
        );

        let a_after = store.get(a_id);
        assert_eq!(a_after.level, Level::Known);
        assert_eq!(a_after.review_count, 1);

        let b_after = store.get(b_id);
        assert_eq!(b_after.level, Level::Unsure);
        assert_eq!(b_after.review_count, 1);

        let c_after = store.get(c_id);
        assert_eq!(c_after.level, Level::Known);
        assert_eq!(c_after.review_count, DEFAULT_KNOWN_REVIEW_CAP);
        assert!(c_after.last_reviewed_at.is_none());

        // The capped card is still selectable explicitly
        assert_eq!(deck.select(StudyFilter::Known).len(), 1);
    }
}
