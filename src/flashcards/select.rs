//! Study-set selection and review-eligibility rules

use serde::Serialize;

use super::models::{Card, Level};

/// Known cards leave the default study rotation after this many reviews.
/// A policy threshold (overridable via config), not a spaced-repetition
/// interval model.
pub const DEFAULT_KNOWN_REVIEW_CAP: u32 = 5;

/// Which subset of a deck to study
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyFilter {
    All,
    New,
    Unsure,
    Known,
    Important,
}

/// A snapshot of one project's full card collection.
///
/// Selection is pure and synchronous; sessions study a copy of the
/// selected subset, so later deck edits never touch a running session.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Select a study subset. `Important` matches the flag regardless of
    /// level; the level filters match the level exactly.
    pub fn select(&self, filter: StudyFilter) -> Vec<Card> {
        self.cards
            .iter()
            .filter(|c| match filter {
                StudyFilter::All => true,
                StudyFilter::New => c.level == Level::New,
                StudyFilter::Unsure => c.level == Level::Unsure,
                StudyFilter::Known => c.level == Level::Known,
                StudyFilter::Important => c.important,
            })
            .cloned()
            .collect()
    }

    /// Default study queue: every card still in rotation, in stored order.
    pub fn study_queue(&self, known_review_cap: u32) -> Vec<Card> {
        self.cards
            .iter()
            .filter(|c| review_eligible(c, known_review_cap))
            .cloned()
            .collect()
    }

    /// Per-level tallies for stats displays
    pub fn counts(&self) -> DeckCounts {
        let mut counts = DeckCounts {
            total: self.cards.len(),
            ..DeckCounts::default()
        };
        for card in &self.cards {
            match card.level {
                Level::New => counts.new += 1,
                Level::Unsure => counts.unsure += 1,
                Level::Known => counts.known += 1,
            }
            if card.important {
                counts.important += 1;
            }
        }
        counts
    }
}

/// A card stays in the default rotation while it is not yet known, or
/// known for fewer than `cap` reviews. Capped cards are only out of the
/// default rotation; explicit filters still reach them.
pub fn review_eligible(card: &Card, cap: u32) -> bool {
    card.level != Level::Known || card.review_count < cap
}

/// Deck tallies for stats displays
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckCounts {
    pub total: usize,
    pub new: usize,
    pub unsure: usize,
    pub known: usize,
    pub important: usize,
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn card(front: &str, level: Level, review_count: u32, important: bool) -> Card {
        let mut card = Card::new(Uuid::new_v4(), front.into(), "back".into()).unwrap();
        card.level = level;
        card.review_count = review_count;
        card.important = important;
        card
    }

    fn sample_deck() -> Deck {
        Deck::new(vec![
            card("a", Level::New, 0, false),
            card("b", Level::Unsure, 2, true),
            card("c", Level::Known, 3, false),
            card("d", Level::Known, 5, true),
        ])
    }

    #[test]
    fn level_filters_match_exactly() {
        let deck = sample_deck();

        let fronts = |filter| -> Vec<String> {
            deck.select(filter).into_iter().map(|c| c.front).collect()
        };

        assert_eq!(fronts(StudyFilter::All), ["a", "b", "c", "d"]);
        assert_eq!(fronts(StudyFilter::New), ["a"]);
        assert_eq!(fronts(StudyFilter::Unsure), ["b"]);
        assert_eq!(fronts(StudyFilter::Known), ["c", "d"]);
    }

    #[test]
    fn important_filter_ignores_level() {
        let deck = sample_deck();
        let fronts: Vec<String> = deck
            .select(StudyFilter::Important)
            .into_iter()
            .map(|c| c.front)
            .collect();
        assert_eq!(fronts, ["b", "d"]);
    }

    #[test]
    fn known_cards_rotate_out_at_the_cap() {
        let below = card("x", Level::Known, DEFAULT_KNOWN_REVIEW_CAP - 1, false);
        let at_cap = card("y", Level::Known, DEFAULT_KNOWN_REVIEW_CAP, false);

        assert!(review_eligible(&below, DEFAULT_KNOWN_REVIEW_CAP));
        assert!(!review_eligible(&at_cap, DEFAULT_KNOWN_REVIEW_CAP));

        // Still present in the deck and selectable, just not in rotation
        let deck = Deck::new(vec![at_cap]);
        assert_eq!(deck.select(StudyFilter::Known).len(), 1);
        assert!(deck.study_queue(DEFAULT_KNOWN_REVIEW_CAP).is_empty());
    }

    #[test]
    fn unknown_cards_stay_eligible_past_the_cap() {
        let unsure = card("x", Level::Unsure, 40, false);
        assert!(review_eligible(&unsure, DEFAULT_KNOWN_REVIEW_CAP));
    }

    #[test]
    fn default_queue_keeps_stored_order() {
        let deck = sample_deck();
        let fronts: Vec<String> = deck
            .study_queue(DEFAULT_KNOWN_REVIEW_CAP)
            .into_iter()
            .map(|c| c.front)
            .collect();
        // "d" is known at the cap and drops out; the rest keep deck order
        assert_eq!(fronts, ["a", "b", "c"]);
    }

    #[test]
    fn counts_tally_levels_and_importance() {
        let counts = sample_deck().counts();

        assert_eq!(counts.total, 4);
        assert_eq!(counts.new, 1);
        assert_eq!(counts.unsure, 1);
        assert_eq!(counts.known, 2);
        assert_eq!(counts.important, 2);
    }
}
