//! Flashcard collections for kartei
//!
//! This module provides:
//! - Card model, leveling labels and content validation
//! - Card storage (one JSON file per card) behind the `CardStore` seam
//! - Deck filtering and review-eligibility rules

pub mod models;
pub mod select;
pub mod storage;

pub use models::{Card, Level};
pub use select::{Deck, DeckCounts, StudyFilter, DEFAULT_KNOWN_REVIEW_CAP};
pub use storage::{CardStore, FileCardStore};
