//! Data models for flashcards

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::storage::{Result, StoreError};

/// Self-assessment label on a card. A label, not a scheduling priority:
/// the three levels are unordered peers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Level {
    /// Not yet learned
    New,
    /// Seen, but shaky
    Unsure,
    /// Confidently known
    Known,
}

impl Default for Level {
    fn default() -> Self {
        Self::New
    }
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Unsure => "unsure",
            Self::Known => "known",
        }
    }
}

/// A flashcard with question (front) and answer (back)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: Uuid,
    pub project_id: Uuid,
    pub front: String,
    pub back: String,
    #[serde(default)]
    pub level: Level,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub important: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_reviewed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Card {
    /// Create a card. Both sides must be non-blank after trimming.
    pub fn new(project_id: Uuid, front: String, back: String) -> Result<Self> {
        let front = validated_side("front", front)?;
        let back = validated_side("back", back)?;
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            project_id,
            front,
            back,
            level: Level::default(),
            review_count: 0,
            important: false,
            last_reviewed_at: None,
            position: 0,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Trim a card side and reject blank text
pub(crate) fn validated_side(side: &str, text: String) -> Result<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(StoreError::Invalid(format!(
            "card {} must not be blank",
            side
        )));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_card_starts_unreviewed() {
        let card = Card::new(Uuid::new_v4(), "Q".into(), "A".into()).unwrap();

        assert_eq!(card.level, Level::New);
        assert_eq!(card.review_count, 0);
        assert!(card.last_reviewed_at.is_none());
        assert!(!card.important);
    }

    #[test]
    fn blank_sides_are_rejected() {
        let project_id = Uuid::new_v4();

        assert!(Card::new(project_id, "   ".into(), "A".into()).is_err());
        assert!(Card::new(project_id, "Q".into(), "\n\t".into()).is_err());
    }

    #[test]
    fn sides_are_trimmed() {
        let card = Card::new(Uuid::new_v4(), "  Q  ".into(), " A\n".into()).unwrap();

        assert_eq!(card.front, "Q");
        assert_eq!(card.back, "A");
    }
}
