//! Storage operations for flashcards
//!
//! Directory structure per project:
//! ```text
//! projects/{project-id}/
//! └── cards/
//!     └── {card-id}.json   # Individual card files
//! ```

use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use uuid::Uuid;

use super::models::{validated_side, Card, Level};
use crate::storage::{Result, StoreError};

/// The persistence seam consumed by review sessions and deck loading.
///
/// Implementations must treat `set_level` as a single, at-most-once
/// write: set the level, increment the review count by exactly one and
/// stamp the review time.
pub trait CardStore {
    /// All cards of a project in stored (insertion) order.
    fn list_by_project(&self, project_id: Uuid) -> Result<Vec<Card>>;

    /// Persist a level change for one card.
    fn set_level(&self, project_id: Uuid, card_id: Uuid, level: Level) -> Result<Card>;
}

/// Card storage backed by one JSON file per card
pub struct FileCardStore {
    data_dir: PathBuf,
}

impl FileCardStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    fn cards_dir(&self, project_id: Uuid) -> PathBuf {
        self.data_dir
            .join("projects")
            .join(project_id.to_string())
            .join("cards")
    }

    fn card_path(&self, project_id: Uuid, card_id: Uuid) -> PathBuf {
        self.cards_dir(project_id).join(format!("{}.json", card_id))
    }

    fn write_card(&self, card: &Card) -> Result<()> {
        let path = self.card_path(card.project_id, card.id);
        fs::write(path, serde_json::to_string_pretty(card)?)?;
        Ok(())
    }

    /// Get a specific card
    pub fn get_card(&self, project_id: Uuid, card_id: Uuid) -> Result<Card> {
        let path = self.card_path(project_id, card_id);
        if !path.exists() {
            return Err(StoreError::CardNotFound(card_id));
        }

        let content = fs::read_to_string(&path)?;
        let card: Card = serde_json::from_str(&content)?;
        Ok(card)
    }

    /// Create a new card at the end of the project's stored order
    pub fn create_card(&self, project_id: Uuid, front: String, back: String) -> Result<Card> {
        fs::create_dir_all(self.cards_dir(project_id))?;

        let existing = self.list_by_project(project_id)?;
        let mut card = Card::new(project_id, front, back)?;
        card.position = existing.len() as i32;

        self.write_card(&card)?;
        Ok(card)
    }

    /// Update front/back text. Omitted sides keep their current text.
    pub fn update_content(
        &self,
        project_id: Uuid,
        card_id: Uuid,
        front: Option<String>,
        back: Option<String>,
    ) -> Result<Card> {
        let mut card = self.get_card(project_id, card_id)?;

        if let Some(front) = front {
            card.front = validated_side("front", front)?;
        }
        if let Some(back) = back {
            card.back = validated_side("back", back)?;
        }
        card.updated_at = Utc::now();

        self.write_card(&card)?;
        Ok(card)
    }

    /// Flip the important flag. Independent of the rating protocol.
    pub fn toggle_important(&self, project_id: Uuid, card_id: Uuid) -> Result<Card> {
        let mut card = self.get_card(project_id, card_id)?;
        card.important = !card.important;
        card.updated_at = Utc::now();

        self.write_card(&card)?;
        Ok(card)
    }

    /// Delete a card
    pub fn delete_card(&self, project_id: Uuid, card_id: Uuid) -> Result<()> {
        let path = self.card_path(project_id, card_id);
        if !path.exists() {
            return Err(StoreError::CardNotFound(card_id));
        }

        fs::remove_file(path)?;
        Ok(())
    }
}

impl CardStore for FileCardStore {
    fn list_by_project(&self, project_id: Uuid) -> Result<Vec<Card>> {
        let cards_dir = self.cards_dir(project_id);
        if !cards_dir.exists() {
            return Ok(Vec::new());
        }

        let mut cards = Vec::new();
        for entry in fs::read_dir(&cards_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().map_or(false, |ext| ext == "json") {
                let content = fs::read_to_string(&path)?;
                let card: Card = serde_json::from_str(&content)?;
                cards.push(card);
            }
        }

        cards.sort_by(|a, b| a.position.cmp(&b.position));
        Ok(cards)
    }

    fn set_level(&self, project_id: Uuid, card_id: Uuid, level: Level) -> Result<Card> {
        let mut card = self.get_card(project_id, card_id)?;
        let now = Utc::now();

        card.level = level;
        card.review_count += 1;
        card.last_reviewed_at = Some(now);
        card.updated_at = now;

        self.write_card(&card)?;
        Ok(card)
    }
}
