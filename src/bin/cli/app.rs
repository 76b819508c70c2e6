use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use uuid::Uuid;

use kartei::config::Config;
use kartei::flashcards::{Card, CardStore, Deck, FileCardStore};
use kartei::projects::{Project, ProjectStorage};
use kartei::storage;
use kartei::uploads::{StoredDocument, UploadStorage};

/// Shared application state for CLI commands
pub struct App {
    pub data_dir: PathBuf,
    pub config: Config,
    pub projects: ProjectStorage,
    pub cards: FileCardStore,
    pub uploads: UploadStorage,
}

impl App {
    /// Initialize from an explicit or the default data directory
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => storage::default_data_dir().context("Failed to resolve data directory")?,
        };

        let projects = ProjectStorage::new(data_dir.clone());
        projects
            .init()
            .context("Failed to initialize project storage")?;

        let config = Config::load(&data_dir);
        let cards = FileCardStore::new(data_dir.clone());
        let uploads = UploadStorage::new(data_dir.clone());

        Ok(Self {
            data_dir,
            config,
            projects,
            cards,
            uploads,
        })
    }

    /// Find a project by name (case-insensitive prefix match)
    pub fn find_project(&self, name: &str) -> Result<Project> {
        let projects = self
            .projects
            .list_projects()
            .context("Failed to list projects")?;

        let name_lower = name.to_lowercase();

        // Exact match first
        if let Some(p) = projects
            .iter()
            .find(|p| p.name.to_lowercase() == name_lower)
        {
            return Ok(p.clone());
        }

        // Prefix match
        let matches: Vec<&Project> = projects
            .iter()
            .filter(|p| p.name.to_lowercase().starts_with(&name_lower))
            .collect();

        match matches.len() {
            0 => bail!(
                "No project matching '{}'. Available projects:\n{}",
                name,
                projects
                    .iter()
                    .map(|p| format!("  - {}", p.name))
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
            1 => Ok(matches[0].clone()),
            _ => bail!(
                "Ambiguous project name '{}'. Matches:\n{}",
                name,
                matches
                    .iter()
                    .map(|p| format!("  - {}", p.name))
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
        }
    }

    /// Load a project's deck. Storage failure reads as an empty deck
    /// rather than stale data.
    pub fn load_deck(&self, project_id: Uuid) -> Deck {
        match self.cards.list_by_project(project_id) {
            Ok(cards) => Deck::new(cards),
            Err(err) => {
                log::warn!(
                    "Could not read cards for project {}: {}; treating deck as empty",
                    project_id,
                    err
                );
                Deck::new(Vec::new())
            }
        }
    }

    /// Find a card by front text or id (case-insensitive prefix match)
    pub fn find_card(&self, project_id: Uuid, needle: &str) -> Result<Card> {
        let cards = self
            .cards
            .list_by_project(project_id)
            .context("Failed to list cards")?;

        let needle_lower = needle.to_lowercase();

        // Exact front match first
        if let Some(c) = cards
            .iter()
            .find(|c| c.front.to_lowercase() == needle_lower)
        {
            return Ok(c.clone());
        }

        // Prefix match on front text or id
        let matches: Vec<&Card> = cards
            .iter()
            .filter(|c| {
                c.front.to_lowercase().starts_with(&needle_lower)
                    || c.id.to_string().starts_with(&needle_lower)
            })
            .collect();

        match matches.len() {
            0 => bail!("No card matching '{}' in project", needle),
            1 => Ok(matches[0].clone()),
            _ => bail!(
                "Ambiguous card '{}'. Matches:\n{}",
                needle,
                matches
                    .iter()
                    .map(|c| format!("  - {}  ({})", c.front, c.id))
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
        }
    }

    /// Find an attached document by filename (case-insensitive prefix match)
    pub fn find_document(&self, project_id: Uuid, needle: &str) -> Result<StoredDocument> {
        let docs = self
            .uploads
            .list_documents(project_id)
            .context("Failed to list documents")?;

        let needle_lower = needle.to_lowercase();

        if let Some(d) = docs
            .iter()
            .find(|d| d.original_filename.to_lowercase() == needle_lower)
        {
            return Ok(d.clone());
        }

        let matches: Vec<&StoredDocument> = docs
            .iter()
            .filter(|d| {
                d.original_filename
                    .to_lowercase()
                    .starts_with(&needle_lower)
            })
            .collect();

        match matches.len() {
            0 => bail!("No document matching '{}' in project", needle),
            1 => Ok(matches[0].clone()),
            _ => bail!(
                "Ambiguous document '{}'. Matches:\n{}",
                needle,
                matches
                    .iter()
                    .map(|d| format!("  - {}", d.original_filename))
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
        }
    }
}
