//! Storage operations for projects
//!
//! All projects live in a single `projects.json`; each project's cards
//! and documents live in its own subtree under `projects/{project-id}/`.

use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use uuid::Uuid;

use super::models::Project;
use crate::storage::{Result, StoreError};

pub struct ProjectStorage {
    data_dir: PathBuf,
}

impl ProjectStorage {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    fn projects_file(&self) -> PathBuf {
        self.data_dir.join("projects.json")
    }

    fn project_dir(&self, project_id: Uuid) -> PathBuf {
        self.data_dir.join("projects").join(project_id.to_string())
    }

    /// Initialize the data directory and an empty project list
    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.data_dir)?;

        let path = self.projects_file();
        if !path.exists() {
            let empty: Vec<Project> = Vec::new();
            fs::write(&path, serde_json::to_string_pretty(&empty)?)?;
        }

        Ok(())
    }

    /// List all projects
    pub fn list_projects(&self) -> Result<Vec<Project>> {
        let path = self.projects_file();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)?;
        let projects: Vec<Project> = serde_json::from_str(&content)?;
        Ok(projects)
    }

    /// Get a specific project
    pub fn get_project(&self, project_id: Uuid) -> Result<Project> {
        let projects = self.list_projects()?;
        projects
            .into_iter()
            .find(|p| p.id == project_id)
            .ok_or(StoreError::ProjectNotFound(project_id))
    }

    /// Create a new project. The name must be non-blank after trimming.
    pub fn create_project(
        &self,
        name: String,
        description: Option<String>,
        color: Option<String>,
    ) -> Result<Project> {
        self.init()?;

        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(StoreError::Invalid(
                "project name must not be blank".to_string(),
            ));
        }

        let mut project = Project::new(name);
        project.description = description;
        project.color = color;

        let mut projects = self.list_projects()?;
        projects.push(project.clone());
        self.save_projects(&projects)?;

        Ok(project)
    }

    /// Rename a project
    pub fn rename_project(&self, project_id: Uuid, name: String) -> Result<Project> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(StoreError::Invalid(
                "project name must not be blank".to_string(),
            ));
        }

        let mut projects = self.list_projects()?;
        let project = projects
            .iter_mut()
            .find(|p| p.id == project_id)
            .ok_or(StoreError::ProjectNotFound(project_id))?;

        project.name = name;
        project.updated_at = Utc::now();
        let renamed = project.clone();
        self.save_projects(&projects)?;

        Ok(renamed)
    }

    /// Delete a project and its entire subtree (cards and documents)
    pub fn delete_project(&self, project_id: Uuid) -> Result<()> {
        let mut projects = self.list_projects()?;
        let len_before = projects.len();
        projects.retain(|p| p.id != project_id);

        if projects.len() == len_before {
            return Err(StoreError::ProjectNotFound(project_id));
        }

        self.save_projects(&projects)?;

        let dir = self.project_dir(project_id);
        if dir.exists() {
            fs::remove_dir_all(&dir)?;
        }
        log::info!("Deleted project {}", project_id);

        Ok(())
    }

    fn save_projects(&self, projects: &[Project]) -> Result<()> {
        fs::write(
            self.projects_file(),
            serde_json::to_string_pretty(projects)?,
        )?;
        Ok(())
    }
}
