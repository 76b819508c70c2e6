use anyhow::{Context, Result};

use crate::app::App;
use crate::OutputFormat;

pub fn run_new(
    app: &App,
    name: &str,
    description: Option<String>,
    color: Option<String>,
    format: &OutputFormat,
) -> Result<()> {
    let project = app
        .projects
        .create_project(name.to_string(), description, color)
        .context("Failed to create project")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&project)?);
        }
        OutputFormat::Plain => {
            println!("Created project '{}' ({})", project.name, project.id);
        }
    }

    Ok(())
}

pub fn run_rename(app: &App, project: &str, new_name: &str) -> Result<()> {
    let project = app.find_project(project)?;
    let renamed = app
        .projects
        .rename_project(project.id, new_name.to_string())
        .context("Failed to rename project")?;

    println!("Renamed '{}' to '{}'", project.name, renamed.name);
    Ok(())
}

pub fn run_rm(app: &App, project: &str) -> Result<()> {
    let project = app.find_project(project)?;
    let counts = app.load_deck(project.id).counts();

    app.projects
        .delete_project(project.id)
        .context("Failed to delete project")?;

    println!(
        "Deleted project '{}' and its {} cards",
        project.name, counts.total
    );
    Ok(())
}
