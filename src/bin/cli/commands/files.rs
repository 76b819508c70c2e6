use std::path::Path;

use anyhow::{Context, Result};

use crate::app::App;
use crate::OutputFormat;

pub fn run_add(app: &App, project: &str, path: &Path) -> Result<()> {
    let project = app.find_project(project)?;
    let doc = app
        .uploads
        .ingest(project.id, path)
        .with_context(|| format!("Failed to ingest {}", path.display()))?;

    println!(
        "Added {} ({} KB) to '{}'",
        doc.original_filename,
        doc.size / 1024,
        project.name
    );
    Ok(())
}

pub fn run_list(app: &App, project: &str, format: &OutputFormat) -> Result<()> {
    let project = app.find_project(project)?;
    let docs = app
        .uploads
        .list_documents(project.id)
        .context("Failed to list documents")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&docs)?);
        }
        OutputFormat::Plain => {
            if docs.is_empty() {
                println!("No documents in '{}'.", project.name);
                return Ok(());
            }

            for doc in &docs {
                println!(
                    "{}  ({} KB, added {})",
                    doc.original_filename,
                    doc.size / 1024,
                    doc.added_at.format("%Y-%m-%d")
                );
            }
        }
    }

    Ok(())
}

pub fn run_rm(app: &App, project: &str, file: &str) -> Result<()> {
    let project = app.find_project(project)?;
    let doc = app.find_document(project.id, file)?;

    app.uploads
        .remove(project.id, doc.id)
        .context("Failed to remove document")?;

    println!("Removed {}", doc.original_filename);
    Ok(())
}
