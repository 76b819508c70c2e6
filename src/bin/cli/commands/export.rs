use std::fs::File;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use kartei::export::write_csv;

use crate::app::App;

pub fn run(app: &App, project: &str, out: Option<&Path>) -> Result<()> {
    let project = app.find_project(project)?;
    let deck = app.load_deck(project.id);

    match out {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_csv(deck.cards(), file).context("Failed to write CSV")?;
            eprintln!(
                "Exported {} card(s) from '{}' to {}",
                deck.len(),
                project.name,
                path.display()
            );
        }
        None => {
            write_csv(deck.cards(), io::stdout().lock()).context("Failed to write CSV")?;
        }
    }

    Ok(())
}
