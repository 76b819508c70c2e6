use anyhow::{bail, Context, Result};

use kartei::flashcards::{Card, Level, StudyFilter};

use crate::app::App;
use crate::OutputFormat;

pub fn run_list(
    app: &App,
    project: &str,
    filter: Option<StudyFilter>,
    query: Option<&str>,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let project = app.find_project(project)?;
    let deck = app.load_deck(project.id);

    let mut cards = deck.select(filter.unwrap_or(StudyFilter::All));
    if let Some(query) = query {
        let q = query.to_lowercase();
        cards.retain(|c| {
            c.front.to_lowercase().contains(&q) || c.back.to_lowercase().contains(&q)
        });
    }

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&cards)?);
        }
        OutputFormat::Plain => {
            if cards.is_empty() {
                println!("No matching cards in '{}'.", project.name);
                return Ok(());
            }

            for card in &cards {
                let star = if card.important { " ★" } else { "" };
                println!(
                    "[{}] ↻{}{}  {}",
                    level_chip(card, use_color),
                    card.review_count,
                    star,
                    card.front
                );
                println!("    {}", card.back);
            }
            println!("{} card(s)", cards.len());
        }
    }

    Ok(())
}

pub fn run_add(app: &App, project: &str, front: String, back: Option<String>) -> Result<()> {
    let project = app.find_project(project)?;
    let Some(back) = back else {
        bail!("No answer side given. Pass --back or pipe it on stdin.");
    };

    let card = app
        .cards
        .create_card(project.id, front, back)
        .context("Failed to create card")?;

    println!("Added card '{}' to '{}'", card.front, project.name);
    Ok(())
}

pub fn run_edit(
    app: &App,
    project: &str,
    card: &str,
    front: Option<String>,
    back: Option<String>,
) -> Result<()> {
    let project = app.find_project(project)?;
    let card = app.find_card(project.id, card)?;

    if front.is_none() && back.is_none() {
        bail!("Nothing to change. Pass --front and/or --back.");
    }

    let updated = app
        .cards
        .update_content(project.id, card.id, front, back)
        .context("Failed to update card")?;

    println!("Updated card '{}'", updated.front);
    Ok(())
}

pub fn run_rm(app: &App, project: &str, card: &str) -> Result<()> {
    let project = app.find_project(project)?;
    let card = app.find_card(project.id, card)?;

    app.cards
        .delete_card(project.id, card.id)
        .context("Failed to delete card")?;

    println!("Deleted card '{}'", card.front);
    Ok(())
}

pub fn run_star(app: &App, project: &str, card: &str) -> Result<()> {
    let project = app.find_project(project)?;
    let card = app.find_card(project.id, card)?;

    let updated = app
        .cards
        .toggle_important(project.id, card.id)
        .context("Failed to update card")?;

    if updated.important {
        println!("Marked '{}' as important", updated.front);
    } else {
        println!("Unmarked '{}'", updated.front);
    }
    Ok(())
}

fn level_chip(card: &Card, use_color: bool) -> String {
    if !use_color {
        return card.level.as_str().to_string();
    }

    // Cyan / yellow / green, the palette the study views use
    let code = match card.level {
        Level::New => 36,
        Level::Unsure => 33,
        Level::Known => 32,
    };
    format!("\x1b[{}m{}\x1b[0m", code, card.level.as_str())
}
