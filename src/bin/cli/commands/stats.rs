use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, project: &str, format: &OutputFormat) -> Result<()> {
    let project = app.find_project(project)?;
    let deck = app.load_deck(project.id);
    let counts = deck.counts();
    let cap = app.config.study.known_review_cap;
    let in_rotation = deck.study_queue(cap).len();

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "project": project.name,
                    "counts": counts,
                    "inRotation": in_rotation,
                    "knownReviewCap": cap,
                }))?
            );
        }
        OutputFormat::Plain => {
            println!("{}", project.name);
            println!("  total      {}", counts.total);
            println!("  new        {}", counts.new);
            println!("  unsure     {}", counts.unsure);
            println!("  known      {}", counts.known);
            println!("  important  {}", counts.important);
            println!(
                "  in default rotation: {} (known cards rest after {} reviews)",
                in_rotation, cap
            );
        }
    }

    Ok(())
}
