use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, _use_color: bool) -> Result<()> {
    let projects = app.projects.list_projects()?;

    match format {
        OutputFormat::Json => {
            let mut output = Vec::new();
            for project in &projects {
                let counts = app.load_deck(project.id).counts();
                output.push(serde_json::json!({
                    "id": project.id.to_string(),
                    "name": project.name,
                    "description": project.description,
                    "counts": counts,
                }));
            }
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if projects.is_empty() {
                println!("No projects yet. Create one with: kartei project new <name>");
                return Ok(());
            }

            for project in &projects {
                let counts = app.load_deck(project.id).counts();
                println!("{} ({} cards)", project.name, counts.total);
                if let Some(ref description) = project.description {
                    println!("    {}", description);
                }
                println!(
                    "    new {}  unsure {}  known {}  important {}",
                    counts.new, counts.unsure, counts.known, counts.important
                );
            }
        }
    }

    Ok(())
}
