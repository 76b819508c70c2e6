use std::io::{self, BufRead, Write};

use anyhow::Result;
use rand::seq::SliceRandom;

use kartei::flashcards::{Card, Level};
use kartei::review::{RateStatus, ReviewSession, SessionSummary};

use crate::app::App;
use crate::StudySetArg;

pub fn run(
    app: &App,
    project: &str,
    set: Option<StudySetArg>,
    shuffle: bool,
    plain: bool,
) -> Result<()> {
    let project = app.find_project(project)?;
    let deck = app.load_deck(project.id);

    let mut queue = match set {
        // No explicit set: everything still in rotation
        None => deck.study_queue(app.config.study.known_review_cap),
        Some(set) => deck.select(set.into()),
    };
    if shuffle {
        queue.shuffle(&mut rand::thread_rng());
    }

    if queue.is_empty() {
        println!("Nothing to study in '{}'.", project.name);
        return Ok(());
    }

    #[cfg(feature = "tui")]
    if !plain {
        let summary = crate::tui::run_study(app, &project.name, queue)?;
        print_summary(&summary);
        return Ok(());
    }
    #[cfg(not(feature = "tui"))]
    let _ = plain;

    let summary = run_plain(app, &project.name, queue)?;
    print_summary(&summary);
    Ok(())
}

/// Line-mode review loop; drives the same session object as the TUI
fn run_plain(app: &App, project_name: &str, queue: Vec<Card>) -> Result<SessionSummary> {
    let mut session = ReviewSession::start(&app.cards, queue);
    let stdin = io::stdin();

    println!(
        "Studying '{}' — {} card(s). Enter flips, n/u/k rates, b goes back, q quits.",
        project_name,
        session.queue().len()
    );

    while let Some(card) = session.current_card() {
        println!();
        println!(
            "[{}/{}] {}",
            session.position() + 1,
            session.queue().len(),
            card.front
        );
        if session.is_revealed() {
            println!("    → {}", card.back);
        }
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            "" | "f" => session.reveal(),
            "n" => apply(&mut session, Level::New),
            "u" => apply(&mut session, Level::Unsure),
            "k" => apply(&mut session, Level::Known),
            "b" => session.go_back(),
            "q" => break,
            other => println!("Unknown input '{}' (Enter, n, u, k, b or q)", other),
        }
    }

    Ok(session.exit())
}

fn apply(session: &mut ReviewSession, level: Level) {
    let Some(outcome) = session.rate(level) else {
        return;
    };
    match outcome.status {
        RateStatus::Saved(_) => {}
        RateStatus::SaveFailed(err) => {
            eprintln!("Warning: level change may not have saved ({})", err);
        }
        RateStatus::CardMissing => {
            eprintln!("Card was deleted elsewhere; skipped.");
        }
    }
}

fn print_summary(summary: &SessionSummary) {
    println!(
        "Session over: {} of {} card(s) rated.",
        summary.rated, summary.total
    );
}
