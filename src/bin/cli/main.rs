mod app;
mod commands;
#[cfg(feature = "tui")]
mod tui;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "kartei", about = "Flashcard study CLI and TUI", version)]
struct Cli {
    /// Use a specific data directory (default: platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

/// Study subset, as exposed on the command line
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum StudySetArg {
    All,
    New,
    Unsure,
    Known,
    Important,
}

impl From<StudySetArg> for kartei::flashcards::StudyFilter {
    fn from(arg: StudySetArg) -> Self {
        match arg {
            StudySetArg::All => Self::All,
            StudySetArg::New => Self::New,
            StudySetArg::Unsure => Self::Unsure,
            StudySetArg::Known => Self::Known,
            StudySetArg::Important => Self::Important,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// List all projects with card tallies
    List,

    /// Project management
    #[command(subcommand)]
    Project(ProjectCommand),

    /// List cards in a project
    Cards {
        /// Project name (case-insensitive prefix match)
        project: String,
        /// Show only cards at this level / with the important flag
        #[arg(long, value_enum)]
        filter: Option<StudySetArg>,
        /// Show only cards whose front or back contains this text
        #[arg(long)]
        query: Option<String>,
    },

    /// Card management
    #[command(subcommand)]
    Card(CardCommand),

    /// Study a project's cards
    Study {
        /// Project name (case-insensitive prefix match)
        project: String,
        /// Study subset (default: every card still in rotation)
        #[arg(long, value_enum)]
        set: Option<StudySetArg>,
        /// Shuffle the queue instead of stored order
        #[arg(long)]
        shuffle: bool,
        /// Line-mode review instead of the TUI
        #[arg(long)]
        plain: bool,
    },

    /// Show deck statistics for a project
    Stats {
        /// Project name (case-insensitive prefix match)
        project: String,
    },

    /// Export a project's cards as semicolon-delimited CSV
    Export {
        /// Project name (case-insensitive prefix match)
        project: String,
        /// Output file (default: stdout)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Attached document management
    #[command(subcommand)]
    File(FileCommand),
}

#[derive(Subcommand)]
enum ProjectCommand {
    /// Create a new project
    New {
        name: String,
        #[arg(long)]
        description: Option<String>,
        /// Accent color (hex or name, kept verbatim)
        #[arg(long)]
        color: Option<String>,
    },

    /// Rename a project
    Rename {
        /// Project name (case-insensitive prefix match)
        project: String,
        new_name: String,
    },

    /// Delete a project with all its cards and documents
    Rm {
        /// Project name (case-insensitive prefix match)
        project: String,
    },
}

#[derive(Subcommand)]
enum CardCommand {
    /// Add a card to a project
    Add {
        /// Project name (case-insensitive prefix match)
        project: String,
        /// Question side
        #[arg(long)]
        front: String,
        /// Answer side (use "-" to read from stdin)
        #[arg(long)]
        back: Option<String>,
    },

    /// Edit a card's text
    Edit {
        /// Project name (case-insensitive prefix match)
        project: String,
        /// Card front text or id (case-insensitive prefix match)
        card: String,
        #[arg(long)]
        front: Option<String>,
        /// New answer side (use "-" to read from stdin)
        #[arg(long)]
        back: Option<String>,
    },

    /// Delete a card
    Rm {
        /// Project name (case-insensitive prefix match)
        project: String,
        /// Card front text or id (case-insensitive prefix match)
        card: String,
    },

    /// Toggle a card's important flag
    Star {
        /// Project name (case-insensitive prefix match)
        project: String,
        /// Card front text or id (case-insensitive prefix match)
        card: String,
    },
}

#[derive(Subcommand)]
enum FileCommand {
    /// Copy a document into a project
    Add {
        /// Project name (case-insensitive prefix match)
        project: String,
        /// Source file path
        path: PathBuf,
    },

    /// List a project's documents
    List {
        /// Project name (case-insensitive prefix match)
        project: String,
    },

    /// Remove a document from a project
    Rm {
        /// Project name (case-insensitive prefix match)
        project: String,
        /// Document filename (case-insensitive prefix match)
        file: String,
    },
}

/// Read content from stdin if piped, or resolve "-" as stdin
fn resolve_content(content: Option<String>) -> Option<String> {
    match content.as_deref() {
        Some("-") => {
            // Explicit stdin read
            let mut buf = String::new();
            std::io::Read::read_to_string(&mut std::io::stdin(), &mut buf).ok();
            Some(buf)
        }
        Some(_) => content,
        None => {
            // Auto-detect piped stdin
            if !stdin_is_tty() {
                let mut buf = String::new();
                std::io::Read::read_to_string(&mut std::io::stdin(), &mut buf).ok();
                if buf.is_empty() {
                    None
                } else {
                    Some(buf)
                }
            } else {
                None
            }
        }
    }
}

/// Check if stdin is a terminal (not piped)
fn stdin_is_tty() -> bool {
    unsafe { libc_isatty(0) != 0 }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && atty_check();

    match cli.command {
        None | Some(Command::List) => {
            let app = app::App::new(cli.data_dir)?;
            commands::list::run(&app, &cli.format, use_color)?;
        }
        Some(Command::Project(subcmd)) => {
            let app = app::App::new(cli.data_dir)?;
            match subcmd {
                ProjectCommand::New {
                    name,
                    description,
                    color,
                } => {
                    commands::projects::run_new(&app, &name, description, color, &cli.format)?;
                }
                ProjectCommand::Rename { project, new_name } => {
                    commands::projects::run_rename(&app, &project, &new_name)?;
                }
                ProjectCommand::Rm { project } => {
                    commands::projects::run_rm(&app, &project)?;
                }
            }
        }
        Some(Command::Cards {
            project,
            filter,
            query,
        }) => {
            let app = app::App::new(cli.data_dir)?;
            commands::cards::run_list(
                &app,
                &project,
                filter.map(Into::into),
                query.as_deref(),
                &cli.format,
                use_color,
            )?;
        }
        Some(Command::Card(subcmd)) => {
            let app = app::App::new(cli.data_dir)?;
            match subcmd {
                CardCommand::Add {
                    project,
                    front,
                    back,
                } => {
                    let back = resolve_content(back);
                    commands::cards::run_add(&app, &project, front, back)?;
                }
                CardCommand::Edit {
                    project,
                    card,
                    front,
                    back,
                } => {
                    let back = resolve_content(back);
                    commands::cards::run_edit(&app, &project, &card, front, back)?;
                }
                CardCommand::Rm { project, card } => {
                    commands::cards::run_rm(&app, &project, &card)?;
                }
                CardCommand::Star { project, card } => {
                    commands::cards::run_star(&app, &project, &card)?;
                }
            }
        }
        Some(Command::Study {
            project,
            set,
            shuffle,
            plain,
        }) => {
            let app = app::App::new(cli.data_dir)?;
            commands::study::run(&app, &project, set, shuffle, plain)?;
        }
        Some(Command::Stats { project }) => {
            let app = app::App::new(cli.data_dir)?;
            commands::stats::run(&app, &project, &cli.format)?;
        }
        Some(Command::Export { project, out }) => {
            let app = app::App::new(cli.data_dir)?;
            commands::export::run(&app, &project, out.as_deref())?;
        }
        Some(Command::File(subcmd)) => {
            let app = app::App::new(cli.data_dir)?;
            match subcmd {
                FileCommand::Add { project, path } => {
                    commands::files::run_add(&app, &project, &path)?;
                }
                FileCommand::List { project } => {
                    commands::files::run_list(&app, &project, &cli.format)?;
                }
                FileCommand::Rm { project, file } => {
                    commands::files::run_rm(&app, &project, &file)?;
                }
            }
        }
    }

    Ok(())
}

/// Check if stdout is a terminal (for color support)
fn atty_check() -> bool {
    unsafe { libc_isatty(1) != 0 }
}

extern "C" {
    #[link_name = "isatty"]
    fn libc_isatty(fd: i32) -> i32;
}
