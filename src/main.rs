mod cli;
mod config;
mod db;
mod editor;
mod journal;
mod template;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "devlog", version, about = "Personal engineering journal")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Manage projects
    Projects {
        #[command(subcommand)]
        action: ProjectAction,
    },
    /// Manage learnings
    Learnings {
        #[command(subcommand)]
        action: LearningAction,
    },
    /// Show journal statistics
    Stats,
    /// Export the whole journal as JSON to stdout
    Export,
    /// Import a journal from an export JSON file
    Import { file: PathBuf },
    /// Delete all records after confirmation
    Reset,
    /// Run database diagnostics
    Doctor,
}

#[derive(Subcommand)]
enum ProjectAction {
    /// Create a new project in your editor
    Create,
    /// Re-edit an existing project
    Update { id: i64 },
    /// Show one project with its learnings
    Show { id: i64 },
    /// List all projects
    List,
}

#[derive(Subcommand)]
enum LearningAction {
    /// Record a new learning in your editor
    Create {
        /// Attach the learning to a project
        #[arg(long)]
        project_id: Option<i64>,
    },
    /// Re-edit an existing learning
    Update { id: i64 },
    /// Show one learning in full
    Show { id: i64 },
    /// List learnings
    List {
        /// Only learnings attached to this project
        #[arg(long)]
        project_id: Option<i64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config (for log level)
    let config = config::DevlogConfig::load()?;

    // Initialize tracing with the configured log level.
    // Log to stderr so stdout stays clean for command output and export JSON.
    let filter = EnvFilter::try_new(&config.log.level)
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Projects { action } => match action {
            ProjectAction::Create => cli::project::create(&config)?,
            ProjectAction::Update { id } => cli::project::update(&config, id)?,
            ProjectAction::Show { id } => cli::project::show(&config, id)?,
            ProjectAction::List => cli::project::list(&config)?,
        },
        Command::Learnings { action } => match action {
            LearningAction::Create { project_id } => cli::learning::create(&config, project_id)?,
            LearningAction::Update { id } => cli::learning::update(&config, id)?,
            LearningAction::Show { id } => cli::learning::show(&config, id)?,
            LearningAction::List { project_id } => cli::learning::list(&config, project_id)?,
        },
        Command::Stats => cli::stats::stats(&config)?,
        Command::Export => cli::export::export(&config)?,
        Command::Import { file } => cli::import::import(&config, &file)?,
        Command::Reset => cli::reset::reset(&config)?,
        Command::Doctor => cli::doctor::doctor(&config)?,
    }

    Ok(())
}
