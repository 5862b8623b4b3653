use anyhow::Result;
use serde::Serialize;

use crate::config::DevlogConfig;
use crate::journal::types::{Learning, Project};

/// Export format — wraps all projects and learnings.
#[derive(Debug, Serialize)]
struct ExportData {
    projects: Vec<Project>,
    learnings: Vec<Learning>,
}

/// Export the whole journal as JSON to stdout.
///
/// The summary goes to stderr so the JSON can be piped to a file.
pub fn export(config: &DevlogConfig) -> Result<()> {
    let conn = crate::db::open_database(config.resolved_db_path())?;

    let projects = crate::journal::project::list(&conn)?;
    let learnings = crate::journal::learning::list(&conn, None)?;

    let data = ExportData {
        projects,
        learnings,
    };

    let json = serde_json::to_string_pretty(&data)?;
    println!("{json}");

    eprintln!(
        "Exported {} project(s) and {} learning(s).",
        data.projects.len(),
        data.learnings.len()
    );
    Ok(())
}
