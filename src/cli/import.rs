use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use serde::Deserialize;
use std::path::Path;

use crate::config::DevlogConfig;
use crate::journal::types::{Learning, Project};

/// Import format — matches export output.
#[derive(Debug, Deserialize)]
struct ImportData {
    projects: Vec<Project>,
    #[serde(default)]
    learnings: Vec<Learning>,
}

/// Import a journal from an export JSON file.
///
/// Rows are inserted with their original ids so learnings keep pointing at
/// their projects; rows whose id already exists are skipped.
pub fn import(config: &DevlogConfig, file: &Path) -> Result<()> {
    let json = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read import file: {}", file.display()))?;

    let data: ImportData =
        serde_json::from_str(&json).context("failed to parse import JSON")?;

    let conn = crate::db::open_database(config.resolved_db_path())?;

    println!(
        "Importing {} project(s) and {} learning(s)...",
        data.projects.len(),
        data.learnings.len()
    );

    let mut projects_imported = 0u64;
    let mut projects_skipped = 0u64;
    for p in &data.projects {
        if row_exists(&conn, "projects", p.id)? {
            projects_skipped += 1;
            continue;
        }
        conn.execute(
            "INSERT INTO projects (id, name, context, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![p.id, p.name, p.context, p.created_at, p.updated_at],
        )?;
        projects_imported += 1;
    }

    let mut learnings_imported = 0u64;
    let mut learnings_skipped = 0u64;
    for l in &data.learnings {
        if row_exists(&conn, "learnings", l.id)? {
            learnings_skipped += 1;
            continue;
        }
        conn.execute(
            "INSERT INTO learnings (id, challenge, solution, learning_type, project_id, \
             created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                l.id,
                l.challenge,
                l.solution,
                l.learning_type.as_str(),
                l.project_id,
                l.created_at,
                l.updated_at,
            ],
        )?;
        learnings_imported += 1;
    }

    println!(
        "Imported {projects_imported} project(s) ({projects_skipped} skipped), \
         {learnings_imported} learning(s) ({learnings_skipped} skipped)."
    );
    Ok(())
}

fn row_exists(conn: &Connection, table: &str, id: i64) -> Result<bool> {
    let exists: bool = conn.query_row(
        &format!("SELECT COUNT(*) > 0 FROM {table} WHERE id = ?1"),
        params![id],
        |row| row.get(0),
    )?;
    Ok(exists)
}
