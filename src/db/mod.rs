pub mod migrations;
pub mod schema;

use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::Path;

/// Open (or create) the journal database at the given path, with schema
/// initialized and migrations applied.
///
/// Connections are opened at the start of a command and dropped when it
/// returns — there is no shared handle.
pub fn open_database(path: impl AsRef<Path>) -> Result<Connection> {
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    let conn = Connection::open(path)
        .with_context(|| format!("failed to open database at {}", path.display()))?;

    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.pragma_update(None, "foreign_keys", "ON")?;

    schema::init_schema(&conn).context("failed to initialize schema")?;
    migrations::run_migrations(&conn).context("failed to run migrations")?;

    tracing::debug!(path = %path.display(), "database opened");
    Ok(conn)
}

/// Open an in-memory database for testing.
#[cfg(test)]
pub fn open_memory_database() -> Result<Connection> {
    let conn = Connection::open_in_memory().context("failed to open in-memory database")?;
    conn.pragma_update(None, "foreign_keys", "ON")?;
    schema::init_schema(&conn).context("failed to initialize schema")?;
    migrations::run_migrations(&conn).context("failed to run migrations")?;
    Ok(conn)
}

/// Result of [`check_database_health`].
#[derive(Debug)]
pub struct HealthReport {
    pub schema_version: u32,
    pub project_count: u64,
    pub learning_count: u64,
    /// Learnings whose `project_id` points at no existing project. Possible in
    /// databases written before foreign keys were enforced.
    pub orphaned_learnings: u64,
    pub integrity_ok: bool,
    pub integrity_details: String,
}

/// Run diagnostics against an open database.
pub fn check_database_health(conn: &Connection) -> Result<HealthReport> {
    let schema_version = migrations::get_schema_version(conn)?;

    let project_count: i64 =
        conn.query_row("SELECT COUNT(*) FROM projects", [], |row| row.get(0))?;
    let learning_count: i64 =
        conn.query_row("SELECT COUNT(*) FROM learnings", [], |row| row.get(0))?;
    let orphaned: i64 = conn.query_row(
        "SELECT COUNT(*) FROM learnings l WHERE l.project_id IS NOT NULL \
         AND NOT EXISTS (SELECT 1 FROM projects p WHERE p.id = l.project_id)",
        [],
        |row| row.get(0),
    )?;

    let integrity_details: String =
        conn.query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
    let integrity_ok = integrity_details == "ok";

    Ok(HealthReport {
        schema_version,
        project_count: project_count as u64,
        learning_count: learning_count as u64,
        orphaned_learnings: orphaned as u64,
        integrity_ok,
        integrity_details,
    })
}
