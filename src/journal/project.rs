//! Project records — templates, field validation, and persistence.
//!
//! [`build_input`] is the record builder: it parses an edited template and
//! validates the required fields, returning a typed [`JournalError`] for
//! anything the user got wrong. The persistence functions below it take an
//! explicit connection and map rows to [`Project`].

use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::journal::error::JournalError;
use crate::journal::types::Project;
use crate::template;

/// Field names extracted from an edited project template.
pub const TEMPLATE_FIELDS: &[&str] = &["name", "context"];

/// Validated field values for a project create or update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInput {
    pub name: String,
    pub context: String,
}

/// Template presented when creating a new project.
pub fn blank_template() -> String {
    template::render(&[("Name", ""), ("Context", "")])
}

/// Template pre-filled with an existing project for the update flow.
pub fn filled_template(project: &Project) -> String {
    template::render(&[("Name", &project.name), ("Context", &project.context)])
}

/// Parse an edited template and validate the required fields.
///
/// A field the user deleted and a field left blank are both rejected — a
/// project needs a name and a context.
pub fn build_input(content: &str) -> Result<ProjectInput, JournalError> {
    let fields = template::parse(content, TEMPLATE_FIELDS);

    let name = match fields.get("name") {
        Some(v) if !v.is_empty() => v.clone(),
        _ => return Err(JournalError::MissingName),
    };
    let context = match fields.get("context") {
        Some(v) if !v.is_empty() => v.clone(),
        _ => return Err(JournalError::MissingContext),
    };

    Ok(ProjectInput { name, context })
}

/// Insert a new project. A duplicate name violates UNIQUE(name) and
/// propagates as a constraint error.
pub fn create(conn: &Connection, input: &ProjectInput) -> Result<Project> {
    let now = chrono::Utc::now().to_rfc3339();
    conn.execute(
        "INSERT INTO projects (name, context, created_at, updated_at) VALUES (?1, ?2, ?3, ?3)",
        params![input.name, input.context, now],
    )?;
    let id = conn.last_insert_rowid();
    tracing::info!(id, name = %input.name, "project created");

    Ok(Project {
        id,
        name: input.name.clone(),
        context: input.context.clone(),
        created_at: now.clone(),
        updated_at: now,
    })
}

/// Overwrite an existing project's fields.
pub fn update(conn: &Connection, id: i64, input: &ProjectInput) -> Result<()> {
    let now = chrono::Utc::now().to_rfc3339();
    let rows = conn.execute(
        "UPDATE projects SET name = ?1, context = ?2, updated_at = ?3 WHERE id = ?4",
        params![input.name, input.context, now, id],
    )?;
    if rows == 0 {
        return Err(JournalError::ProjectNotFound(id).into());
    }
    tracing::info!(id, "project updated");
    Ok(())
}

/// Fetch a single project by id.
pub fn get(conn: &Connection, id: i64) -> Result<Option<Project>> {
    let project = conn
        .query_row(
            "SELECT id, name, context, created_at, updated_at FROM projects WHERE id = ?1",
            params![id],
            row_to_project,
        )
        .optional()?;
    Ok(project)
}

/// All projects in creation order.
pub fn list(conn: &Connection) -> Result<Vec<Project>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, context, created_at, updated_at FROM projects ORDER BY created_at, id",
    )?;
    let projects = stmt
        .query_map([], row_to_project)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(projects)
}

fn row_to_project(row: &Row) -> rusqlite::Result<Project> {
    Ok(Project {
        id: row.get(0)?,
        name: row.get(1)?,
        context: row.get(2)?,
        created_at: row.get(3)?,
        updated_at: row.get(4)?,
    })
}
