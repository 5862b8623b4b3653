//! Learning records — templates, field validation, and persistence.
//!
//! A learning is a challenge/solution pair with a soft/hard classification,
//! optionally attached to a project. The update template carries a
//! `Project id:` section so the attachment can be changed from the editor;
//! the create flow takes the project from the command line instead.

use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::journal::error::JournalError;
use crate::journal::types::{Learning, LearningType};
use crate::template;

/// Field names extracted from an edited learning template.
pub const TEMPLATE_FIELDS: &[&str] = &["challenge", "solution", "type", "project_id"];

/// Validated field values for a learning create or update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearningInput {
    pub challenge: String,
    pub solution: String,
    pub learning_type: LearningType,
    pub project_id: Option<i64>,
}

/// Template presented when creating a new learning.
pub fn blank_template() -> String {
    template::render(&[("Challenge", ""), ("Solution", ""), ("Type", "")])
}

/// Template pre-filled with an existing learning for the update flow.
pub fn filled_template(learning: &Learning) -> String {
    let project_id = learning
        .project_id
        .map(|id| id.to_string())
        .unwrap_or_default();
    template::render(&[
        ("Challenge", &learning.challenge),
        ("Solution", &learning.solution),
        ("Type", learning.learning_type.as_str()),
        ("Project id", &project_id),
    ])
}

/// Parse an edited template and validate the fields.
///
/// Challenge and solution must be present and non-empty; the type must name a
/// [`LearningType`] (case-insensitive). `Project id` is optional — missing or
/// blank detaches the learning, anything else must parse as an integer.
pub fn build_input(content: &str) -> Result<LearningInput, JournalError> {
    let fields = template::parse(content, TEMPLATE_FIELDS);

    let challenge = match fields.get("challenge") {
        Some(v) if !v.is_empty() => v.clone(),
        _ => return Err(JournalError::MissingChallenge),
    };
    let solution = match fields.get("solution") {
        Some(v) if !v.is_empty() => v.clone(),
        _ => return Err(JournalError::MissingSolution),
    };
    let learning_type = match fields.get("type") {
        Some(v) if !v.is_empty() => v
            .parse::<LearningType>()
            .map_err(|_| JournalError::InvalidType(v.clone()))?,
        _ => return Err(JournalError::MissingType),
    };
    let project_id = match fields.get("project_id") {
        Some(v) if !v.is_empty() => Some(
            v.parse::<i64>()
                .map_err(|_| JournalError::InvalidId(v.clone()))?,
        ),
        _ => None,
    };

    Ok(LearningInput {
        challenge,
        solution,
        learning_type,
        project_id,
    })
}

/// Insert a new learning. A `project_id` pointing at no project violates the
/// foreign key and propagates as a constraint error.
pub fn create(conn: &Connection, input: &LearningInput) -> Result<Learning> {
    let now = chrono::Utc::now().to_rfc3339();
    conn.execute(
        "INSERT INTO learnings (challenge, solution, learning_type, project_id, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
        params![
            input.challenge,
            input.solution,
            input.learning_type.as_str(),
            input.project_id,
            now,
        ],
    )?;
    let id = conn.last_insert_rowid();
    tracing::info!(id, learning_type = %input.learning_type, "learning created");

    Ok(Learning {
        id,
        challenge: input.challenge.clone(),
        solution: input.solution.clone(),
        learning_type: input.learning_type,
        project_id: input.project_id,
        created_at: now.clone(),
        updated_at: now,
    })
}

/// Overwrite an existing learning's fields.
pub fn update(conn: &Connection, id: i64, input: &LearningInput) -> Result<()> {
    let now = chrono::Utc::now().to_rfc3339();
    let rows = conn.execute(
        "UPDATE learnings SET challenge = ?1, solution = ?2, learning_type = ?3, project_id = ?4, \
         updated_at = ?5 WHERE id = ?6",
        params![
            input.challenge,
            input.solution,
            input.learning_type.as_str(),
            input.project_id,
            now,
            id,
        ],
    )?;
    if rows == 0 {
        return Err(JournalError::LearningNotFound(id).into());
    }
    tracing::info!(id, "learning updated");
    Ok(())
}

/// Fetch a single learning by id.
pub fn get(conn: &Connection, id: i64) -> Result<Option<Learning>> {
    let learning = conn
        .query_row(
            "SELECT id, challenge, solution, learning_type, project_id, created_at, updated_at \
             FROM learnings WHERE id = ?1",
            params![id],
            row_to_learning,
        )
        .optional()?;
    Ok(learning)
}

/// All learnings in creation order, optionally restricted to one project.
pub fn list(conn: &Connection, project_id: Option<i64>) -> Result<Vec<Learning>> {
    let base = "SELECT id, challenge, solution, learning_type, project_id, created_at, updated_at \
                FROM learnings";

    let learnings = if let Some(pid) = project_id {
        let mut stmt =
            conn.prepare(&format!("{base} WHERE project_id = ?1 ORDER BY created_at, id"))?;
        let rows = stmt
            .query_map(params![pid], row_to_learning)?
            .collect::<Result<Vec<_>, _>>()?;
        rows
    } else {
        let mut stmt = conn.prepare(&format!("{base} ORDER BY created_at, id"))?;
        let rows = stmt
            .query_map([], row_to_learning)?
            .collect::<Result<Vec<_>, _>>()?;
        rows
    };
    Ok(learnings)
}

fn row_to_learning(row: &Row) -> rusqlite::Result<Learning> {
    let type_str: String = row.get(3)?;
    Ok(Learning {
        id: row.get(0)?,
        challenge: row.get(1)?,
        solution: row.get(2)?,
        learning_type: type_str
            .parse()
            .map_err(|_| rusqlite::Error::InvalidQuery)?,
        project_id: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::journal::project::{self, ProjectInput};

    fn test_db() -> Connection {
        db::open_memory_database().unwrap()
    }

    fn input(challenge: &str, solution: &str, lt: LearningType) -> LearningInput {
        LearningInput {
            challenge: challenge.into(),
            solution: solution.into(),
            learning_type: lt,
            project_id: None,
        }
    }

    fn seed_project(conn: &Connection) -> i64 {
        project::create(
            conn,
            &ProjectInput {
                name: "devlog".into(),
                context: "journal CLI".into(),
            },
        )
        .unwrap()
        .id
    }

    #[test]
    fn build_input_accepts_a_complete_template() {
        let content = "Challenge:\nError while compiling code\n---\nSolution:\nupdate env var from config file\n---\nType:\nsoft\n";
        let parsed = build_input(content).unwrap();
        assert_eq!(parsed.challenge, "Error while compiling code");
        assert_eq!(parsed.solution, "update env var from config file");
        assert_eq!(parsed.learning_type, LearningType::Soft);
        assert_eq!(parsed.project_id, None);
    }

    #[test]
    fn build_input_rejects_empty_challenge() {
        let content = "Challenge:\n---\nSolution:\nfix it\n---\nType:\nsoft\n";
        assert_eq!(build_input(content), Err(JournalError::MissingChallenge));
    }

    #[test]
    fn build_input_rejects_missing_challenge() {
        let content = "---\nSolution:\nfix it\n---\nType:\nsoft\n";
        assert_eq!(build_input(content), Err(JournalError::MissingChallenge));
    }

    #[test]
    fn build_input_rejects_empty_solution() {
        let content = "Challenge:\nbroken build\n---\nSolution:\n---\nType:\nsoft\n";
        assert_eq!(build_input(content), Err(JournalError::MissingSolution));
    }

    #[test]
    fn build_input_rejects_missing_solution() {
        let content = "Challenge:\nbroken build\n---\nType:\nsoft\n";
        assert_eq!(build_input(content), Err(JournalError::MissingSolution));
    }

    #[test]
    fn build_input_rejects_missing_type() {
        let content = "Challenge:\nbroken build\n---\nSolution:\nfix it\n---\nType:\n";
        assert_eq!(build_input(content), Err(JournalError::MissingType));
    }

    #[test]
    fn build_input_rejects_disallowed_type() {
        let content = "Challenge:\nbroken build\n---\nSolution:\nfix it\n---\nType:\npersonal\n";
        assert_eq!(
            build_input(content),
            Err(JournalError::InvalidType("personal".into()))
        );
    }

    #[test]
    fn build_input_accepts_mixed_case_type() {
        let content = "Challenge:\nbroken build\n---\nSolution:\nfix it\n---\nType:\nHard\n";
        assert_eq!(build_input(content).unwrap().learning_type, LearningType::Hard);
    }

    #[test]
    fn build_input_parses_numeric_project_id() {
        let content = "Challenge:\na\n---\nSolution:\nb\n---\nType:\nsoft\n---\nProject id:\n12\n";
        assert_eq!(build_input(content).unwrap().project_id, Some(12));
    }

    #[test]
    fn build_input_treats_blank_project_id_as_none() {
        let content = "Challenge:\na\n---\nSolution:\nb\n---\nType:\nsoft\n---\nProject id:\n";
        assert_eq!(build_input(content).unwrap().project_id, None);
    }

    #[test]
    fn build_input_rejects_non_numeric_project_id() {
        let content = "Challenge:\na\n---\nSolution:\nb\n---\nType:\nsoft\n---\nProject id:\nhello\n";
        assert_eq!(
            build_input(content),
            Err(JournalError::InvalidId("hello".into()))
        );
    }

    #[test]
    fn create_and_get_round_trip() {
        let conn = test_db();
        let created = create(&conn, &input("broken build", "fix it", LearningType::Hard)).unwrap();

        let fetched = get(&conn, created.id).unwrap().unwrap();
        assert_eq!(fetched.challenge, "broken build");
        assert_eq!(fetched.learning_type, LearningType::Hard);
        assert_eq!(fetched.project_id, None);
    }

    #[test]
    fn create_attached_to_a_project() {
        let conn = test_db();
        let pid = seed_project(&conn);

        let mut attached = input("a", "b", LearningType::Soft);
        attached.project_id = Some(pid);
        let created = create(&conn, &attached).unwrap();

        assert_eq!(get(&conn, created.id).unwrap().unwrap().project_id, Some(pid));
    }

    #[test]
    fn create_with_unknown_project_violates_foreign_key() {
        let conn = test_db();
        let mut orphan = input("a", "b", LearningType::Soft);
        orphan.project_id = Some(999);

        let err = create(&conn, &orphan).unwrap_err();
        assert!(err.to_string().contains("FOREIGN KEY"));
    }

    #[test]
    fn update_unknown_id_reports_not_found() {
        let conn = test_db();
        let err = update(&conn, 3, &input("a", "b", LearningType::Soft)).unwrap_err();
        assert_eq!(
            err.downcast_ref::<JournalError>(),
            Some(&JournalError::LearningNotFound(3))
        );
    }

    #[test]
    fn update_can_detach_from_a_project() {
        let conn = test_db();
        let pid = seed_project(&conn);

        let mut attached = input("a", "b", LearningType::Soft);
        attached.project_id = Some(pid);
        let created = create(&conn, &attached).unwrap();

        update(&conn, created.id, &input("a", "b", LearningType::Soft)).unwrap();
        assert_eq!(get(&conn, created.id).unwrap().unwrap().project_id, None);
    }

    #[test]
    fn list_filters_by_project() {
        let conn = test_db();
        let pid = seed_project(&conn);

        let mut attached = input("on project", "b", LearningType::Soft);
        attached.project_id = Some(pid);
        create(&conn, &attached).unwrap();
        create(&conn, &input("unattached", "b", LearningType::Hard)).unwrap();

        assert_eq!(list(&conn, None).unwrap().len(), 2);

        let filtered = list(&conn, Some(pid)).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].challenge, "on project");
    }

    #[test]
    fn filled_template_round_trips_through_build_input() {
        let conn = test_db();
        let pid = seed_project(&conn);

        let mut attached = input("borrow checker fight", "clone less", LearningType::Hard);
        attached.project_id = Some(pid);
        let created = create(&conn, &attached).unwrap();

        let rebuilt = build_input(&filled_template(&created)).unwrap();
        assert_eq!(rebuilt.challenge, created.challenge);
        assert_eq!(rebuilt.solution, created.solution);
        assert_eq!(rebuilt.learning_type, created.learning_type);
        assert_eq!(rebuilt.project_id, created.project_id);
    }
}
