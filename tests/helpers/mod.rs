#![allow(dead_code)]

use devlog::db;
use devlog::journal::learning::{self, LearningInput};
use devlog::journal::project::{self, ProjectInput};
use devlog::journal::types::LearningType;
use rusqlite::Connection;

/// Open a fresh in-memory database with schema and migrations applied.
pub fn test_db() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.pragma_update(None, "foreign_keys", "ON").unwrap();
    db::schema::init_schema(&conn).unwrap();
    db::migrations::run_migrations(&conn).unwrap();
    conn
}

/// Insert a project directly. Returns its id.
pub fn insert_project(conn: &Connection, name: &str, context: &str) -> i64 {
    project::create(
        conn,
        &ProjectInput {
            name: name.into(),
            context: context.into(),
        },
    )
    .unwrap()
    .id
}

/// Insert a learning directly. Returns its id.
pub fn insert_learning(
    conn: &Connection,
    challenge: &str,
    solution: &str,
    learning_type: LearningType,
    project_id: Option<i64>,
) -> i64 {
    learning::create(
        conn,
        &LearningInput {
            challenge: challenge.into(),
            solution: solution.into(),
            learning_type,
            project_id,
        },
    )
    .unwrap()
    .id
}
