use anyhow::Result;
use rusqlite::{params, Connection};
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;

/// Response from journal_stats.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_projects: u64,
    pub total_learnings: u64,
    pub by_type: HashMap<String, u64>,
    /// Learning count per project name, in creation order.
    pub by_project: Vec<(String, u64)>,
    /// Learnings not attached to any project.
    pub unattached_learnings: u64,
    pub db_size_bytes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oldest_learning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newest_learning: Option<String>,
}

/// Compute journal statistics.
///
/// `db_path` is used for file size calculation; pass None for in-memory
/// databases.
pub fn journal_stats(conn: &Connection, db_path: Option<&Path>) -> Result<StatsResponse> {
    let total_projects: i64 =
        conn.query_row("SELECT COUNT(*) FROM projects", [], |row| row.get(0))?;
    let total_learnings: i64 =
        conn.query_row("SELECT COUNT(*) FROM learnings", [], |row| row.get(0))?;

    let by_type = count_by_type(conn)?;
    let by_project = count_by_project(conn)?;

    let unattached: i64 = conn.query_row(
        "SELECT COUNT(*) FROM learnings WHERE project_id IS NULL",
        [],
        |row| row.get(0),
    )?;

    let (oldest, newest): (Option<String>, Option<String>) = conn.query_row(
        "SELECT MIN(created_at), MAX(created_at) FROM learnings",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    let db_size_bytes = db_path
        .and_then(|p| std::fs::metadata(p).ok())
        .map(|m| m.len())
        .unwrap_or(0);

    Ok(StatsResponse {
        total_projects: total_projects as u64,
        total_learnings: total_learnings as u64,
        by_type,
        by_project,
        unattached_learnings: unattached as u64,
        db_size_bytes,
        oldest_learning: oldest,
        newest_learning: newest,
    })
}

/// Count learnings by type, with both types always present.
fn count_by_type(conn: &Connection) -> Result<HashMap<String, u64>> {
    let mut map = HashMap::new();
    for t in &["soft", "hard"] {
        map.insert(t.to_string(), 0);
    }

    let mut stmt =
        conn.prepare("SELECT learning_type, COUNT(*) FROM learnings GROUP BY learning_type")?;
    let rows: Vec<(String, i64)> = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
        .collect::<Result<Vec<_>, _>>()?;

    for (t, count) in rows {
        map.insert(t, count as u64);
    }
    Ok(map)
}

/// Count learnings per project, including projects with none.
fn count_by_project(conn: &Connection) -> Result<Vec<(String, u64)>> {
    let mut stmt = conn.prepare(
        "SELECT p.name, COUNT(l.id) FROM projects p \
         LEFT JOIN learnings l ON l.project_id = p.id \
         GROUP BY p.id ORDER BY p.created_at, p.id",
    )?;
    let rows: Vec<(String, i64)> = stmt
        .query_map(params![], |row| Ok((row.get(0)?, row.get(1)?)))?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(rows.into_iter().map(|(n, c)| (n, c as u64)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::journal::learning::{self, LearningInput};
    use crate::journal::project::{self, ProjectInput};
    use crate::journal::types::LearningType;

    fn test_db() -> Connection {
        db::open_memory_database().unwrap()
    }

    fn seed_project(conn: &Connection, name: &str) -> i64 {
        project::create(
            conn,
            &ProjectInput {
                name: name.into(),
                context: "ctx".into(),
            },
        )
        .unwrap()
        .id
    }

    fn seed_learning(conn: &Connection, lt: LearningType, project_id: Option<i64>) {
        learning::create(
            conn,
            &LearningInput {
                challenge: "c".into(),
                solution: "s".into(),
                learning_type: lt,
                project_id,
            },
        )
        .unwrap();
    }

    #[test]
    fn empty_journal_stats() {
        let conn = test_db();
        let stats = journal_stats(&conn, None).unwrap();
        assert_eq!(stats.total_projects, 0);
        assert_eq!(stats.total_learnings, 0);
        assert_eq!(stats.by_type["soft"], 0);
        assert_eq!(stats.by_type["hard"], 0);
        assert!(stats.by_project.is_empty());
        assert!(stats.oldest_learning.is_none());
        assert!(stats.newest_learning.is_none());
    }

    #[test]
    fn counts_by_type_and_project() {
        let conn = test_db();
        let pid = seed_project(&conn, "devlog");
        seed_project(&conn, "idle");

        seed_learning(&conn, LearningType::Soft, Some(pid));
        seed_learning(&conn, LearningType::Hard, Some(pid));
        seed_learning(&conn, LearningType::Hard, None);

        let stats = journal_stats(&conn, None).unwrap();
        assert_eq!(stats.total_projects, 2);
        assert_eq!(stats.total_learnings, 3);
        assert_eq!(stats.by_type["soft"], 1);
        assert_eq!(stats.by_type["hard"], 2);
        assert_eq!(stats.unattached_learnings, 1);
        assert_eq!(stats.by_project, vec![("devlog".into(), 2), ("idle".into(), 0)]);
        assert!(stats.oldest_learning.is_some());
    }
}
