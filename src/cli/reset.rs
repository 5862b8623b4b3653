//! CLI `reset` command — delete all records after user confirmation.

use anyhow::{bail, Result};
use std::io::Write;

use crate::config::DevlogConfig;

/// Delete all projects and learnings after user confirmation.
pub fn reset(config: &DevlogConfig) -> Result<()> {
    let db_path = config.resolved_db_path();

    println!("WARNING: This will permanently delete ALL projects and learnings.");
    println!("Database: {}", db_path.display());
    print!("\nType YES to confirm: ");
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;

    if input.trim() != "YES" {
        bail!("reset cancelled");
    }

    let conn = crate::db::open_database(&db_path)?;

    // Learnings first, they reference projects
    conn.execute_batch(
        "DELETE FROM learnings;
         DELETE FROM projects;",
    )?;

    println!("All records deleted. Journal reset complete.");
    Ok(())
}
