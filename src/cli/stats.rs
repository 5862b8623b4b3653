use anyhow::Result;

use crate::config::DevlogConfig;

/// Display journal statistics in the terminal.
pub fn stats(config: &DevlogConfig) -> Result<()> {
    let db_path = config.resolved_db_path();
    let conn = crate::db::open_database(&db_path)?;

    let response = crate::journal::stats::journal_stats(&conn, Some(&db_path))?;

    println!("Journal Statistics");
    println!("{}", "=".repeat(40));
    println!("  Projects:            {}", response.total_projects);
    println!("  Learnings:           {}", response.total_learnings);
    println!();

    println!("By Type:");
    for t in &["soft", "hard"] {
        let count = response.by_type.get(*t).copied().unwrap_or(0);
        println!("  {:<12} {}", t, count);
    }
    println!();

    if !response.by_project.is_empty() {
        println!("By Project:");
        for (name, count) in &response.by_project {
            println!("  {:<24} {}", name, count);
        }
        println!("  {:<24} {}", "(unattached)", response.unattached_learnings);
        println!();
    }

    println!("Database size:         {} bytes", response.db_size_bytes);

    if let Some(ref oldest) = response.oldest_learning {
        println!("Oldest learning:       {oldest}");
    }
    if let Some(ref newest) = response.newest_learning {
        println!("Newest learning:       {newest}");
    }

    Ok(())
}
