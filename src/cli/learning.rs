//! CLI `learnings` subcommands — create, update, show, list.

use anyhow::Result;

use crate::config::DevlogConfig;
use crate::journal::error::JournalError;
use crate::journal::learning;

/// Record a new learning from a blank template edited by the user.
///
/// The create template has no `Project id:` section; the attachment comes
/// from `--project-id` instead.
pub fn create(config: &DevlogConfig, project_id: Option<i64>) -> Result<()> {
    let template = learning::blank_template();
    let Some(edited) = crate::editor::edit(&template, &config.editor.command)? else {
        return Err(JournalError::EditAborted.into());
    };
    let mut input = learning::build_input(&edited)?;
    if project_id.is_some() {
        input.project_id = project_id;
    }

    let conn = crate::db::open_database(config.resolved_db_path())?;
    let created = learning::create(&conn, &input)?;

    println!("Recorded learning {} ({})", created.id, created.learning_type);
    Ok(())
}

/// Re-edit an existing learning, including its project attachment.
pub fn update(config: &DevlogConfig, id: i64) -> Result<()> {
    let conn = crate::db::open_database(config.resolved_db_path())?;
    let Some(existing) = learning::get(&conn, id)? else {
        return Err(JournalError::LearningNotFound(id).into());
    };

    let template = learning::filled_template(&existing);
    let Some(edited) = crate::editor::edit(&template, &config.editor.command)? else {
        return Err(JournalError::EditAborted.into());
    };
    let input = learning::build_input(&edited)?;

    learning::update(&conn, id, &input)?;
    println!("Updated learning {id}");
    Ok(())
}

/// Show full details for one learning.
pub fn show(config: &DevlogConfig, id: i64) -> Result<()> {
    let conn = crate::db::open_database(config.resolved_db_path())?;
    let Some(l) = learning::get(&conn, id)? else {
        return Err(JournalError::LearningNotFound(id).into());
    };

    println!("Learning: {}", l.id);
    println!("{}", "=".repeat(50));
    println!("  Type:           {}", l.learning_type);
    match l.project_id {
        Some(pid) => {
            let name = crate::journal::project::get(&conn, pid)?
                .map(|p| p.name)
                .unwrap_or_else(|| "(missing project)".into());
            println!("  Project:        {name} ({pid})");
        }
        None => println!("  Project:        (none)"),
    }
    println!("  Created:        {}", l.created_at);
    println!("  Updated:        {}", l.updated_at);
    println!();
    println!("Challenge:");
    for line in l.challenge.lines() {
        println!("  {line}");
    }
    println!();
    println!("Solution:");
    for line in l.solution.lines() {
        println!("  {line}");
    }

    Ok(())
}

/// List learnings, optionally restricted to one project.
pub fn list(config: &DevlogConfig, project_id: Option<i64>) -> Result<()> {
    let conn = crate::db::open_database(config.resolved_db_path())?;
    let learnings = learning::list(&conn, project_id)?;

    if learnings.is_empty() {
        println!("No learnings yet. Run `devlog learnings create` to record one.");
        return Ok(());
    }

    println!("{:<6}{:<7}{:<10}{}", "ID", "Type", "Project", "Challenge");
    println!("{}", "-".repeat(70));
    for l in &learnings {
        let project = l
            .project_id
            .map(|pid| pid.to_string())
            .unwrap_or_else(|| "-".into());
        println!(
            "{:<6}{:<7}{:<10}{}",
            l.id,
            l.learning_type,
            project,
            super::preview(&l.challenge, 45)
        );
    }
    println!();
    println!("{} learning(s)", learnings.len());
    Ok(())
}
