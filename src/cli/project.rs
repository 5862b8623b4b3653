//! CLI `projects` subcommands — create, update, show, list.

use anyhow::Result;

use crate::config::DevlogConfig;
use crate::journal::error::JournalError;
use crate::journal::project;

/// Create a new project from a blank template edited by the user.
pub fn create(config: &DevlogConfig) -> Result<()> {
    let template = project::blank_template();
    let Some(edited) = crate::editor::edit(&template, &config.editor.command)? else {
        return Err(JournalError::EditAborted.into());
    };
    let input = project::build_input(&edited)?;

    let conn = crate::db::open_database(config.resolved_db_path())?;
    let created = project::create(&conn, &input)?;

    println!("Created project {} ({})", created.id, created.name);
    Ok(())
}

/// Re-edit an existing project.
pub fn update(config: &DevlogConfig, id: i64) -> Result<()> {
    let conn = crate::db::open_database(config.resolved_db_path())?;
    let Some(existing) = project::get(&conn, id)? else {
        return Err(JournalError::ProjectNotFound(id).into());
    };

    let template = project::filled_template(&existing);
    let Some(edited) = crate::editor::edit(&template, &config.editor.command)? else {
        return Err(JournalError::EditAborted.into());
    };
    let input = project::build_input(&edited)?;

    project::update(&conn, id, &input)?;
    println!("Updated project {id}");
    Ok(())
}

/// Show full details for one project, including its learnings.
pub fn show(config: &DevlogConfig, id: i64) -> Result<()> {
    let conn = crate::db::open_database(config.resolved_db_path())?;
    let Some(p) = project::get(&conn, id)? else {
        return Err(JournalError::ProjectNotFound(id).into());
    };

    println!("Project: {} ({})", p.name, p.id);
    println!("{}", "=".repeat(50));
    println!("  Created:        {}", p.created_at);
    println!("  Updated:        {}", p.updated_at);
    println!();
    println!("Context:");
    for line in p.context.lines() {
        println!("  {line}");
    }

    let learnings = crate::journal::learning::list(&conn, Some(id))?;
    if !learnings.is_empty() {
        println!();
        println!("Learnings:");
        for l in &learnings {
            println!(
                "  {:<4} [{}] {}",
                l.id,
                l.learning_type,
                super::preview(&l.challenge, 60)
            );
        }
    }

    Ok(())
}

/// List all projects in an aligned console table.
pub fn list(config: &DevlogConfig) -> Result<()> {
    let conn = crate::db::open_database(config.resolved_db_path())?;
    let projects = project::list(&conn)?;

    if projects.is_empty() {
        println!("No projects yet. Run `devlog projects create` to add one.");
        return Ok(());
    }

    println!("{:<6}{:<24}{}", "ID", "Name", "Context");
    println!("{}", "-".repeat(70));
    for p in &projects {
        println!(
            "{:<6}{:<24}{}",
            p.id,
            super::preview(&p.name, 22),
            super::preview(&p.context, 40)
        );
    }
    println!();
    println!("{} project(s)", projects.len());
    Ok(())
}
