//! Personal engineering journal — record projects and the learnings you pick
//! up while working on them.
//!
//! Records are authored in your own editor: devlog renders a labeled
//! plain-text template, hands it to `$EDITOR`, and parses the edited document
//! back into fields. Everything is stored in a local SQLite database.
//!
//! # Architecture
//!
//! - **Templates**: section-per-field documents with `---` dividers; parsing
//!   is a total, single-pass function (see [`template`])
//! - **Records**: projects (unique name + context) and learnings
//!   (challenge/solution pairs classified soft or hard, optionally attached
//!   to a project)
//! - **Storage**: SQLite with forward-only schema migrations
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`db`] — SQLite database initialization, schema, migrations, and health checks
//! - [`editor`] — External editor round-trip for authoring records
//! - [`journal`] — Record builders, validation errors, persistence, statistics
//! - [`template`] — The structured plain-text template renderer and parser

pub mod config;
pub mod db;
pub mod editor;
pub mod journal;
pub mod template;
