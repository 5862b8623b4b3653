//! Validation failures raised while turning edited templates into records.
//!
//! The parser itself never fails; everything a user can get wrong surfaces
//! here as a tagged error kind. The CLI layer propagates these unchanged and
//! lets their `Display` text be the message the user sees.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum JournalError {
    #[error("project name is required")]
    MissingName,
    #[error("project context is required")]
    MissingContext,
    #[error("challenge is required")]
    MissingChallenge,
    #[error("solution is required")]
    MissingSolution,
    #[error("learning type is required")]
    MissingType,
    #[error("unknown learning type '{0}' (expected 'soft' or 'hard')")]
    InvalidType(String),
    #[error("'{0}' is not a numeric id")]
    InvalidId(String),
    #[error("project not found: {0}")]
    ProjectNotFound(i64),
    #[error("learning not found: {0}")]
    LearningNotFound(i64),
    #[error("editor closed without changes, record discarded")]
    EditAborted,
}
