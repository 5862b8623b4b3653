//! Core record type definitions.
//!
//! Defines [`Project`] (a body of work being journaled), [`Learning`]
//! (a challenge/solution pair picked up while working on a project), and
//! [`LearningType`] (the soft/hard classification).

use serde::{Deserialize, Serialize};

/// Classification of a learning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearningType {
    /// Process, communication, and workflow lessons.
    Soft,
    /// Technical lessons — code, tooling, infrastructure.
    Hard,
}

impl LearningType {
    /// SQL-compatible string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Soft => "soft",
            Self::Hard => "hard",
        }
    }
}

impl std::fmt::Display for LearningType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LearningType {
    type Err = String;

    /// Case-insensitive, matching what users type into the template.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "soft" => Ok(Self::Soft),
            "hard" => Ok(Self::Hard),
            _ => Err(format!("unknown learning type: {s}")),
        }
    }
}

/// A project record, matching the `projects` table schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Auto-increment primary key.
    pub id: i64,
    /// Unique human-chosen name.
    pub name: String,
    /// What the project is, in the author's words.
    pub context: String,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    /// ISO 8601 last-modification timestamp.
    pub updated_at: String,
}

/// A learning record, matching the `learnings` table schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Learning {
    /// Auto-increment primary key.
    pub id: i64,
    /// The problem that was encountered.
    pub challenge: String,
    /// How it was resolved.
    pub solution: String,
    /// Soft or hard classification.
    #[serde(rename = "type")]
    pub learning_type: LearningType,
    /// Owning project, if the learning is attached to one.
    pub project_id: Option<i64>,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    /// ISO 8601 last-modification timestamp.
    pub updated_at: String,
}
