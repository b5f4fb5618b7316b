//! Task model definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

/// Minimum length of a task description, in characters.
pub const MIN_TEXT_LEN: usize = 3;

/// Task priority level
///
/// Serialized with the capitalized variant names (`"None"`, `"Low"`,
/// `"Medium"`, `"High"`) so the persisted list matches the labels the
/// suggestion model is asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    None,
    Low,
    Medium,
    High,
}

impl Default for Priority {
    fn default() -> Self {
        Self::None
    }
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Parse a suggestion label from model output.
    ///
    /// Only the three suggestible labels are accepted; `"None"` is not a
    /// valid suggestion. Incidental whitespace is trimmed, anything else
    /// must match exactly.
    pub fn parse_label(s: &str) -> Option<Self> {
        match s.trim() {
            "Low" => Some(Self::Low),
            "Medium" => Some(Self::Medium),
            "High" => Some(Self::High),
            _ => None,
        }
    }
}

/// A task in the list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub text: String,
    pub completed: bool,
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a new pending task with the given text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            completed: false,
            priority: Priority::default(),
            created_at: Utc::now(),
        }
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

/// Validate a task description before it reaches the store.
///
/// The store itself assumes valid input; callers at the API boundary run
/// this first.
pub fn validate_text(text: &str) -> Result<()> {
    if text.trim().chars().count() < MIN_TEXT_LEN {
        return Err(Error::InvalidInput(
            "Task must be at least 3 characters long".to_string(),
        ));
    }
    Ok(())
}
