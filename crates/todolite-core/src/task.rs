use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::id::TaskId;

/// A single to-do item.
///
/// The text is fixed at creation (there is no edit operation); only the
/// completion flag ever changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned by the store.
    pub id: TaskId,
    /// Human-readable description, non-empty after trimming.
    pub text: String,
    /// Completion flag; `false` at creation.
    pub completed: bool,
}

/// View selector over the task store. Display-only, never mutates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    /// Every task.
    #[default]
    All,
    /// Tasks with `completed == false`.
    Active,
    /// Tasks with `completed == true`.
    Completed,
}

impl Filter {
    /// Whether a task belongs to this view.
    #[must_use]
    pub const fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        };
        f.write_str(name)
    }
}

/// Error produced when parsing an unrecognized filter name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter '{0}', expected one of: all, active, completed")]
pub struct ParseFilterError(String);

impl FromStr for Filter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            other => Err(ParseFilterError(other.to_owned())),
        }
    }
}

/// Aggregate counts derived from the full store contents.
///
/// Recomputed on demand; `total == active + completed` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    /// Number of tasks in the store.
    pub total: usize,
    /// Tasks still open.
    pub active: usize,
    /// Tasks marked done.
    pub completed: usize,
}

impl Stats {
    /// Compute counts over a task slice.
    #[must_use]
    pub fn of(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.completed).count();
        Self {
            total,
            active: total - completed,
            completed,
        }
    }
}
