//! Request and response bodies for the HTTP surface.
//!
//! The wire layout uses `{id, title, done}` while the core model and the
//! persisted layout use `{id, text, completed}`; the DTOs here are the only
//! place the two vocabularies meet.

use serde::{Deserialize, Serialize};
use todolite_core::{Task, TaskId};

/// Body of `POST /todos`.
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    /// Description of the new todo.
    pub title: String,
}

/// Body of `PUT /todos/:id`. Sets the exact value, not a flip.
#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    /// Desired completion state.
    pub done: bool,
}

/// A todo as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoResponse {
    /// Unique identifier.
    pub id: TaskId,
    /// Description text.
    pub title: String,
    /// Completion state.
    pub done: bool,
}

impl From<&Task> for TodoResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            title: task.text.clone(),
            done: task.completed,
        }
    }
}

/// Confirmation body for operations that only report a message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    pub message: &'static str,
}
