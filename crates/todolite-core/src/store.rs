use thiserror::Error;

use crate::id::TaskId;
use crate::task::{Filter, Stats, Task};

/// Errors produced by store mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Create was called with empty or whitespace-only text.
    #[error("task text must not be empty")]
    EmptyText,

    /// The targeted task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),
}

/// Ordered, exclusively owned collection of tasks.
///
/// Insertion order is iteration order; nothing re-sorts. Ids come from a
/// strictly increasing counter so a removed task's id is never reissued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: TaskId,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Construct an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: TaskId::FIRST,
        }
    }

    /// Rebuild a store wholesale from a snapshot, e.g. after deserialization.
    ///
    /// The id counter resumes past the largest id present, so future creates
    /// keep the uniqueness invariant.
    #[must_use]
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks
            .iter()
            .map(|t| t.id)
            .max()
            .map_or(TaskId::FIRST, TaskId::next);
        Self { tasks, next_id }
    }

    /// Append a new task with the given text.
    ///
    /// The text is trimmed; the new task starts with `completed == false`.
    ///
    /// # Errors
    /// Returns [`StoreError::EmptyText`] when the trimmed text is empty; the
    /// store is left unchanged.
    pub fn create(&mut self, text: &str) -> Result<Task, StoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::EmptyText);
        }

        let task = Task {
            id: self.next_id,
            text: text.to_owned(),
            completed: false,
        };
        self.next_id = self.next_id.next();
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Iterate tasks matching the filter, in insertion order.
    pub fn list(&self, filter: Filter) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |t| filter.matches(t))
    }

    /// Flip the completion flag of the task with the given id.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] when no task has that id.
    pub fn toggle(&mut self, id: TaskId) -> Result<Task, StoreError> {
        let task = self.find_mut(id)?;
        task.completed = !task.completed;
        Ok(task.clone())
    }

    /// Set the completion flag to an exact value (the HTTP update semantics).
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] when no task has that id.
    pub fn set_completed(&mut self, id: TaskId, completed: bool) -> Result<Task, StoreError> {
        let task = self.find_mut(id)?;
        task.completed = completed;
        Ok(task.clone())
    }

    /// Remove the task with the given id.
    ///
    /// Removing a missing id is a silent no-op, so the operation is
    /// idempotent.
    pub fn remove(&mut self, id: TaskId) {
        self.tasks.retain(|t| t.id != id);
    }

    /// Find a task by id.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// All tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Aggregate counts over the full store (never the filtered view).
    #[must_use]
    pub fn stats(&self) -> Stats {
        Stats::of(&self.tasks)
    }

    /// Number of tasks held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the store holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn find_mut(&mut self, id: TaskId) -> Result<&mut Task, StoreError> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}
