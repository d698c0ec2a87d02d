//! API handlers.

/// Todo CRUD handlers.
pub mod todos;
