//! Domain types & store logic for todolite tasks.

/// Identifier types.
pub mod id;
/// Task store and mutation operations.
pub mod store;
/// Task model, filters, and statistics.
pub mod task;

pub use id::TaskId;
pub use store::{StoreError, TaskStore};
pub use task::{Filter, ParseFilterError, Stats, Task};
