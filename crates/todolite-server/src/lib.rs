//! HTTP API for todolite.
//!
//! One canonical implementation of the four CRUD routes over an in-memory
//! task store. State lives for the lifetime of the process only; nothing is
//! shared with the file-backed CLI variant.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use routes::app;
pub use state::AppState;
