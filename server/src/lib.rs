//! Todo management service.
//!
//! # Overview
//! CRUD over `/todos` backed by an id-keyed store, plus a pass-through
//! surface under `/external` that forwards calls to a third-party user/post
//! API and returns its responses untouched.
//!
//! # Design
//! - `TodoService` owns the business rules; its store is injected at
//!   construction, so tests substitute the in-memory implementation.
//! - Every id-scoped mutation does a read-before-write existence check and
//!   fails with a typed NotFound instead of leaning on the store's
//!   missing-row behavior.
//! - Text validation (non-blank, at most 500 characters) runs at the HTTP
//!   boundary; invalid payloads never reach the service.
//! - The external client is synchronous; handlers run it on the blocking
//!   pool and map upstream failures to 404/502.

pub mod config;
pub mod error;
pub mod external;
pub mod http;
pub mod service;
pub mod store;
pub mod types;

pub use config::Config;
pub use error::ApiError;
pub use http::{app, run, AppState};
pub use service::{TodoError, TodoService};
pub use store::{InMemoryStore, StoreError, TodoStore};
pub use types::{Todo, TodoDraft, TodoId, UpdateTodo, ValidationError};
