//! Client for the third-party user/post REST API.
//!
//! # Overview
//! A thin pass-through: each operation performs one HTTP round-trip against
//! the configured base URL and returns the response body as untyped
//! `serde_json::Value`, so upstream payloads are forwarded without reshaping
//! into local types.
//!
//! # Design
//! - `ExternalApiClient` holds a `ureq` agent and a base URL; it carries no
//!   other state between calls.
//! - The agent is configured with status-as-error disabled so 4xx/5xx
//!   responses are interpreted by the client, not turned into transport
//!   errors by `ureq`.
//! - A 404 gets its own `NotFound` variant; any other unexpected status
//!   lands in `Http` with the raw status and body.
//! - Calls are synchronous. Async hosts run them on a blocking pool.

pub mod client;
pub mod error;

pub use client::ExternalApiClient;
pub use error::ExternalApiError;
