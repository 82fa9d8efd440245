//! Todo entity and request payloads.
//!
//! # Design
//! Three shapes, one per lifecycle stage: `Todo` is a persisted row with an
//! id, `TodoDraft` is a todo before the store has assigned one, and
//! `UpdateTodo` is the full-replace payload with both fields required, so an
//! update always overwrites the whole text/done pair rather than merging.
//!
//! Text constraints (non-blank, at most 500 characters) are checked at the
//! HTTP boundary via `validate()`, before a payload reaches the service.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Store-assigned todo identifier, sequential from 1.
pub type TodoId = i64;

/// Upper bound on `text` length, in characters.
pub const MAX_TEXT_LEN: usize = 500;

/// A persisted todo item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    pub done: bool,
}

/// A todo that has not been saved yet. The store assigns an id when `id` is
/// `None`; a caller-supplied id passes through to the store unguarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoDraft {
    #[serde(default)]
    pub id: Option<TodoId>,
    pub text: String,
    #[serde(default)]
    pub done: bool,
}

/// Full-replace update payload. Omitting either field rejects the request,
/// keeping the replace-not-merge contract visible at the boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTodo {
    pub text: String,
    pub done: bool,
}

/// Text constraint violations, rejected before the service is reached.
#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
    Blank,
    TooLong(usize),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Blank => write!(f, "text must not be blank"),
            ValidationError::TooLong(len) => {
                write!(f, "text must be at most {MAX_TEXT_LEN} characters, got {len}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

fn validate_text(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::Blank);
    }
    let len = text.chars().count();
    if len > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong(len));
    }
    Ok(())
}

impl TodoDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_text(&self.text)
    }
}

impl UpdateTodo {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_text(&self.text)
    }
}
