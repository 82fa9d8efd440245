//! Transport-level error taxonomy.
//!
//! # Design
//! `ApiError` is the single error type handlers return; it maps each
//! condition to a status code and a JSON `{"error": "..."}` body. Validation
//! failures are a 400, distinct from the 404 a missing todo produces.
//! Upstream pass-through failures keep a 404 when the upstream itself
//! reported one and become a 502 otherwise.

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use external_api::ExternalApiError;

use crate::service::TodoError;
use crate::store::StoreError;
use crate::types::{TodoId, ValidationError};

#[derive(Debug)]
pub enum ApiError {
    Validation(ValidationError),
    NotFound(TodoId),
    Store(StoreError),
    External(ExternalApiError),
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(err) => write!(f, "{err}"),
            ApiError::NotFound(id) => write!(f, "todo not found with id: {id}"),
            ApiError::Store(err) => write!(f, "storage failure: {err}"),
            ApiError::External(err) => write!(f, "external api: {err}"),
            ApiError::Internal(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err)
    }
}

impl From<TodoError> for ApiError {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::NotFound(id) => ApiError::NotFound(id),
            TodoError::Store(err) => ApiError::Store(err),
        }
    }
}

impl From<ExternalApiError> for ApiError {
    fn from(err: ExternalApiError) -> Self {
        ApiError::External(err)
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::External(ExternalApiError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::External(_) => StatusCode::BAD_GATEWAY,
        };
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
