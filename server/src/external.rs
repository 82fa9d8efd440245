//! Pass-through handlers for the external user/post API.
//!
//! # Design
//! No business logic: each handler forwards one upstream call and returns
//! the upstream body untouched. The client is synchronous, so calls run on
//! the blocking pool. Calls are logged here (the todo service itself logs
//! nothing); an upstream 404 stays a 404, every other upstream failure
//! becomes a 502.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tokio::task;
use tracing::{error, info};

use external_api::ExternalApiError;

use crate::error::ApiError;
use crate::http::AppState;

pub(crate) async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<Value>>, ApiError> {
    info!("fetching all external users");
    let client = Arc::clone(&state.external);
    let users = run_blocking(move || client.all_users()).await?;
    Ok(Json(users))
}

pub(crate) async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Value>, ApiError> {
    info!("fetching external user with id: {id}");
    let client = Arc::clone(&state.external);
    let user = run_blocking(move || client.user_by_id(id)).await?;
    Ok(Json(user))
}

pub(crate) async fn user_posts(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Vec<Value>>, ApiError> {
    info!("fetching posts for external user: {id}");
    let client = Arc::clone(&state.external);
    let posts = run_blocking(move || client.posts_by_user(id)).await?;
    Ok(Json(posts))
}

pub(crate) async fn create_user(
    State(state): State<AppState>,
    Json(user): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    info!("creating external user");
    let client = Arc::clone(&state.external);
    let created = run_blocking(move || client.create_user(&user)).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Run one blocking client call on the blocking pool and log its failure.
async fn run_blocking<T, F>(call: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, ExternalApiError> + Send + 'static,
    T: Send + 'static,
{
    match task::spawn_blocking(call).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => {
            error!("external api call failed: {err}");
            Err(ApiError::from(err))
        }
        Err(err) => Err(ApiError::Internal(err.to_string())),
    }
}
