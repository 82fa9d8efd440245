//! Router and todo handlers.
//!
//! # Design
//! Handlers stay thin: decode, validate at the boundary, call the service,
//! map the result onto a status code. A missing todo on a read surfaces the
//! same 404 condition the mutating operations raise. The whole router is
//! wrapped in a trace layer; request logging lives there, not in handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use external_api::ExternalApiClient;

use crate::config::Config;
use crate::error::ApiError;
use crate::external;
use crate::service::TodoService;
use crate::store::InMemoryStore;
use crate::types::{Todo, TodoDraft, TodoId, UpdateTodo};

#[derive(Clone)]
pub struct AppState {
    pub(crate) service: Arc<TodoService<InMemoryStore>>,
    pub(crate) external: Arc<ExternalApiClient>,
}

pub fn app(config: Config) -> Router {
    let state = AppState {
        service: Arc::new(TodoService::new(InMemoryStore::new())),
        external: Arc::new(ExternalApiClient::new(&config.external_base_url)),
    };
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .route("/todos/{id}/toggle", patch(toggle_todo))
        .route(
            "/external/users",
            get(external::list_users).post(external::create_user),
        )
        .route("/external/users/{id}", get(external::get_user))
        .route("/external/users/{id}/posts", get(external::user_posts))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(listener: TcpListener, config: Config) -> Result<(), std::io::Error> {
    axum::serve(listener, app(config)).await
}

async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    Ok(Json(state.service.all_todos().await?))
}

async fn create_todo(
    State(state): State<AppState>,
    Json(draft): Json<TodoDraft>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    draft.validate()?;
    let todo = state.service.create_todo(draft).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<TodoId>,
) -> Result<Json<Todo>, ApiError> {
    match state.service.todo_by_id(id).await? {
        Some(todo) => Ok(Json(todo)),
        None => Err(ApiError::NotFound(id)),
    }
}

async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<TodoId>,
    Json(details): Json<UpdateTodo>,
) -> Result<Json<Todo>, ApiError> {
    details.validate()?;
    Ok(Json(state.service.update_todo(id, details).await?))
}

async fn toggle_todo(
    State(state): State<AppState>,
    Path(id): Path<TodoId>,
) -> Result<Json<Todo>, ApiError> {
    Ok(Json(state.service.toggle_status(id).await?))
}

async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<TodoId>,
) -> Result<StatusCode, ApiError> {
    state.service.delete_todo(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
