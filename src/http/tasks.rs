//! Task route handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use mockable::Clock;

use crate::http::error::ApiError;
use crate::http::state::AppState;
use crate::task::domain::{Task, TaskDraft, TaskId, TaskPatch};
use crate::task::ports::TaskRepository;
use crate::user::ports::UserRepository;

/// Parses a path segment as a task identifier.
///
/// Non-numeric ids map to not-found, never a parse failure.
fn parse_task_id(raw: &str) -> Result<TaskId, ApiError> {
    raw.parse::<u64>()
        .map(TaskId::new)
        .map_err(|_| ApiError::task_not_found())
}

/// `GET /tasks` - every task in insertion order.
pub async fn list_tasks<R, C, U>(
    State(state): State<AppState<R, C, U>>,
) -> Result<Json<Vec<Task>>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
    U: UserRepository,
{
    Ok(Json(state.tasks.list().await?))
}

/// `GET /tasks/{id}` - a single task.
pub async fn get_task<R, C, U>(
    State(state): State<AppState<R, C, U>>,
    Path(id): Path<String>,
) -> Result<Json<Task>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
    U: UserRepository,
{
    let task_id = parse_task_id(&id)?;
    Ok(Json(state.tasks.get(task_id).await?))
}

/// `POST /tasks` - creates a task from draft input.
pub async fn create_task<R, C, U>(
    State(state): State<AppState<R, C, U>>,
    Json(draft): Json<TaskDraft>,
) -> Result<(StatusCode, Json<Task>), ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
    U: UserRepository,
{
    let task = state.tasks.create(draft).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// `PUT /tasks/{id}` - overlays a patch onto an existing task.
pub async fn update_task<R, C, U>(
    State(state): State<AppState<R, C, U>>,
    Path(id): Path<String>,
    Json(patch): Json<TaskPatch>,
) -> Result<Json<Task>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
    U: UserRepository,
{
    let task_id = parse_task_id(&id)?;
    Ok(Json(state.tasks.update(task_id, patch).await?))
}

/// `DELETE /tasks/{id}` - removes a task, returning the deleted record.
pub async fn delete_task<R, C, U>(
    State(state): State<AppState<R, C, U>>,
    Path(id): Path<String>,
) -> Result<Json<Task>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
    U: UserRepository,
{
    let task_id = parse_task_id(&id)?;
    Ok(Json(state.tasks.delete(task_id).await?))
}
