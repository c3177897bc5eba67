//! User roster route handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use mockable::Clock;
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::http::state::AppState;
use crate::task::ports::TaskRepository;
use crate::user::domain::{User, UserId};
use crate::user::ports::UserRepository;

/// Acknowledgement body returned by a successful roster deletion.
const USER_DELETED: &str = "User deleted successfully";

/// Request body for `POST /users`.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    /// User name. Required and non-empty.
    #[serde(default)]
    pub name: String,
}

/// Parses a path segment as a user identifier.
///
/// Non-numeric ids map to not-found, never a parse failure.
fn parse_user_id(raw: &str) -> Result<UserId, ApiError> {
    raw.parse::<u64>()
        .map(UserId::new)
        .map_err(|_| ApiError::user_not_found())
}

/// `GET /users` - every roster entry in insertion order.
pub async fn list_users<R, C, U>(
    State(state): State<AppState<R, C, U>>,
) -> Result<Json<Vec<User>>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
    U: UserRepository,
{
    Ok(Json(state.users.list().await?))
}

/// `POST /users` - creates a roster entry.
pub async fn create_user<R, C, U>(
    State(state): State<AppState<R, C, U>>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
    U: UserRepository,
{
    let user = state.users.create(request.name).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// `DELETE /users/{id}` - removes a roster entry.
///
/// Success is acknowledged with a plain-text message rather than the
/// deleted record.
pub async fn delete_user<R, C, U>(
    State(state): State<AppState<R, C, U>>,
    Path(id): Path<String>,
) -> Result<&'static str, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
    U: UserRepository,
{
    let user_id = parse_user_id(&id)?;
    state.users.delete(user_id).await?;
    Ok(USER_DELETED)
}
