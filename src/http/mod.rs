//! REST interface for Taskboard.
//!
//! Translates between JSON request/response bodies and the core service
//! contracts. Endpoints:
//!
//! - `GET    /tasks` - list tasks
//! - `POST   /tasks` - create a task
//! - `GET    /tasks/{id}` - fetch a task
//! - `PUT    /tasks/{id}` - partially update a task
//! - `DELETE /tasks/{id}` - delete a task
//! - `GET    /users` - list roster entries
//! - `POST   /users` - create a roster entry
//! - `DELETE /users/{id}` - delete a roster entry
//!
//! Path ids that fail integer parsing are treated as not-found rather
//! than a parse failure.

pub mod error;
pub mod server;
pub mod state;

mod tasks;
mod users;

use axum::Router;
use axum::routing::{delete, get};
use mockable::Clock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::task::ports::TaskRepository;
use crate::user::ports::UserRepository;
use self::state::AppState;

/// Builds the service router with tracing and CORS layers applied.
pub fn build_router<R, C, U>(state: AppState<R, C, U>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
    U: UserRepository + 'static,
{
    Router::new()
        .route(
            "/tasks",
            get(tasks::list_tasks::<R, C, U>).post(tasks::create_task::<R, C, U>),
        )
        .route(
            "/tasks/{id}",
            get(tasks::get_task::<R, C, U>)
                .put(tasks::update_task::<R, C, U>)
                .delete(tasks::delete_task::<R, C, U>),
        )
        .route(
            "/users",
            get(users::list_users::<R, C, U>).post(users::create_user::<R, C, U>),
        )
        .route("/users/{id}", delete(users::delete_user::<R, C, U>))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
