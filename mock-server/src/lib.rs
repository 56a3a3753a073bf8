use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

pub use axum::http::StatusCode;

/// Number of todos the public demo API serves.
pub const DEFAULT_COUNT: usize = 200;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

/// What `GET /todos` answers with.
#[derive(Clone, Debug)]
pub enum Source {
    Todos(Vec<Todo>),
    Fail(StatusCode),
    /// 200 with a body that is not a todo array.
    Garbage(String),
}

/// `count` todos with ids starting at 1, twenty per user.
pub fn seed(count: usize) -> Vec<Todo> {
    (1..=count as u64)
        .map(|id| Todo {
            user_id: (id - 1) / 20 + 1,
            id,
            title: format!("todo number {id}"),
            completed: id % 3 == 0,
        })
        .collect()
}

pub fn app() -> Router {
    app_with(Source::Todos(seed(DEFAULT_COUNT)))
}

pub fn app_with(source: Source) -> Router {
    Router::new()
        .route("/todos", get(list_todos))
        .with_state(Arc::new(source))
}

pub async fn run_with(listener: TcpListener, source: Source) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(source)).await
}

async fn list_todos(State(source): State<Arc<Source>>) -> Response {
    match source.as_ref() {
        Source::Todos(todos) => {
            tracing::debug!(count = todos.len(), "serving todos");
            Json(todos.clone()).into_response()
        }
        Source::Fail(status) => {
            tracing::debug!(%status, "failing request");
            (*status, "simulated failure").into_response()
        }
        Source::Garbage(body) => (StatusCode::OK, body.clone()).into_response(),
    }
}
