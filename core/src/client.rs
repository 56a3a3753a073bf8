//! Stateless HTTP request builder and response parser for the todo source.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. The fetch is split into `build_fetch_todos`, which produces an
//! `HttpRequest`, and `parse_fetch_todos`, which consumes an `HttpResponse`.
//! The caller executes the actual HTTP round-trip, keeping the core
//! deterministic and free of I/O dependencies. Truncation to `MAX_TODOS` is
//! the store's job; the client returns whatever the source sent.

use crate::error::FetchError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::TodoRecord;

/// Synchronous, stateless client for the todo source.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_fetch_todos(&self) -> HttpRequest {
        HttpRequest {
            url: format!("{}/todos", self.base_url),
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }

    pub fn parse_fetch_todos(&self, response: HttpResponse) -> Result<Vec<TodoRecord>, FetchError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| FetchError::Malformed(e.to_string()))
    }
}

/// Map any status outside the success range to `FetchError::Status`.
fn check_status(response: &HttpResponse) -> Result<(), FetchError> {
    if response.is_success() {
        return Ok(());
    }
    Err(FetchError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}
