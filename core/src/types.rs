//! Domain DTOs for the todo source and the persisted collection.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Fields the store does not interpret (the source's `userId`, for example)
//! are captured in `extra` and written back verbatim, so a persisted record
//! is exactly what the source returned.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single todo item as returned by the source and kept in storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TodoRecord {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    #[serde(flatten, default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl TodoRecord {
    pub fn new(id: i64, title: impl Into<String>, completed: bool) -> Self {
        Self {
            id,
            title: title.into(),
            completed,
            extra: Map::new(),
        }
    }

    /// Copy of this record with `completed` flipped.
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

/// The ordered sequence of records currently persisted.
pub type TodoCollection = Vec<TodoRecord>;
