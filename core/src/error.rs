//! Error types for the todo store.
//!
//! # Design
//! `FetchError` covers everything that can go wrong between issuing the
//! request and holding a parsed collection; when it is returned, storage has
//! not been touched. `StorageError` only comes from real backends such as
//! `FileStorage`. Unmatched ids on toggle/remove are not errors at all.

use thiserror::Error;

/// Failures of the remote fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, connect, TLS, read).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The source answered with a status outside 200..=299.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The body was not a JSON array of todo records.
    #[error("malformed response body: {0}")]
    Malformed(String),
}

impl FetchError {
    /// Status code of the response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Failures of a persistent storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("invalid storage key {0:?}")]
    InvalidKey(String),

    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The stored value is not a serialized collection.
    #[error("stored collection is corrupt: {0}")]
    Corrupt(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// Errors returned by `TodoStore` operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type Result<T> = std::result::Result<T, StoreError>;
