//! Todo store core: seeds a small to-do list from a remote source, keeps it
//! in a key-value store, and applies local edits.
//!
//! # Overview
//! `TodoStore` is the single component. It builds the fetch request and
//! parses the response without touching the network (host-does-IO pattern);
//! a `Transport` supplied by the host performs the round-trip when `load` is
//! used. Persistence goes through the `Storage` trait, so the same store runs
//! on top of `MemoryStorage` in tests and `FileStorage` in the CLI.
//!
//! # Design
//! - `TodoClient` is stateless. It holds only `base_url`.
//! - The fetch is split into `build_fetch_todos` (produces request) and
//!   `parse_fetch_todos` (consumes response), so the I/O boundary is explicit.
//! - At most `MAX_TODOS` records are persisted per load; local edits only
//!   flip flags or shrink the collection.
//! - Every write notifies subscribed listeners with the new collection.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod storage;
pub mod store;
pub mod types;

pub use client::TodoClient;
pub use config::{StoreConfig, DEFAULT_BASE_URL, DEFAULT_STORAGE_KEY, MAX_TODOS};
pub use error::{FetchError, Result, StorageError, StoreError};
pub use http::{HttpRequest, HttpResponse, Transport};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::TodoStore;
pub use types::{TodoCollection, TodoRecord};
