//! The todo store: seed from the source, persist, edit in place.
//!
//! # Design
//! The store owns a `TodoClient`, an injected `Storage` and a list of change
//! listeners. Every operation reads the whole collection from storage and,
//! if it changes anything, writes the whole replacement back, so storage is
//! the only source of truth between calls. All mutations take `&mut self`;
//! there is no interior mutability and no locking.

use tracing::{debug, info, warn};

use crate::client::TodoClient;
use crate::config::{StoreConfig, MAX_TODOS};
use crate::error::{Result, StorageError};
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::storage::Storage;
use crate::types::{TodoCollection, TodoRecord};

type Listener = Box<dyn FnMut(&[TodoRecord])>;

/// Persisted to-do collection seeded from a remote source.
pub struct TodoStore<S: Storage> {
    client: TodoClient,
    storage: S,
    key: String,
    listeners: Vec<Listener>,
}

impl<S: Storage> TodoStore<S> {
    pub fn new(config: StoreConfig, storage: S) -> Self {
        Self {
            client: TodoClient::new(&config.base_url),
            storage,
            key: config.storage_key,
            listeners: Vec::new(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Register a listener called with the new collection after every write
    /// (`load`, `toggle`, `remove`, `clear`).
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&[TodoRecord]) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Request the host must execute before calling `apply_fetch`.
    pub fn fetch_request(&self) -> HttpRequest {
        self.client.build_fetch_todos()
    }

    /// Parse the source's response, keep the first `MAX_TODOS` records and
    /// replace the stored collection with them.
    ///
    /// On a `FetchError` storage is left untouched.
    pub fn apply_fetch(&mut self, response: HttpResponse) -> Result<TodoCollection> {
        let status = response.status;
        let mut todos = self.client.parse_fetch_todos(response)?;
        let received = todos.len();
        todos.truncate(MAX_TODOS);
        if has_duplicate_ids(&todos) {
            warn!("source returned duplicate todo ids");
        }

        self.write(&todos)?;
        info!(status, received, kept = todos.len(), "loaded todos");
        self.notify(&todos);
        Ok(todos)
    }

    /// Fetch through `transport`, then `apply_fetch`.
    pub fn load<T: Transport + ?Sized>(&mut self, transport: &T) -> Result<TodoCollection> {
        let request = self.fetch_request();
        debug!(url = %request.url, "fetching todos");
        let response = transport.execute(&request)?;
        self.apply_fetch(response)
    }

    /// The stored collection, or an empty one if nothing usable is stored.
    pub fn list(&self) -> TodoCollection {
        match self.read() {
            Ok(todos) => todos,
            Err(e) => {
                warn!(key = %self.key, error = %e, "stored todos unreadable, listing as empty");
                Vec::new()
            }
        }
    }

    /// Flip `completed` on the record with `id`. Unknown ids leave the
    /// collection unchanged.
    pub fn toggle(&mut self, id: i64) -> Result<()> {
        let todos = self.read()?;
        if !todos.iter().any(|t| t.id == id) {
            debug!(id, "toggle: no todo with this id");
        }
        let updated: TodoCollection = todos
            .into_iter()
            .map(|t| if t.id == id { t.toggled() } else { t })
            .collect();
        self.write(&updated)?;
        self.notify(&updated);
        Ok(())
    }

    /// Drop the record with `id`. Unknown ids leave the collection unchanged.
    pub fn remove(&mut self, id: i64) -> Result<()> {
        let mut todos = self.read()?;
        let before = todos.len();
        todos.retain(|t| t.id != id);
        if todos.len() == before {
            debug!(id, "remove: no todo with this id");
        }
        self.write(&todos)?;
        self.notify(&todos);
        Ok(())
    }

    /// Forget the stored collection.
    pub fn clear(&mut self) -> Result<()> {
        self.storage.remove_item(&self.key)?;
        info!(key = %self.key, "cleared todos");
        self.notify(&[]);
        Ok(())
    }

    fn read(&self) -> std::result::Result<TodoCollection, StorageError> {
        match self.storage.get_item(&self.key)? {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(|e| StorageError::Corrupt(e.to_string())),
        }
    }

    fn write(&mut self, todos: &[TodoRecord]) -> std::result::Result<(), StorageError> {
        let raw = serde_json::to_string(todos).map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.storage.set_item(&self.key, &raw)
    }

    fn notify(&mut self, todos: &[TodoRecord]) {
        for listener in &mut self.listeners {
            listener(todos);
        }
    }
}

fn has_duplicate_ids(todos: &[TodoRecord]) -> bool {
    let mut seen = std::collections::HashSet::with_capacity(todos.len());
    todos.iter().any(|t| !seen.insert(t.id))
}
