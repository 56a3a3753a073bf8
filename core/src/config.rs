//! Store configuration.

use serde::{Deserialize, Serialize};

/// Public demo API serving the seed list.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Storage key the collection is persisted under.
pub const DEFAULT_STORAGE_KEY: &str = "todos_20";

/// Maximum number of records kept from a single load.
pub const MAX_TODOS: usize = 20;

/// Where the store fetches from and which key it persists under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub base_url: String,
    pub storage_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl StoreConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_storage_key(mut self, storage_key: impl Into<String>) -> Self {
        self.storage_key = storage_key.into();
        self
    }
}
