mod file_store;
mod memory_store;
mod redis_store;

use std::fmt::Debug;

use async_trait::async_trait;

pub use file_store::FilePreferenceStore;
pub use memory_store::MemoryPreferenceStore;
pub use redis_store::RedisPreferenceStore;

/// Errors surfaced by preference backends.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("preference io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("preference file is not a valid json object: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("redis preference store error: {0}")]
    Redis(String),
}

/// Opaque string key-value capability used for user preferences.
///
/// A missing key is `Ok(None)`, never an error. Keys are independent of each
/// other and a `set` overwrites whatever was stored before.
#[async_trait]
pub trait PreferenceStore: Debug + Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
