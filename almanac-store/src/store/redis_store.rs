use async_trait::async_trait;
use deadpool_redis::{Config, Connection, Pool, Runtime};
use redis::AsyncCommands;

use super::{PreferenceStore, StoreError};

/// Preferences stored as plain Redis strings under `<prefix>:<key>`.
#[derive(Clone, Debug)]
pub struct RedisPreferenceStore {
    pool: Pool,
    key_prefix: String,
}

impl RedisPreferenceStore {
    pub fn from_url(redis_url: &str, prefix: impl Into<String>) -> Result<Self, StoreError> {
        let config = Config::from_url(redis_url);
        let pool = config
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|e| StoreError::Redis(format!("failed to create redis pool: {e}")))?;

        Ok(Self {
            pool,
            key_prefix: prefix.into(),
        })
    }

    pub fn key(&self, suffix: impl AsRef<str>) -> String {
        format!("{}:{}", self.key_prefix, suffix.as_ref())
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.connection().await?;
        redis::cmd("PING")
            .query_async::<String>(&mut conn)
            .await
            .map_err(|e| StoreError::Redis(format!("redis PING failed: {e}")))?;

        Ok(())
    }

    async fn connection(&self) -> Result<Connection, StoreError> {
        self.pool
            .get()
            .await
            .map_err(|e| StoreError::Redis(format!("failed to get redis connection: {e}")))
    }
}

#[async_trait]
impl PreferenceStore for RedisPreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let key = self.key(key);
        let mut conn = self.connection().await?;

        conn.get::<_, Option<String>>(&key)
            .await
            .map_err(|e| StoreError::Redis(format!("redis GET failed for key `{key}`: {e}")))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let key = self.key(key);
        let mut conn = self.connection().await?;

        conn.set::<_, _, ()>(&key, value)
            .await
            .map_err(|e| StoreError::Redis(format!("redis SET failed for key `{key}`: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::RedisPreferenceStore;

    #[test]
    fn keys_are_namespaced_by_prefix() {
        let store = RedisPreferenceStore::from_url("redis://127.0.0.1:6379", "almanac").unwrap();
        assert_eq!(store.key("zhipu_api_key"), "almanac:zhipu_api_key");
        assert_eq!(store.key("system_prompt"), "almanac:system_prompt");
    }
}
