use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};

use almanac_store::{
    FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, RedisPreferenceStore,
};

const DEFAULT_PREFS_PATH: &str = "almanac-preferences.json";
const DEFAULT_REDIS_KEY_PREFIX: &str = "almanac";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    File,
    Redis,
    Memory,
}

impl StoreBackend {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "file" => Some(Self::File),
            "redis" => Some(Self::Redis),
            "memory" | "mem" => Some(Self::Memory),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub backend: StoreBackend,
    pub prefs_path: PathBuf,
    pub redis_url: Option<String>,
    pub redis_key_prefix: String,
    pub endpoint: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let backend = match env::var("ALMANAC_STORE") {
            Ok(raw) => StoreBackend::parse(&raw).unwrap_or_else(|| {
                warn!(value = %raw, "unknown ALMANAC_STORE value; using the file store");
                StoreBackend::File
            }),
            Err(_) => StoreBackend::File,
        };

        Self {
            backend,
            prefs_path: env_non_empty("ALMANAC_PREFS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PREFS_PATH)),
            redis_url: env_non_empty("REDIS_URL"),
            redis_key_prefix: env_non_empty("REDIS_KEY_PREFIX")
                .unwrap_or_else(|| DEFAULT_REDIS_KEY_PREFIX.to_owned()),
            endpoint: env_non_empty("ALMANAC_ENDPOINT"),
        }
    }
}

/// Open the configured preference backend, falling back to the file store
/// when Redis is selected but unusable.
pub async fn build_store(config: &AppConfig) -> Arc<dyn PreferenceStore> {
    match config.backend {
        StoreBackend::Memory => {
            info!("Using in-memory preferences; settings are lost on exit.");
            Arc::new(MemoryPreferenceStore::new())
        }
        StoreBackend::File => file_store(config),
        StoreBackend::Redis => {
            let Some(redis_url) = config.redis_url.as_deref() else {
                warn!(
                    "ALMANAC_STORE=redis but REDIS_URL is missing; continuing with the file store."
                );
                return file_store(config);
            };

            let prefix = config.redis_key_prefix.clone();
            let store = match RedisPreferenceStore::from_url(redis_url, prefix) {
                Ok(store) => store,
                Err(err) => {
                    warn!(
                        ?err,
                        "Failed to initialize Redis preferences; continuing with the file store."
                    );
                    return file_store(config);
                }
            };

            if let Err(err) = store.ping().await {
                warn!(?err, "Redis ping failed; continuing with the file store.");
                return file_store(config);
            }

            info!(key_prefix = %config.redis_key_prefix, "Redis preferences enabled.");
            Arc::new(store)
        }
    }
}

fn file_store(config: &AppConfig) -> Arc<dyn PreferenceStore> {
    info!(path = %config.prefs_path.display(), "Using file preferences.");
    Arc::new(FilePreferenceStore::new(&config.prefs_path))
}

fn env_non_empty(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use almanac_store::PreferenceStore;

    use super::{AppConfig, StoreBackend, build_store};

    #[test]
    fn parses_backend_names() {
        assert_eq!(StoreBackend::parse(""), Some(StoreBackend::File));
        assert_eq!(StoreBackend::parse(" FILE "), Some(StoreBackend::File));
        assert_eq!(StoreBackend::parse("redis"), Some(StoreBackend::Redis));
        assert_eq!(StoreBackend::parse("Memory"), Some(StoreBackend::Memory));
        assert_eq!(StoreBackend::parse("sqlite"), None);
    }

    #[tokio::test]
    async fn redis_without_url_falls_back_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            backend: StoreBackend::Redis,
            prefs_path: dir.path().join("prefs.json"),
            redis_url: None,
            redis_key_prefix: "almanac".to_owned(),
            endpoint: None,
        };

        let store = build_store(&config).await;
        store.set("zhipu_api_key", "sk-test").await.unwrap();
        assert!(config.prefs_path.exists());
    }
}
