use std::collections::BTreeMap;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use super::{PreferenceStore, StoreError};

/// Preferences kept as a single JSON object on disk.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FilePreferenceStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut raw: OsString = self.path.clone().into_os_string();
        raw.push(".tmp");
        PathBuf::from(raw)
    }

    async fn load(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(BTreeMap::new());
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Replace the file through a temp file + rename so readers never see a
    /// partially written object.
    async fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let payload = serde_json::to_vec_pretty(entries)?;
        let temp_path = self.temp_path();
        tokio::fs::write(&temp_path, payload).await?;
        tokio::fs::rename(&temp_path, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl PreferenceStore for FilePreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut entries = self.load().await?;
        Ok(entries.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.load().await?;
        entries.insert(key.to_owned(), value.to_owned());
        self.persist(&entries).await?;

        debug!(path = %self.path.display(), key, "preference saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::FilePreferenceStore;
    use crate::store::{PreferenceStore, StoreError};

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePreferenceStore::new(dir.path().join("prefs.json"));

        assert_eq!(store.get("zhipu_api_key").await.unwrap(), None);
    }

    #[tokio::test]
    async fn values_survive_reopening() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let store = FilePreferenceStore::new(&path);
        store.set("system_prompt", "你好\n世界").await.unwrap();
        store.set("zhipu_api_key", "sk-test").await.unwrap();
        drop(store);

        let reopened = FilePreferenceStore::new(&path);
        assert_eq!(
            reopened.get("system_prompt").await.unwrap().as_deref(),
            Some("你好\n世界")
        );
        assert_eq!(
            reopened.get("zhipu_api_key").await.unwrap().as_deref(),
            Some("sk-test")
        );
        assert!(!reopened.temp_path().exists());
    }

    #[tokio::test]
    async fn set_overwrites_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePreferenceStore::new(dir.path().join("prefs.json"));

        store.set("zhipu_api_key", "old").await.unwrap();
        store.set("zhipu_api_key", "new").await.unwrap();

        assert_eq!(
            store.get("zhipu_api_key").await.unwrap().as_deref(),
            Some("new")
        );
    }

    #[tokio::test]
    async fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FilePreferenceStore::new(&path);
        let err = store.get("zhipu_api_key").await.unwrap_err();
        assert!(matches!(err, StoreError::Serde(_)));

        let err = store.set("zhipu_api_key", "sk").await.unwrap_err();
        assert!(matches!(err, StoreError::Serde(_)));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "not json");
    }
}
