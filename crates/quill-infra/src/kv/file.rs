//! File-backed key-value store.
//!
//! All keys live in one JSON object on disk. Every write rewrites the whole
//! file through a sibling temp file that is renamed into place, so a crash
//! mid-write leaves the previous contents intact.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;

use quill_core::StoreError;
use quill_core::ports::KeyValueStore;

type Entries = BTreeMap<String, String>;

pub struct FileKeyValueStore {
    path: PathBuf,
    // Serializes read-modify-write cycles.
    write_lock: Mutex<()>,
}

impl FileKeyValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    async fn read_entries(&self) -> Result<Entries, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => return Err(e.into()),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Entries::new());
        }

        serde_json::from_slice(&bytes).map_err(|e| {
            StoreError::Serialization(format!("{}: {}", self.path.display(), e))
        })
    }

    /// Entries to start a write from. An unreadable file is moved aside
    /// rather than overwritten.
    async fn entries_for_write(&self) -> Result<Entries, StoreError> {
        match self.read_entries().await {
            Err(StoreError::Serialization(msg)) => {
                let backup = self.sibling(".corrupt");
                tracing::warn!(
                    error = %msg,
                    backup = %backup.display(),
                    "Store file is not valid JSON; moving it aside"
                );
                tokio::fs::rename(&self.path, &backup).await?;
                Ok(Entries::new())
            }
            other => other,
        }
    }

    async fn write_entries(&self, entries: &Entries) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_vec_pretty(entries)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        let tmp = self.sibling(".tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        tracing::trace!(path = %self.path.display(), keys = entries.len(), "Store file written");
        Ok(())
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name: OsString = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(suffix);
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut entries = self.read_entries().await?;
        Ok(entries.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.entries_for_write().await?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries).await
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.entries_for_write().await?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let kv = FileKeyValueStore::new(dir.path().join("store.json"));

        assert_eq!(kv.get("anything").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let kv = FileKeyValueStore::new(&path);
        kv.set("a", "1").await.unwrap();
        kv.set("b", "2").await.unwrap();
        drop(kv);

        let kv = FileKeyValueStore::new(&path);
        assert_eq!(kv.get("a").await.unwrap(), Some("1".to_string()));
        assert_eq!(kv.get("b").await.unwrap(), Some("2".to_string()));
        assert!(!dir.path().join("nested").join("store.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_delete_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let kv = FileKeyValueStore::new(dir.path().join("store.json"));
        kv.set("a", "1").await.unwrap();
        kv.set("b", "2").await.unwrap();

        kv.delete("a").await.unwrap();

        assert_eq!(kv.get("a").await.unwrap(), None);
        assert!(kv.exists("b").await.unwrap());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_reported_then_moved_aside() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, b"{ not json").unwrap();
        let kv = FileKeyValueStore::new(&path);

        assert!(matches!(
            kv.get("a").await,
            Err(StoreError::Serialization(_))
        ));

        kv.set("a", "1").await.unwrap();

        assert_eq!(kv.get("a").await.unwrap(), Some("1".to_string()));
        let backup = std::fs::read(dir.path().join("store.json.corrupt")).unwrap();
        assert_eq!(backup, b"{ not json");
    }
}
