//! In-memory key-value store - used by tests and throwaway sessions.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::StoreError;
use quill_core::ports::KeyValueStore;

/// In-memory store using a HashMap behind an async RwLock.
///
/// Note: Data is lost on process exit.
pub struct InMemoryKeyValueStore {
    store: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryKeyValueStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let store = self.store.read().await;
        Ok(store.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut store = self.store.write().await;
        store.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        let mut store = self.store.write().await;
        store.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get() {
        let kv = InMemoryKeyValueStore::new();
        kv.set("key1", "value1").await.unwrap();
        assert_eq!(kv.get("key1").await.unwrap(), Some("value1".to_string()));
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let kv = InMemoryKeyValueStore::new();
        kv.set("key1", "value1").await.unwrap();
        kv.set("key1", "value2").await.unwrap();
        assert_eq!(kv.get("key1").await.unwrap(), Some("value2".to_string()));
    }

    #[tokio::test]
    async fn test_delete() {
        let kv = InMemoryKeyValueStore::new();
        kv.set("key1", "value1").await.unwrap();
        kv.delete("key1").await.unwrap();
        assert_eq!(kv.get("key1").await.unwrap(), None);
        assert!(!kv.exists("key1").await.unwrap());
        kv.delete("never-set").await.unwrap();
    }
}
