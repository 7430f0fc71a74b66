//! Post persistence on top of a [`KeyValueStore`].
//!
//! The collection is stored as one JSON array under a single key, and the
//! whole array is rewritten on every save.

use std::collections::HashSet;

use async_trait::async_trait;

use quill_core::StoreError;
use quill_core::domain::Post;
use quill_core::ports::{KeyValueStore, PostStore};

/// Key the collection is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "blogPosts";

pub struct KeyValuePostStore<K> {
    kv: K,
    key: String,
    strict: bool,
}

impl<K: KeyValueStore> KeyValuePostStore<K> {
    pub fn new(kv: K) -> Self {
        Self {
            kv,
            key: DEFAULT_STORAGE_KEY.to_string(),
            strict: false,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Fail `load` on malformed data instead of treating it as empty.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn inner(&self) -> &K {
        &self.kv
    }

    fn malformed(&self, err: StoreError) -> Result<Vec<Post>, StoreError> {
        if self.strict {
            return Err(err);
        }
        tracing::warn!(key = %self.key, error = %err, "Stored posts are malformed; starting empty");
        Ok(Vec::new())
    }
}

/// Records must have unique ids, non-blank text and
/// `updated_at >= created_at`.
fn check_stored(posts: &[Post]) -> Result<(), String> {
    let mut seen = HashSet::with_capacity(posts.len());
    for post in posts {
        if !seen.insert(post.id) {
            return Err(format!("duplicate post id {}", post.id));
        }
        if post.title.trim().is_empty() || post.content.trim().is_empty() {
            return Err(format!("post {} has a blank title or content", post.id));
        }
        if post.updated_at < post.created_at {
            return Err(format!("post {} was updated before it was created", post.id));
        }
    }
    Ok(())
}

#[async_trait]
impl<K: KeyValueStore> PostStore for KeyValuePostStore<K> {
    async fn load(&self) -> Result<Vec<Post>, StoreError> {
        let raw = match self.kv.get(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Ok(Vec::new()),
            Err(e @ StoreError::Serialization(_)) => return self.malformed(e),
            Err(e) => return Err(e),
        };

        let posts = match serde_json::from_str::<Vec<Post>>(&raw) {
            Ok(posts) => posts,
            Err(e) => return self.malformed(StoreError::Serialization(e.to_string())),
        };

        match check_stored(&posts) {
            Ok(()) => Ok(posts),
            Err(msg) => self.malformed(StoreError::Serialization(msg)),
        }
    }

    async fn save(&self, posts: &[Post]) -> Result<(), StoreError> {
        let raw =
            serde_json::to_string(posts).map_err(|e| StoreError::Serialization(e.to_string()))?;
        self.kv.set(&self.key, &raw).await?;
        tracing::debug!(key = %self.key, count = posts.len(), "Posts saved");
        Ok(())
    }
}
