use async_trait::async_trait;

use crate::domain::Post;
use crate::error::StoreError;

/// Persistence for the whole post collection.
///
/// There is no incremental update: every mutation writes the full list back.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Load the stored collection, newest first. Returns an empty list when
    /// nothing has been stored yet.
    async fn load(&self) -> Result<Vec<Post>, StoreError>;

    /// Replace the stored collection with `posts`.
    async fn save(&self, posts: &[Post]) -> Result<(), StoreError>;
}
