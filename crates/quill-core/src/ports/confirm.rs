use async_trait::async_trait;

/// Prompt shown before a post is deleted.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this post?";

/// A yes/no question put to the user before a destructive action.
#[async_trait]
pub trait Confirm: Send + Sync {
    async fn confirm(&self, prompt: &str) -> bool;
}
