//! View-state controller.
//!
//! [`BlogController`] owns everything the front end shows: the post
//! collection, the active [`View`], the editor [`Draft`] and whether that
//! draft composes a new post or edits an existing one. Each operation runs
//! to completion, persisting through the [`PostStore`] before it returns.
//!
//! A failed save never rolls back the in-memory mutation. The error is
//! logged and handed back to the caller; the next successful save writes the
//! whole collection again.

use std::sync::Arc;

use crate::dashboard::DashboardStats;
use crate::domain::{Draft, EditMode, Post, PostCollection, PostId, View};
use crate::error::{DomainError, StoreError};
use crate::ports::{Clock, Confirm, DELETE_PROMPT, PostStore};

/// Result of [`BlogController::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Title or content was blank. Nothing changed.
    Rejected,
    /// A new post was prepended.
    Created(PostId),
    /// The post being edited was revised.
    Updated(PostId),
    /// The post being edited no longer exists. The collection is unchanged.
    Stale(PostId),
}

/// Result of [`BlogController::delete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user did not confirm. Nothing changed.
    Declined,
    Removed(PostId),
    /// Confirmed, but no post had that id.
    Missing(PostId),
}

pub struct BlogController {
    posts: PostCollection,
    view: View,
    mode: EditMode,
    draft: Draft,
    store: Arc<dyn PostStore>,
    clock: Arc<dyn Clock>,
    confirm: Arc<dyn Confirm>,
}

impl BlogController {
    /// Load the stored collection and start on the dashboard.
    pub async fn open(
        store: Arc<dyn PostStore>,
        clock: Arc<dyn Clock>,
        confirm: Arc<dyn Confirm>,
    ) -> Result<Self, StoreError> {
        let posts = store.load().await?;
        tracing::debug!(count = posts.len(), "Loaded posts");

        Ok(Self {
            posts: PostCollection::from_stored(posts),
            view: View::default(),
            mode: EditMode::default(),
            draft: Draft::default(),
            store,
            clock,
            confirm,
        })
    }

    pub fn posts(&self) -> &[Post] {
        self.posts.as_slice()
    }

    pub fn find(&self, id: PostId) -> Option<&Post> {
        self.posts.get(id)
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditMode::Editing(_))
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.draft.content = content.into();
    }

    /// Dashboard figures as of the controller's clock.
    pub fn dashboard(&self) -> DashboardStats<'_> {
        DashboardStats::compute(self.posts.as_slice(), self.clock.now())
    }

    /// Switch screens. Draft and edit mode are left alone.
    pub fn navigate(&mut self, view: View) {
        self.view = view;
    }

    /// Open an empty editor for a new post.
    pub fn compose(&mut self) {
        self.mode = EditMode::Composing;
        self.draft.clear();
        self.view = View::Editor;
    }

    /// Load `id` into the editor.
    ///
    /// An unknown id leaves all state untouched and reports
    /// [`DomainError::NotFound`].
    pub fn begin_edit(&mut self, id: PostId) -> Result<(), DomainError> {
        let post = self.posts.get(id).ok_or(DomainError::NotFound {
            entity_type: "Post",
            id,
        })?;

        self.draft = Draft::new(post.title.clone(), post.content.clone());
        self.mode = EditMode::Editing(id);
        self.view = View::Editor;
        Ok(())
    }

    /// Drop the current edit target and empty the draft. The view stays put.
    pub fn cancel_edit(&mut self) {
        self.mode = EditMode::Composing;
        self.draft.clear();
    }

    /// Create or update a post from the draft, then show the list.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, StoreError> {
        let valid = match self.draft.validate() {
            Ok(valid) => valid,
            Err(e) => {
                tracing::debug!(error = %e, "Submit rejected");
                return Ok(SubmitOutcome::Rejected);
            }
        };

        let now = self.clock.now();
        let outcome = match self.mode {
            EditMode::Editing(id) => match self.posts.get_mut(id) {
                Some(post) => {
                    post.revise(valid.title, valid.content, now);
                    tracing::info!(post_id = %id, "Post updated");
                    SubmitOutcome::Updated(id)
                }
                None => {
                    tracing::warn!(post_id = %id, "Edited post no longer exists");
                    SubmitOutcome::Stale(id)
                }
            },
            EditMode::Composing => {
                let post = Post::new(valid.title, valid.content, now);
                let id = post.id;
                self.posts.prepend(post);
                tracing::info!(post_id = %id, "Post created");
                SubmitOutcome::Created(id)
            }
        };

        self.mode = EditMode::Composing;
        self.draft.clear();
        self.view = View::List;

        self.persist().await?;
        Ok(outcome)
    }

    /// Delete `id` after the user confirms.
    pub async fn delete(&mut self, id: PostId) -> Result<DeleteOutcome, StoreError> {
        if !self.confirm.confirm(DELETE_PROMPT).await {
            tracing::debug!(post_id = %id, "Delete declined");
            return Ok(DeleteOutcome::Declined);
        }

        let outcome = match self.posts.remove(id) {
            Some(_) => {
                tracing::info!(post_id = %id, "Post deleted");
                DeleteOutcome::Removed(id)
            }
            None => DeleteOutcome::Missing(id),
        };

        self.persist().await?;
        Ok(outcome)
    }

    async fn persist(&self) -> Result<(), StoreError> {
        self.store.save(self.posts.as_slice()).await.inspect_err(|e| {
            tracing::error!(error = %e, count = self.posts.len(), "Failed to save posts");
        })
    }
}
