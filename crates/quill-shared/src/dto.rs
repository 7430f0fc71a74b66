//! View models - what each screen shows.

use serde::{Deserialize, Serialize};

/// A post as shown on the dashboard's "latest" panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatestPost {
    pub id: String,
    pub title: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardView {
    pub total_posts: usize,
    pub recent_posts: usize,
    pub latest: Vec<LatestPost>,
}

/// A post as shown in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: String,
    pub title: String,
    /// Content, truncated for display.
    pub preview: String,
    pub created_at: String,
    /// Present only when the post was edited after creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListView {
    pub posts: Vec<PostSummary>,
}

/// The editor form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorView {
    pub heading: String,
    pub submit_label: String,
    /// Id of the post being edited; absent while composing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editing_id: Option<String>,
    pub can_cancel: bool,
    pub title: String,
    pub content: String,
}

/// Whichever screen is currently active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum Screen {
    Dashboard(DashboardView),
    List(ListView),
    Editor(EditorView),
}
