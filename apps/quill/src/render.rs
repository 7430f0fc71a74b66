//! Turns controller state into view models and prints them.

use std::fmt::Write as _;

use chrono::{DateTime, Local, Utc};

use quill_core::BlogController;
use quill_core::dashboard::RECENT_WINDOW_DAYS;
use quill_core::domain::{EditMode, Post, View};
use quill_core::preview::content_preview;
use quill_shared::{
    ApiResponse, DashboardView, EditorView, LatestPost, ListView, PostSummary, Screen,
};

use crate::error::{AppError, AppResult};

/// Build the view model for whatever screen the controller is on.
pub fn screen(controller: &BlogController) -> Screen {
    match controller.view() {
        View::Dashboard => Screen::Dashboard(dashboard_view(controller)),
        View::List => Screen::List(list_view(controller.posts())),
        View::Editor => Screen::Editor(editor_view(controller)),
    }
}

fn dashboard_view(controller: &BlogController) -> DashboardView {
    let stats = controller.dashboard();
    DashboardView {
        total_posts: stats.total,
        recent_posts: stats.recent,
        latest: stats
            .latest
            .iter()
            .map(|post| LatestPost {
                id: post.id.to_string(),
                title: post.title.clone(),
                created_at: format_timestamp(post.created_at),
            })
            .collect(),
    }
}

fn list_view(posts: &[Post]) -> ListView {
    ListView {
        posts: posts.iter().map(summarize).collect(),
    }
}

fn summarize(post: &Post) -> PostSummary {
    PostSummary {
        id: post.id.to_string(),
        title: post.title.clone(),
        preview: content_preview(&post.content).into_owned(),
        created_at: format_timestamp(post.created_at),
        updated_at: post
            .was_edited()
            .then(|| format_timestamp(post.updated_at)),
    }
}

fn editor_view(controller: &BlogController) -> EditorView {
    let draft = controller.draft();
    let (heading, submit_label, editing_id) = match controller.mode() {
        EditMode::Composing => ("Create New Post", "Publish Post", None),
        EditMode::Editing(id) => ("Edit Post", "Update Post", Some(id.to_string())),
    };

    EditorView {
        heading: heading.to_string(),
        submit_label: submit_label.to_string(),
        can_cancel: editing_id.is_some(),
        editing_id,
        title: draft.title.clone(),
        content: draft.content.clone(),
    }
}

/// Timestamps are shown in local time.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// Plain-text rendering of a screen.
pub fn render_text(screen: &Screen) -> String {
    let mut out = String::new();
    match screen {
        Screen::Dashboard(view) => {
            let _ = writeln!(out, "== Dashboard ==");
            let _ = writeln!(out, "Total posts:  {}", view.total_posts);
            let _ = writeln!(
                out,
                "Recent posts: {} (last {} days)",
                view.recent_posts, RECENT_WINDOW_DAYS
            );
            let _ = writeln!(out);
            let _ = writeln!(out, "Latest posts");
            if view.latest.is_empty() {
                let _ = writeln!(out, "  No posts yet. Create your first post!");
            }
            for post in &view.latest {
                let _ = writeln!(out, "  {}  ({})", post.title, post.created_at);
            }
        }
        Screen::List(view) => {
            let _ = writeln!(out, "== All Blog Posts ==");
            if view.posts.is_empty() {
                let _ = writeln!(out, "No posts yet!");
                let _ = writeln!(out, "Start writing your first blog post.");
            }
            for post in &view.posts {
                let _ = writeln!(out);
                let _ = writeln!(out, "[{}] {}", post.id, post.title);
                for line in post.preview.lines() {
                    let _ = writeln!(out, "    {line}");
                }
                let _ = write!(out, "    Created: {}", post.created_at);
                if let Some(updated) = &post.updated_at {
                    let _ = write!(out, "  Updated: {updated}");
                }
                let _ = writeln!(out);
            }
        }
        Screen::Editor(view) => {
            let _ = writeln!(out, "== {} ==", view.heading);
            let _ = writeln!(out, "Title:   {}", view.title);
            let _ = writeln!(out, "Content:");
            for line in view.content.lines() {
                let _ = writeln!(out, "    {line}");
            }
            let _ = write!(out, "Actions: save ({})", view.submit_label);
            if view.can_cancel {
                let _ = write!(out, ", cancel");
            }
            let _ = writeln!(out);
        }
    }
    out
}

/// Where command results go: text for people, JSON for scripts.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// Print the controller's current screen, with an optional status line.
    pub fn show(&self, controller: &BlogController, message: Option<&str>) -> AppResult<()> {
        let screen = screen(controller);
        if self.json {
            let response = match message {
                Some(message) => ApiResponse::ok_with_message(screen, message),
                None => ApiResponse::ok(screen),
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
        } else {
            if let Some(message) = message {
                println!("{message}\n");
            }
            print!("{}", render_text(&screen));
        }
        Ok(())
    }

    pub fn note(&self, message: &str) {
        println!("{message}");
    }

    pub fn error(&self, err: &AppError) {
        if self.json {
            match serde_json::to_string_pretty(&err.to_response()) {
                Ok(json) => println!("{json}"),
                Err(e) => eprintln!("error: {err} ({e})"),
            }
        } else {
            eprintln!("error: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn post(content: &str) -> Post {
        Post::new(
            "Title".into(),
            content.into(),
            Utc.with_ymd_and_hms(2026, 10, 1, 8, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_empty_list_shows_empty_state() {
        let text = render_text(&Screen::List(list_view(&[])));
        assert!(text.contains("No posts yet!"));
        assert!(text.contains("Start writing your first blog post."));
    }

    #[test]
    fn test_summary_truncates_and_flags_edits() {
        let fresh = post(&"x".repeat(151));
        let mut edited = post("short");
        edited.revise(
            "Title".into(),
            "short".into(),
            edited.created_at + Duration::hours(1),
        );

        let fresh = summarize(&fresh);
        let edited = summarize(&edited);

        assert_eq!(fresh.preview, format!("{}...", "x".repeat(150)));
        assert!(fresh.updated_at.is_none());
        assert_eq!(edited.preview, "short");
        assert!(edited.updated_at.is_some());
    }

    #[test]
    fn test_list_text_shows_updated_only_when_edited() {
        let mut edited = post("body");
        edited.revise(
            "Edited".into(),
            "body".into(),
            edited.created_at + Duration::hours(1),
        );
        let text = render_text(&Screen::List(list_view(&[edited, post("body")])));

        assert_eq!(text.matches("Created:").count(), 2);
        assert_eq!(text.matches("Updated:").count(), 1);
    }

    #[test]
    fn test_editor_text_offers_cancel_only_when_editing() {
        let mut view = EditorView {
            heading: "Create New Post".into(),
            submit_label: "Publish Post".into(),
            editing_id: None,
            can_cancel: false,
            title: String::new(),
            content: String::new(),
        };
        assert!(!render_text(&Screen::Editor(view.clone())).contains("cancel"));

        view.can_cancel = true;
        assert!(render_text(&Screen::Editor(view)).contains("cancel"));
    }
}
