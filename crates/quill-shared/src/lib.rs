//! # Quill Shared
//!
//! Serializable view models shared by Quill front ends.
//! Plain data only: timestamps and ids are pre-formatted strings so this
//! crate can be compiled for any target without pulling in the domain.

pub mod dto;
pub mod response;

pub use dto::{DashboardView, EditorView, LatestPost, ListView, PostSummary, Screen};
pub use response::{ApiResponse, ErrorResponse};
