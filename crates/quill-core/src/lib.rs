//! # Quill Core
//!
//! The domain layer of Quill.
//! This crate contains the post model, the view-state controller and the
//! read models derived from it. It performs no I/O of its own: storage,
//! time and user confirmation come in through the traits in [`ports`].

pub mod controller;
pub mod dashboard;
pub mod domain;
pub mod error;
pub mod ports;
pub mod preview;

pub use controller::{BlogController, DeleteOutcome, SubmitOutcome};
pub use error::{DomainError, StoreError};
