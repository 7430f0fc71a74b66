//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`:
//! key-value storage (JSON file or in-memory), the post store built on it,
//! the system clock and non-interactive confirmation.

pub mod clock;
pub mod confirm;
pub mod kv;
pub mod store;

pub use clock::SystemClock;
pub use confirm::FixedConfirm;
pub use kv::{FileKeyValueStore, InMemoryKeyValueStore};
pub use store::{DEFAULT_STORAGE_KEY, KeyValuePostStore};
