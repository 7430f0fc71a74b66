//! Ports - trait definitions for external collaborators.
//! These are the "interfaces" that infrastructure must implement.

mod clock;
mod confirm;
mod kv;
mod post_store;

pub use clock::Clock;
pub use confirm::{Confirm, DELETE_PROMPT};
pub use kv::KeyValueStore;
pub use post_store::PostStore;
