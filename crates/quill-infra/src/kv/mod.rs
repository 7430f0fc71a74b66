//! Key-value storage implementations - a JSON file and an in-memory map.

mod file;
mod memory;

pub use file::FileKeyValueStore;
pub use memory::InMemoryKeyValueStore;
