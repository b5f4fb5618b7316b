//! Key-value storage abstraction
//!
//! The task list persists as a single serialized value under one key, so
//! the storage layer is a plain get/set/remove interface with swappable
//! backends.

mod file;
mod kv;
mod memory;

pub use file::FileKvStore;
pub use kv::KvStore;
pub use memory::MemoryKvStore;
