pub mod memory;

pub use memory::InMemoryUrlStore;
pub use stubby_core::{StorageError, UrlEntry, UrlStore};
