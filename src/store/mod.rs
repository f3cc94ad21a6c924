//! Persistence layer — the preference blob and its backends.

pub mod json_file;
pub mod memory;
pub mod traits;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use traits::{PreferenceStore, Preferences};
