//! Storage layer: entry types, the store trait, and the JSON file backend.

mod id;
mod json_file;
mod timestamp;
mod traits;
mod types;

pub use id::generate_id;
pub use json_file::{JsonFileStore, StoreConfig, DEFAULT_STORE_PATH};
pub use timestamp::parse_timestamp;
pub use traits::EntryStore;
pub use types::{DiaryData, Entry, EntryPatch, NewEntry};
