//! Persistence for daily challenge progress
//!
//! The storage medium is pluggable: anything implementing [`KeyValueStore`]
//! can hold the JSON-encoded [`DailyRecord`]s.

mod backend;
mod daily;

pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use daily::{DailyRecord, DailyStore, RecordStatus};
