//! Stored daily records

use crate::error::GameError;
use crate::storage::{DailyRecord, DailyStore, FileStore};
use std::path::Path;

/// Every daily record under `store_dir`, oldest first
///
/// # Errors
///
/// Returns `Storage` if the directory exists but cannot be listed.
pub fn load_history(store_dir: &Path) -> Result<Vec<DailyRecord>, GameError> {
    DailyStore::new(FileStore::new(store_dir)).history()
}
