//! Daily challenge persistence
//!
//! One record per calendar day, keyed by the day index. A record is created
//! by the first guess of the day, grows with each later guess, and is
//! finalized once the round ends. Records are never deleted.

use super::backend::KeyValueStore;
use crate::core::Word;
use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use tracing::{debug, info, warn};

const KEY_PREFIX: &str = "daily-";

/// Outcome tag stored with a daily record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl RecordStatus {
    #[must_use]
    pub const fn is_final(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InProgress => "in-progress",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(name)
    }
}

/// Persisted progress for one day's puzzle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub day: i64,
    pub guesses: Vec<String>,
    #[serde(default)]
    pub status: RecordStatus,
}

impl DailyRecord {
    #[must_use]
    pub const fn new(day: i64) -> Self {
        Self {
            day,
            guesses: Vec::new(),
            status: RecordStatus::InProgress,
        }
    }
}

/// Daily records on top of any key-value backend
///
/// Cloning shares the same backend.
#[derive(Clone)]
pub struct DailyStore {
    backend: Rc<dyn KeyValueStore>,
}

impl fmt::Debug for DailyStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DailyStore").finish_non_exhaustive()
    }
}

impl DailyStore {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Rc::new(backend),
        }
    }

    fn key(day: i64) -> String {
        format!("{KEY_PREFIX}{day}")
    }

    /// Read the record for `day`, if one exists
    ///
    /// # Errors
    ///
    /// Returns `Storage` or `Serialization` if the record cannot be read back.
    pub fn load(&self, day: i64) -> Result<Option<DailyRecord>, GameError> {
        let Some(raw) = self.backend.get(&Self::key(day))? else {
            return Ok(None);
        };
        let record = serde_json::from_str(&raw)?;
        Ok(Some(record))
    }

    fn save(&self, record: &DailyRecord) -> Result<(), GameError> {
        let raw = serde_json::to_string(record)?;
        self.backend.set(&Self::key(record.day), &raw)?;
        Ok(())
    }

    /// Like `load`, but an unreadable record counts as absent so the next
    /// write replaces it
    fn load_for_update(&self, day: i64) -> Result<Option<DailyRecord>, GameError> {
        match self.load(day) {
            Err(GameError::Serialization(e)) => {
                warn!(day, error = %e, "Replacing unreadable daily record");
                Ok(None)
            }
            other => other,
        }
    }

    /// Append a guess, creating an in-progress record on the first guess of the day
    ///
    /// # Errors
    ///
    /// Returns `RecordConflict` if the day is already finalized, or a storage error.
    /// A stored record that no longer parses is replaced.
    pub fn append_guess(&self, day: i64, guess: &Word) -> Result<DailyRecord, GameError> {
        let mut record = self
            .load_for_update(day)?
            .unwrap_or_else(|| DailyRecord::new(day));
        if record.status.is_final() {
            return Err(GameError::RecordConflict {
                day,
                stored: record.status,
                requested: RecordStatus::InProgress,
            });
        }

        record.guesses.push(guess.text().to_string());
        self.save(&record)?;
        debug!(day, guess = %guess, count = record.guesses.len(), "Checkpointed daily guess");
        Ok(record)
    }

    /// Set the final status for `day`
    ///
    /// Re-finalizing with the same status is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `RecordConflict` if the record already holds a different final
    /// status, or a storage error.
    pub fn finalize(&self, day: i64, status: RecordStatus) -> Result<(), GameError> {
        let mut record = match self.load_for_update(day)? {
            Some(record) => record,
            None => {
                warn!(day, %status, "Finalizing a day with no recorded guesses");
                DailyRecord::new(day)
            }
        };

        if record.status == status {
            return Ok(());
        }
        if record.status.is_final() {
            return Err(GameError::RecordConflict {
                day,
                stored: record.status,
                requested: status,
            });
        }

        record.status = status;
        self.save(&record)?;
        info!(day, %status, guesses = record.guesses.len(), "Finalized daily record");
        Ok(())
    }

    /// Every stored daily record, oldest day first
    ///
    /// Unreadable records are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the backend cannot list its keys.
    pub fn history(&self) -> Result<Vec<DailyRecord>, GameError> {
        let mut days: Vec<i64> = self
            .backend
            .keys()?
            .iter()
            .filter_map(|key| key.strip_prefix(KEY_PREFIX)?.parse().ok())
            .collect();
        days.sort_unstable();

        let mut records = Vec::with_capacity(days.len());
        for day in days {
            match self.load(day) {
                Ok(Some(record)) => records.push(record),
                Ok(None) => {}
                Err(e) => warn!(day, error = %e, "Skipping unreadable daily record"),
            }
        }
        Ok(records)
    }
}
