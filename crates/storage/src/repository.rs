use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use thiserror::Error;

use quiz_core::model::ScoreEntry;

use crate::bank_source::EmbeddedBank;
use crate::flat_file::FlatFileScoreStore;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("question bank resource not found: {0}")]
    ResourceNotFound(String),

    #[error("scoreboard not writable: {0}")]
    WriteDenied(String),

    #[error("io error: {0}")]
    Io(String),
}

/// Supplies the raw question bank text.
///
/// Loading the bank is the one asynchronous operation in the system; the
/// caller suspends until the whole resource has been read.
#[async_trait]
pub trait BankSource: Send + Sync {
    /// Read the bank text in full.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::ResourceNotFound` if the resource is missing
    /// or unreadable. There is no fallback bank; session start fails.
    async fn load_text(&self) -> Result<String, StorageError>;
}

/// Repository contract for the scoreboard log.
///
/// Entries are only ever appended; nothing rewrites or deletes them, and
/// the log has no size cap.
pub trait ScoreRepository: Send + Sync {
    /// Store one entry after all previously stored entries.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::WriteDenied` if the log cannot be written.
    fn append(&self, entry: &ScoreEntry) -> Result<(), StorageError>;

    /// All stored entries in write order.
    ///
    /// A missing log yields an empty history; lines that do not split into
    /// exactly three comma-separated fields are skipped.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if an existing log cannot be read.
    fn load_history(&self) -> Result<Vec<ScoreEntry>, StorageError>;

    /// History sorted most recent first: descending by date, ties broken
    /// descending by time. The writer's zero-padded fields make this string
    /// comparison chronological.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`ScoreRepository::load_history`].
    fn load_sorted(&self) -> Result<Vec<ScoreEntry>, StorageError> {
        let mut entries = self.load_history()?;
        entries.sort_by(|a, b| b.sort_key().cmp(&a.sort_key()));
        Ok(entries)
    }
}

/// In-memory score store for tests and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryScoreStore {
    entries: Arc<Mutex<Vec<ScoreEntry>>>,
    deny_writes: bool,
}

impl InMemoryScoreStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that refuses every append, for exercising the write-denied
    /// recovery path.
    #[must_use]
    pub fn read_only() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
            deny_writes: true,
        }
    }
}

impl ScoreRepository for InMemoryScoreStore {
    fn append(&self, entry: &ScoreEntry) -> Result<(), StorageError> {
        if self.deny_writes {
            return Err(StorageError::WriteDenied("store is read-only".into()));
        }
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Io(e.to_string()))?;
        guard.push(entry.clone());
        Ok(())
    }

    fn load_history(&self) -> Result<Vec<ScoreEntry>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Io(e.to_string()))?;
        Ok(guard.clone())
    }
}

/// Aggregates the bank source and score repository behind trait objects so
/// backends can be swapped without touching the services layer.
#[derive(Clone)]
pub struct Storage {
    pub bank: Arc<dyn BankSource>,
    pub scores: Arc<dyn ScoreRepository>,
}

impl Storage {
    /// Embedded bank plus an in-memory scoreboard.
    #[must_use]
    pub fn in_memory(bank_text: &'static str) -> Self {
        Self {
            bank: Arc::new(EmbeddedBank::new(bank_text)),
            scores: Arc::new(InMemoryScoreStore::new()),
        }
    }

    /// Embedded bank plus a flat-file scoreboard at `scoreboard_path`.
    #[must_use]
    pub fn bundled(bank_text: &'static str, scoreboard_path: impl Into<PathBuf>) -> Self {
        Self {
            bank: Arc::new(EmbeddedBank::new(bank_text)),
            scores: Arc::new(FlatFileScoreStore::new(scoreboard_path)),
        }
    }
}
