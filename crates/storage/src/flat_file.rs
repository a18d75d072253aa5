//! Flat-file scoreboard storage.
//!
//! One line per entry, `date,time,score`, comma-separated, no header and
//! no escaping. Appending reads the whole log back and rewrites it with
//! the new entry last; the net effect is a pure append, but concurrent
//! writers would clobber each other. A single active session per process
//! is assumed.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use quiz_core::model::ScoreEntry;

use crate::repository::{ScoreRepository, StorageError};

/// Scoreboard log stored as plain text at a fixed path.
#[derive(Debug, Clone)]
pub struct FlatFileScoreStore {
    path: PathBuf,
}

impl FlatFileScoreStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Probe whether the log can be opened for writing, creating it if it
    /// does not exist yet, without touching its contents.
    fn check_writable(&self) -> Result<(), StorageError> {
        match fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)
        {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                Err(StorageError::WriteDenied(self.path.display().to_string()))
            }
            Err(e) => Err(StorageError::Io(e.to_string())),
        }
    }
}

fn entry_to_line(entry: &ScoreEntry) -> String {
    format!("{},{},{}", entry.date(), entry.time(), entry.score())
}

fn entry_from_line(line: &str) -> Option<ScoreEntry> {
    let mut fields = line.split(',');
    let (Some(date), Some(time), Some(score), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return None;
    };
    Some(ScoreEntry::from_parts(date, time, score))
}

impl ScoreRepository for FlatFileScoreStore {
    fn append(&self, entry: &ScoreEntry) -> Result<(), StorageError> {
        self.check_writable()?;

        let mut entries = self.load_history()?;
        entries.push(entry.clone());
        let text = entries
            .iter()
            .map(entry_to_line)
            .collect::<Vec<_>>()
            .join("\n");

        fs::write(&self.path, text).map_err(|e| match e.kind() {
            ErrorKind::PermissionDenied => {
                StorageError::WriteDenied(self.path.display().to_string())
            }
            _ => StorageError::Io(e.to_string()),
        })
    }

    fn load_history(&self) -> Result<Vec<ScoreEntry>, StorageError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StorageError::Io(e.to_string())),
        };

        Ok(text
            .lines()
            .filter(|line| !line.is_empty())
            .filter_map(entry_from_line)
            .collect())
    }
}
