#![forbid(unsafe_code)]

pub mod bank_source;
pub mod flat_file;
pub mod repository;

pub use bank_source::{EmbeddedBank, FileBank};
pub use flat_file::FlatFileScoreStore;
pub use repository::{BankSource, InMemoryScoreStore, ScoreRepository, Storage, StorageError};
