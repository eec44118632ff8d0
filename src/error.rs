//! Error types for board construction and word-list access.

use std::path::PathBuf;

use thiserror::Error;

/// A board was populated with the wrong number of chunks.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("chunk count {actual} does not match board size ({expected} cells)")]
pub struct BoardSizeError {
    /// Cell count the board shape requires.
    pub expected: usize,
    /// Chunk count actually supplied.
    pub actual: usize,
}

/// A word list could not be loaded or rewritten.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The word list file does not exist.
    #[error("word list not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The word list exists but reading or writing it failed.
    #[error("word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
