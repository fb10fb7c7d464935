//! Error type shared by the rack builder, the word store and the service
//!
//! Every variant is a recoverable, caller-reportable condition.

use thiserror::Error;

/// Errors returned by rack construction and word store operations
#[derive(Debug, Error)]
pub enum Error {
    /// A rack was built from the wrong number of letters
    #[error("Rack must contain exactly 7 letters, got {0}")]
    InvalidInput(usize),

    /// A word's normalized length is outside the stored range
    #[error("Word must be between 3 and 7 letters, got {0}")]
    InvalidLength(usize),

    /// A word contains something other than letters
    #[error("Word '{0}' contains non-alphabetic characters")]
    InvalidCharacters(String),

    /// `create` or `update` collided with an existing word
    #[error("Word '{0}' already exists")]
    DuplicateWord(String),

    /// `update` or `delete` targeted a word that is not stored
    #[error("Word '{0}' not found")]
    NotFound(String),

    #[error("Word list I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for crate operations
pub type Result<T> = std::result::Result<T, Error>;
