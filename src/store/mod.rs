//! Word storage
//!
//! The search core only needs a [`WordSource`] to iterate; administrative
//! changes go through a [`WordStore`]. Storage technology lives behind these
//! traits. [`MemoryStore`] is the in-process implementation, paired with the
//! plain-text [`loader`] for persistence and the embedded [`DICTIONARY`] seed.

mod embedded;
pub mod loader;
mod memory;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
pub use memory::MemoryStore;

use crate::core::Word;
use crate::error::Result;

/// Something that can yield every currently stored word
pub trait WordSource {
    /// A consistent copy of all stored words, in storage order
    ///
    /// Concurrent writers must not affect a snapshot once it is taken.
    fn snapshot(&self) -> Vec<Word>;
}

/// Administrative changes to the stored word list
///
/// Words arrive already validated and in canonical case.
pub trait WordStore: WordSource {
    /// Insert a new word at the end of the list
    ///
    /// # Errors
    /// `Error::DuplicateWord` if the word is already stored.
    fn create(&self, word: Word) -> Result<Word>;

    /// Replace `old` with `new`, keeping its position
    ///
    /// # Errors
    /// `Error::NotFound` if `old` is not stored, `Error::DuplicateWord` if
    /// `new` is a different word that is already stored.
    fn update(&self, old: &Word, new: Word) -> Result<Word>;

    /// Remove a word
    ///
    /// # Errors
    /// `Error::NotFound` if the word is not stored.
    fn delete(&self, word: &Word) -> Result<()>;
}

impl WordSource for [Word] {
    fn snapshot(&self) -> Vec<Word> {
        self.to_vec()
    }
}

impl WordSource for Vec<Word> {
    fn snapshot(&self) -> Vec<Word> {
        self.clone()
    }
}
