//! In-memory word store
//!
//! Words are kept in insertion order alongside a hash index for duplicate
//! and existence checks. A read-write lock lets concurrent searches take
//! snapshots while mutations are serialized.

use super::{WordSource, WordStore};
use crate::core::Word;
use crate::error::{Error, Result};
use parking_lot::RwLock;
use rustc_hash::FxHashSet;

#[derive(Debug, Default)]
struct Inner {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

/// Thread-safe word list held in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from existing words, keeping the first of any duplicates
    #[must_use]
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let mut inner = Inner::default();
        for word in words {
            if inner.index.insert(word.clone()) {
                inner.words.push(word);
            }
        }

        Self {
            inner: RwLock::new(inner),
        }
    }

    /// Number of stored words
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().words.len()
    }

    /// True if no words are stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().words.is_empty()
    }
}

impl WordSource for MemoryStore {
    fn snapshot(&self) -> Vec<Word> {
        self.inner.read().words.clone()
    }
}

impl WordStore for MemoryStore {
    fn create(&self, word: Word) -> Result<Word> {
        let mut inner = self.inner.write();

        if !inner.index.insert(word.clone()) {
            return Err(Error::DuplicateWord(word.text().to_string()));
        }
        inner.words.push(word.clone());

        Ok(word)
    }

    fn update(&self, old: &Word, new: Word) -> Result<Word> {
        let mut inner = self.inner.write();

        let Some(position) = inner.words.iter().position(|w| w == old) else {
            return Err(Error::NotFound(old.text().to_string()));
        };

        if new != *old {
            if inner.index.contains(&new) {
                return Err(Error::DuplicateWord(new.text().to_string()));
            }
            inner.index.remove(old);
            inner.index.insert(new.clone());
            inner.words[position] = new.clone();
        }

        Ok(new)
    }

    fn delete(&self, word: &Word) -> Result<()> {
        let mut inner = self.inner.write();

        if !inner.index.remove(word) {
            return Err(Error::NotFound(word.text().to_string()));
        }
        inner.words.retain(|w| w != word);

        Ok(())
    }
}
