//! Word service
//!
//! The operations callers use: rack search plus create, update and delete
//! passthroughs. Inputs are normalized here so stored words and racks share
//! one canonical case. The store is injected, never global.

use crate::core::letter::fold_str;
use crate::core::{LetterMultiset, Word};
use crate::error::{Error, Result};
use crate::matcher;
use crate::store::WordStore;

/// Resolve text naming a stored word
///
/// Only trims and folds: text that could never be stored (wrong length,
/// non-letters) names nothing, so it reports `Error::NotFound`.
///
/// # Errors
/// `Error::NotFound` with the folded text if it is not a valid word.
pub fn lookup_word(text: &str) -> Result<Word> {
    let folded = fold_str(text.trim());
    Word::new(&folded).map_err(|_| Error::NotFound(folded))
}

/// Search and administration over an injected word store
pub struct WordService<S> {
    store: S,
}

impl<S: WordStore> WordService<S> {
    /// Create a service over the given store
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Find every stored word that can be spelled from seven letters
    ///
    /// Matches come back in store order. Whitespace is not special: every
    /// character of `letters` counts toward the rack.
    ///
    /// # Errors
    /// Returns `Error::InvalidInput` if `letters` is not exactly seven
    /// characters. No partial result is produced.
    ///
    /// # Examples
    /// ```
    /// use rack_words::service::WordService;
    /// use rack_words::store::MemoryStore;
    ///
    /// let service = WordService::new(MemoryStore::new());
    /// service.create("arbol").unwrap();
    /// service.create("gato").unwrap();
    ///
    /// let found = service.search("arboles").unwrap();
    /// assert_eq!(found.len(), 1);
    /// assert_eq!(found[0].text(), "ARBOL");
    /// ```
    pub fn search(&self, letters: &str) -> Result<Vec<Word>> {
        let rack: LetterMultiset = letters.parse()?;
        Ok(self.search_rack(&rack))
    }

    /// Search with an already built rack
    pub fn search_rack(&self, rack: &LetterMultiset) -> Vec<Word> {
        self.search_counted(rack).0
    }

    /// Search with an already built rack, also returning how many stored
    /// words were checked
    ///
    /// Both values come from the same snapshot of the store.
    pub fn search_counted(&self, rack: &LetterMultiset) -> (Vec<Word>, usize) {
        let candidates = self.store.snapshot();
        let total = candidates.len();

        let found = matcher::search(rack, candidates);
        tracing::debug!(%rack, candidates = total, matches = found.len(), "rack search");

        (found, total)
    }

    /// All stored words in store order
    pub fn list(&self) -> Vec<Word> {
        self.store.snapshot()
    }

    /// Add a word
    ///
    /// # Errors
    /// `Error::InvalidLength` or `Error::InvalidCharacters` for a malformed
    /// word, `Error::DuplicateWord` if it is already stored.
    pub fn create(&self, word: &str) -> Result<Word> {
        let word = Word::new(word)?;
        let created = self.store.create(word)?;
        tracing::info!(word = %created, "word created");
        Ok(created)
    }

    /// Replace `old_word` with `new_word`
    ///
    /// # Errors
    /// `Error::NotFound` if `old_word` is absent or could never be stored,
    /// `Error::InvalidLength` or `Error::InvalidCharacters` for a malformed
    /// `new_word`, `Error::DuplicateWord` if `new_word` is already stored.
    pub fn update(&self, old_word: &str, new_word: &str) -> Result<Word> {
        let old = lookup_word(old_word)?;
        let new = Word::new(new_word)?;
        let updated = self.store.update(&old, new)?;
        tracing::info!(old = %old, new = %updated, "word updated");
        Ok(updated)
    }

    /// Remove a word, returning it in canonical form
    ///
    /// # Errors
    /// `Error::NotFound` if the word is absent or could never be stored.
    pub fn delete(&self, word: &str) -> Result<Word> {
        let word = lookup_word(word)?;
        self.store.delete(&word)?;
        tracing::info!(word = %word, "word deleted");
        Ok(word)
    }
}
