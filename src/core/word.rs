//! Stored word representation
//!
//! A Word is the canonical (uppercase) form of a 3 to 7 letter dictionary entry.

use super::letter::fold_str;
use super::{MAX_WORD_LEN, MIN_WORD_LEN};
use crate::error::{Error, Result};
use std::fmt;

/// A dictionary word in canonical case
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and every letter is folded to
    /// uppercase before validation.
    ///
    /// # Errors
    /// Returns:
    /// - `Error::InvalidLength` if the folded word is not 3 to 7 characters
    /// - `Error::InvalidCharacters` if any character is not alphabetic
    ///
    /// # Examples
    /// ```
    /// use rack_words::core::Word;
    ///
    /// let word = Word::new("árbol").unwrap();
    /// assert_eq!(word.text(), "ÁRBOL");
    ///
    /// assert!(Word::new("no").is_err());
    /// assert!(Word::new("r2d2").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self> {
        let text = fold_str(text.as_ref().trim());

        let len = text.chars().count();
        if !(MIN_WORD_LEN..=MAX_WORD_LEN).contains(&len) {
            return Err(Error::InvalidLength(len));
        }

        if !text.chars().all(char::is_alphabetic) {
            return Err(Error::InvalidCharacters(text));
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters (not bytes) in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// True if the word has no letters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
