//! Word list loading utilities
//!
//! Plain-text word lists: one word per line, blank lines and `#` comments
//! ignored.

use crate::core::{MAX_WORD_LEN, Word};
use crate::error::Result;
use std::fs;
use std::path::Path;

/// Load words from a file
///
/// Entries that are not valid words (wrong length, non-letters) are skipped
/// with a warning; the rest keep file order.
///
/// # Errors
///
/// Returns `Error::Io` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use rack_words::store::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let words = parse_lines(&content, path);
    tracing::debug!(path = %path.display(), count = words.len(), "loaded word list");

    Ok(words)
}

fn parse_lines(content: &str, origin: &Path) -> Vec<Word> {
    content
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }

            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    tracing::warn!(
                        path = %origin.display(),
                        line = idx + 1,
                        "skipping stored entry: {e}"
                    );
                    None
                }
            }
        })
        .collect()
}

/// Write words to a file, one per line, replacing its contents
///
/// # Errors
///
/// Returns `Error::Io` if the file cannot be written.
pub fn save_to_file<P: AsRef<Path>>(path: P, words: &[Word]) -> Result<()> {
    let path = path.as_ref();

    let mut content = String::with_capacity(words.len() * (MAX_WORD_LEN + 1));
    for word in words {
        content.push_str(word.text());
        content.push('\n');
    }

    fs::write(path, content)?;
    tracing::debug!(path = %path.display(), count = words.len(), "saved word list");

    Ok(())
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use rack_words::store::loader::words_from_slice;
/// use rack_words::store::DICTIONARY;
///
/// let words = words_from_slice(DICTIONARY);
/// assert_eq!(words.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
