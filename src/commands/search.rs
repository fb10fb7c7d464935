//! Rack search command
//!
//! Runs one search against the service and times it.

use crate::core::{LetterMultiset, Word};
use crate::error::Result;
use crate::service::WordService;
use crate::store::WordStore;
use std::time::{Duration, Instant};

/// Result of searching one rack
pub struct SearchResult {
    /// Rack letters in sorted canonical form
    pub rack: String,
    pub matches: Vec<Word>,
    pub candidates: usize,
    pub duration: Duration,
}

/// Search the store for words spelled from `letters`
///
/// # Errors
///
/// Returns `Error::InvalidInput` if `letters` is not exactly seven characters.
pub fn run_search<S: WordStore>(service: &WordService<S>, letters: &str) -> Result<SearchResult> {
    let start = Instant::now();

    let rack: LetterMultiset = letters.parse()?;
    let (matches, candidates) = service.search_counted(&rack);

    Ok(SearchResult {
        rack: rack.to_string(),
        matches,
        candidates,
        duration: start.elapsed(),
    })
}
