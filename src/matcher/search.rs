//! Search orchestration over any iterable word source

use crate::core::LetterMultiset;
use rayon::prelude::*;

/// Decide whether `word` can be spelled from `rack`
///
/// Free-function form of [`LetterMultiset::can_form`].
#[inline]
#[must_use]
pub fn can_form(word: &str, rack: &LetterMultiset) -> bool {
    rack.can_form(word)
}

/// Collect every word of `source` that can be spelled from `rack`
///
/// Source order is preserved and nothing is deduplicated.
///
/// # Examples
/// ```
/// use rack_words::core::LetterMultiset;
/// use rack_words::matcher::search;
///
/// let rack: LetterMultiset = "arboles".parse().unwrap();
/// let words = ["ROBLE", "GATO", "ARBOL", "SERES"];
///
/// assert_eq!(search(&rack, words), vec!["ROBLE", "ARBOL"]);
/// ```
pub fn search<I, W>(rack: &LetterMultiset, source: I) -> Vec<W>
where
    I: IntoIterator<Item = W>,
    W: AsRef<str>,
{
    search_iter(rack, source).collect()
}

/// Lazily yield the words of `source` that can be spelled from `rack`
pub fn search_iter<I, W>(rack: &LetterMultiset, source: I) -> impl Iterator<Item = W>
where
    I: IntoIterator<Item = W>,
    W: AsRef<str>,
{
    source
        .into_iter()
        .filter(move |word| rack.can_form(word.as_ref()))
}

/// Parallel [`search`] over a slice
///
/// Candidates are checked on the rayon pool; the result keeps slice order.
pub fn par_search<'a, W>(rack: &LetterMultiset, source: &'a [W]) -> Vec<&'a W>
where
    W: AsRef<str> + Sync,
{
    source
        .par_iter()
        .filter(|&word| rack.can_form(word.as_ref()))
        .collect()
}
