//! Letter multiset for a seven-letter rack
//!
//! The rack is built once per search and never mutated afterwards. Each
//! formability check draws from its own scratch copy of the counts, so one
//! rack can be shared across threads and sibling checks.

use super::RACK_SIZE;
use super::letter::fold;
use crate::error::{Error, Result};
use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;

/// Case-folded count of the letters available for one search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterMultiset {
    counts: FxHashMap<char, u8>,
}

impl LetterMultiset {
    /// Build a rack from exactly seven letters
    ///
    /// Letters are folded to uppercase before counting, so any mix of cases
    /// produces the same rack.
    ///
    /// # Errors
    /// Returns `Error::InvalidInput` with the received count if there are not
    /// exactly seven letters.
    ///
    /// # Examples
    /// ```
    /// use rack_words::core::LetterMultiset;
    ///
    /// let lower = LetterMultiset::build("arboles".chars()).unwrap();
    /// let upper = LetterMultiset::build(['A', 'R', 'B', 'O', 'L', 'E', 'S']).unwrap();
    /// assert_eq!(lower, upper);
    ///
    /// assert!(LetterMultiset::build("arbol".chars()).is_err());
    /// ```
    pub fn build<I>(letters: I) -> Result<Self>
    where
        I: IntoIterator<Item = char>,
    {
        let mut counts: FxHashMap<char, u8> = FxHashMap::default();
        let mut total = 0usize;

        for letter in letters {
            total += 1;
            if total <= RACK_SIZE {
                *counts.entry(fold(letter)).or_insert(0) += 1;
            }
        }

        if total != RACK_SIZE {
            return Err(Error::InvalidInput(total));
        }

        Ok(Self { counts })
    }

    /// Build a rack from a fixed-size array of letters
    ///
    /// The array length already guarantees the rack size, so this cannot fail.
    #[must_use]
    pub fn from_letters(letters: [char; RACK_SIZE]) -> Self {
        let mut counts: FxHashMap<char, u8> = FxHashMap::default();
        for letter in letters {
            *counts.entry(fold(letter)).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Available count of a letter (folded before lookup)
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> u8 {
        self.counts.get(&fold(letter)).copied().unwrap_or(0)
    }

    /// Total number of letters in the rack
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().map(|&count| usize::from(count)).sum()
    }

    /// Decide whether `word` can be spelled from this rack
    ///
    /// Walks the word once, drawing each folded letter from a scratch copy of
    /// the counts. Returns false at the first letter that is missing or
    /// already used up. The rack itself is never modified.
    ///
    /// The empty word is trivially formable. Words longer than the rack always
    /// fail because the counts run out.
    ///
    /// # Examples
    /// ```
    /// use rack_words::core::LetterMultiset;
    ///
    /// let rack: LetterMultiset = "aaabcde".parse().unwrap();
    /// assert!(rack.can_form("aaa"));
    ///
    /// let rack: LetterMultiset = "abcdefg".parse().unwrap();
    /// assert!(!rack.can_form("aaa"));
    /// ```
    #[must_use]
    pub fn can_form(&self, word: &str) -> bool {
        let mut remaining = self.counts.clone();

        for letter in word.chars().map(fold) {
            match remaining.get_mut(&letter) {
                Some(count) if *count > 0 => *count -= 1,
                _ => return false,
            }
        }

        true
    }
}

impl FromStr for LetterMultiset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::build(s.chars())
    }
}

impl fmt::Display for LetterMultiset {
    /// Letters in sorted order, repeated by count
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut letters: Vec<(char, u8)> = self.counts.iter().map(|(&l, &n)| (l, n)).collect();
        letters.sort_unstable();

        for (letter, count) in letters {
            for _ in 0..count {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rack(letters: &str) -> LetterMultiset {
        letters.parse().unwrap()
    }

    #[test]
    fn build_counts_letters() {
        let rack = rack("aaabcde");
        assert_eq!(rack.count('A'), 3);
        assert_eq!(rack.count('b'), 1);
        assert_eq!(rack.count('z'), 0);
        assert_eq!(rack.total(), 7);
    }

    #[test]
    fn build_rejects_wrong_size() {
        assert!(matches!(
            LetterMultiset::build("arbol".chars()),
            Err(Error::InvalidInput(5))
        ));
        assert!(matches!(
            LetterMultiset::build("arbolitos".chars()),
            Err(Error::InvalidInput(9))
        ));
        assert!(matches!(
            LetterMultiset::build(std::iter::empty()),
            Err(Error::InvalidInput(0))
        ));
    }

    #[test]
    fn build_is_case_insensitive() {
        let lower = rack("arboles");
        let upper = rack("ARBOLES");
        let mixed = rack("aRbOlEs");
        assert_eq!(lower, upper);
        assert_eq!(lower, mixed);
    }

    #[test]
    fn from_letters_matches_build() {
        let built = rack("arboles");
        let fixed = LetterMultiset::from_letters(['S', 'e', 'L', 'o', 'B', 'r', 'A']);
        assert_eq!(built, fixed);
    }

    #[test]
    fn build_counts_multibyte_letters_once() {
        let rack = rack("ñandúes");
        assert_eq!(rack.total(), 7);
        assert_eq!(rack.count('Ñ'), 1);
        assert_eq!(rack.count('ú'), 1);
    }

    #[test]
    fn can_form_subset() {
        let rack = rack("arboles");
        assert!(rack.can_form("ARBOL"));
        assert!(rack.can_form("roble"));
        assert!(rack.can_form("sol"));
    }

    #[test]
    fn can_form_whole_rack() {
        assert!(rack("arboles").can_form("ARBOLES"));
    }

    #[test]
    fn can_form_rejects_exhausted_letter() {
        let rack = rack("arboles");
        // Two E and two S, rack has one of each
        assert!(!rack.can_form("SERES"));
        assert!(!rack.can_form("ARBOLEE"));
    }

    #[test]
    fn can_form_rejects_missing_letter() {
        assert!(!rack("arboles").can_form("ARBOLITO"));
        assert!(!rack("arboles").can_form("GATO"));
    }

    #[test]
    fn can_form_repeated_letters() {
        assert!(rack("aaabcde").can_form("AAA"));
        assert!(!rack("abcdefg").can_form("AAA"));
        assert!(!rack("aaabcde").can_form("AAAA"));
    }

    #[test]
    fn can_form_longer_than_rack() {
        assert!(!rack("arboles").can_form("ARBOLESS"));
        assert!(!rack("aaaaaaa").can_form("AAAAAAAA"));
    }

    #[test]
    fn can_form_empty_word() {
        assert!(rack("arboles").can_form(""));
    }

    #[test]
    fn can_form_case_insensitive_word() {
        assert!(rack("ARBOLES").can_form("arbol"));
        assert!(rack("arboles").can_form("ArBoL"));
    }

    #[test]
    fn can_form_leaves_rack_unchanged() {
        let rack = rack("aaabcde");
        let before = rack.clone();

        assert!(rack.can_form("AAA"));
        assert!(rack.can_form("AAA"));
        assert_eq!(rack, before);
    }

    #[test]
    fn display_sorted_letters() {
        assert_eq!(rack("arboles").to_string(), "ABELORS");
        assert_eq!(rack("cabaaed").to_string(), "AAABCDE");
    }

    /// Reference: every letter's count in the word fits in the rack
    fn counts_fit(word: &str, rack: &LetterMultiset) -> bool {
        let mut needed: FxHashMap<char, usize> = FxHashMap::default();
        for letter in word.chars().map(fold) {
            *needed.entry(letter).or_insert(0) += 1;
        }
        needed
            .iter()
            .all(|(&letter, &count)| count <= usize::from(rack.count(letter)))
    }

    proptest! {
        #[test]
        fn prop_can_form_matches_count_dominance(
            letters in "[a-eA-E]{7}",
            word in "[a-fA-F]{0,9}",
        ) {
            let rack = rack(&letters);
            prop_assert_eq!(rack.can_form(&word), counts_fit(&word, &rack));
        }

        #[test]
        fn prop_case_permutation_builds_same_rack(
            letters in "[a-z]{7}",
            flips in proptest::collection::vec(any::<bool>(), 7),
        ) {
            let flipped: String = letters
                .chars()
                .zip(&flips)
                .map(|(c, &up)| if up { c.to_ascii_uppercase() } else { c })
                .collect();
            prop_assert_eq!(rack(&letters), rack(&flipped));
        }

        #[test]
        fn prop_can_form_is_deterministic(letters in "[a-z]{7}", word in "[a-z]{0,8}") {
            let rack = rack(&letters);
            let before = rack.clone();
            let first = rack.can_form(&word);
            prop_assert_eq!(first, rack.can_form(&word));
            prop_assert_eq!(rack, before);
        }

        #[test]
        fn prop_build_fails_for_other_sizes(letters in "[a-z]{0,12}") {
            let result = LetterMultiset::build(letters.chars());
            if letters.len() == RACK_SIZE {
                prop_assert!(result.is_ok());
            } else {
                prop_assert!(matches!(result, Err(Error::InvalidInput(n)) if n == letters.len()));
            }
        }
    }
}
