//! Canonical letter case
//!
//! Racks and stored words are compared in uppercase. A character whose
//! uppercase form is more than one character (`ß` → `SS`) is kept as is, so a
//! single input character always stays a single letter.

/// Fold a character to its canonical (uppercase) form
///
/// # Examples
/// ```
/// use rack_words::core::fold;
///
/// assert_eq!(fold('a'), 'A');
/// assert_eq!(fold('Ñ'), 'Ñ');
/// assert_eq!(fold('ñ'), 'Ñ');
/// assert_eq!(fold('ß'), 'ß');
/// ```
#[inline]
#[must_use]
pub fn fold(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_uppercase();
    }

    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

/// Fold every character of a string to canonical case
#[must_use]
pub fn fold_str(text: &str) -> String {
    text.chars().map(fold).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_folds_to_uppercase() {
        assert_eq!(fold('a'), 'A');
        assert_eq!(fold('z'), 'Z');
        assert_eq!(fold('Q'), 'Q');
    }

    #[test]
    fn non_letters_unchanged() {
        assert_eq!(fold('3'), '3');
        assert_eq!(fold('-'), '-');
    }

    #[test]
    fn accented_letters_fold() {
        assert_eq!(fold('é'), 'É');
        assert_eq!(fold('ñ'), 'Ñ');
    }

    #[test]
    fn multi_char_uppercase_kept_as_single_letter() {
        assert_eq!(fold('ß'), 'ß');
        assert_eq!(fold_str("straße"), "STRAßE");
    }

    #[test]
    fn fold_str_mixed_case() {
        assert_eq!(fold_str("ArBoL"), "ARBOL");
        assert_eq!(fold_str(""), "");
    }
}
