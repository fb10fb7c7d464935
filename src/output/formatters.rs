//! Formatting utilities for terminal output

use crate::core::Word;

/// Group words by letter count, longest first, keeping order inside a group
#[must_use]
pub fn group_by_length(words: &[Word]) -> Vec<(usize, Vec<&Word>)> {
    let mut groups: Vec<(usize, Vec<&Word>)> = Vec::new();

    for word in words {
        let len = word.len();
        match groups.iter_mut().find(|(l, _)| *l == len) {
            Some((_, group)) => group.push(word),
            None => groups.push((len, vec![word])),
        }
    }

    groups.sort_by_key(|(len, _)| std::cmp::Reverse(*len));
    groups
}

/// Lay words out in rows of at most `per_row`, padded to the longest word
#[must_use]
pub fn format_columns(words: &[&Word], per_row: usize) -> Vec<String> {
    let width = words.iter().map(|w| w.len()).max().unwrap_or(0);

    words
        .chunks(per_row.max(1))
        .map(|row| {
            row.iter()
                .map(|w| format!("{:<width$}", w.text()))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
