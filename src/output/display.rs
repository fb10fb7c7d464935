//! Display functions for command results

use super::formatters::{create_progress_bar, format_columns, group_by_length};
use crate::commands::{BenchmarkResult, EditOutcome, EditResult, SearchResult};
use crate::core::Word;
use colored::Colorize;

const WORDS_PER_ROW: usize = 8;

/// Print the result of a rack search, grouped by word length
pub fn print_search_result(result: &SearchResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Rack: {}", spaced(&result.rack).bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    if result.matches.is_empty() {
        println!("\n{}", "No words can be formed from this rack".yellow());
    } else {
        for (len, words) in group_by_length(&result.matches) {
            println!(
                "\n{} ({})",
                format!("{len} letters").bright_cyan().bold(),
                words.len()
            );
            for row in format_columns(&words, WORDS_PER_ROW) {
                println!("  {row}");
            }
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "✅ {} of {} words",
            result.matches.len(),
            result.candidates
        )
        .green()
        .bold()
    );
    if verbose {
        println!(
            "   Searched in {:.3}ms",
            result.duration.as_secs_f64() * 1000.0
        );
    }
}

/// Print the outcome of a word list edit
pub fn print_edit_result(result: &EditResult) {
    print_edit_outcome(&result.outcome);
    println!("  {} words stored", result.total_words);
}

/// Print a single applied edit
pub fn print_edit_outcome(outcome: &EditOutcome) {
    let message = match outcome {
        EditOutcome::Added(word) => format!("Added {}", word.text().bright_white().bold()),
        EditOutcome::Renamed { old, new } => format!(
            "Renamed {} → {}",
            old.text().bright_white(),
            new.text().bright_white().bold()
        ),
        EditOutcome::Removed(word) => format!("Removed {}", word.text().bright_white().bold()),
    };

    println!("{} {message}", "✓".green().bold());
}

/// Print every stored word in store order
pub fn print_word_list(words: &[Word]) {
    let refs: Vec<&Word> = words.iter().collect();
    for row in format_columns(&refs, WORDS_PER_ROW) {
        println!("{row}");
    }
    println!("\n{} words", words.len().to_string().bright_cyan().bold());
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Racks searched:   {}", result.total_racks);
    println!("   Dictionary size:  {}", result.total_words);
    println!(
        "   Average matches:  {}",
        format!("{:.2}", result.average_matches)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Empty racks:      {}",
        format!("{}", result.empty_racks).yellow()
    );
    if let Some((rack, matches)) = &result.best_rack {
        println!(
            "   Richest rack:     {} ({matches} words)",
            spaced(rack).green()
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Racks/second:     {:.1}", result.racks_per_second);

    if result.total_racks == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut buckets: Vec<(&usize, &usize)> = result.distribution.iter().collect();
    buckets.sort_unstable();
    for (matches, count) in buckets {
        let pct = (*count as f64 / result.total_racks as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {matches:3}: {} {count:5} ({pct:5.1}%)", bar.green());
    }
}

/// Separate rack letters with spaces for readability
fn spaced(letters: &str) -> String {
    letters
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaced_letters() {
        assert_eq!(spaced("ABELORS"), "A B E L O R S");
        assert_eq!(spaced(""), "");
    }
}
