//! Benchmark command
//!
//! Searches many random racks against a word list and reports throughput and
//! match statistics.

use crate::core::{LetterMultiset, RACK_SIZE, Word};
use crate::matcher::{par_search, search};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Letter pool racks are drawn from, weighted roughly by Spanish frequency
const LETTER_POOL: &str = "AAAAAAAAAAAABBCCCCDDDDDEEEEEEEEEEEEFGHIIIIIIJLLLLLMMMNNNNNNÑOOOOOOOOOPPQRRRRRRSSSSSSTTTTUUUUVXYZ";

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    pub racks: usize,
    pub parallel: bool,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(racks: usize) -> Self {
        Self {
            racks,
            parallel: false,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_racks: usize,
    pub total_words: usize,
    pub total_matches: usize,
    pub average_matches: f64,
    pub max_matches: usize,
    pub best_rack: Option<(String, usize)>,
    pub empty_racks: usize,
    /// Racks bucketed by match count
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub racks_per_second: f64,
}

/// Draw a random rack from the letter pool
pub fn random_rack<R: Rng>(rng: &mut R) -> LetterMultiset {
    let pool: Vec<char> = LETTER_POOL.chars().collect();
    let letters: [char; RACK_SIZE] =
        std::array::from_fn(|_| pool[rng.random_range(0..pool.len())]);

    LetterMultiset::from_letters(letters)
}

/// Run benchmark over `config.racks` random racks
pub fn run_benchmark<R: Rng>(
    words: &[Word],
    config: &BenchmarkConfig,
    rng: &mut R,
) -> BenchmarkResult {
    let racks: Vec<LetterMultiset> = (0..config.racks).map(|_| random_rack(rng)).collect();

    let pb = if config.show_progress {
        ProgressBar::new(racks.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut total_matches = 0;
    let mut max_matches = 0;
    let mut best_rack: Option<(String, usize)> = None;
    let mut empty_racks = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for (idx, rack) in racks.iter().enumerate() {
        let matches = if config.parallel {
            par_search(rack, words).len()
        } else {
            search(rack, words).len()
        };

        total_matches += matches;
        if matches == 0 {
            empty_racks += 1;
        }
        if matches > max_matches {
            max_matches = matches;
            best_rack = Some((rack.to_string(), matches));
        }
        *distribution.entry(matches).or_insert(0) += 1;

        if idx % 100 == 0 {
            pb.set_message(format!("Avg: {:.2}", total_matches as f64 / (idx + 1) as f64));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();
    let total_racks = racks.len();

    BenchmarkResult {
        total_racks,
        total_words: words.len(),
        total_matches,
        average_matches: if total_racks > 0 {
            total_matches as f64 / total_racks as f64
        } else {
            0.0
        },
        max_matches,
        best_rack,
        empty_racks,
        distribution,
        duration,
        racks_per_second: total_racks as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
