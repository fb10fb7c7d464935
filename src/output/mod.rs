//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_edit_outcome, print_edit_result, print_search_result,
    print_word_list,
};
