//! Command implementations

pub mod benchmark;
pub mod manage;
pub mod search;
pub mod simple;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use manage::{Edit, EditOutcome, EditResult, apply_edit, run_edit};
pub use search::{SearchResult, run_search};
pub use simple::run_simple;
