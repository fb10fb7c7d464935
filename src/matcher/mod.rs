//! Rack word search
//!
//! Runs the formability predicate over a word source and keeps the matches in
//! source order.

mod search;

pub use search::{can_form, par_search, search, search_iter};
