//! Core domain types for rack word search
//!
//! This module contains the fundamental domain types: case folding, words and
//! letter multisets. Everything here is pure and has no I/O.

pub mod letter;
mod rack;
mod word;

pub use letter::fold;
pub use rack::LetterMultiset;
pub use word::Word;

/// Number of letters in a rack
pub const RACK_SIZE: usize = 7;

/// Shortest word the store accepts
pub const MIN_WORD_LEN: usize = 3;

/// Longest word the store accepts
pub const MAX_WORD_LEN: usize = 7;
