//! Rack Words
//!
//! Finds every dictionary word that can be spelled from a rack of seven
//! letters, with create/update/delete administration of the word list.
//!
//! # Quick Start
//!
//! ```rust
//! use rack_words::service::WordService;
//! use rack_words::store::MemoryStore;
//!
//! let service = WordService::new(MemoryStore::new());
//! service.create("arbol").unwrap();
//! service.create("seres").unwrap();
//!
//! let found = service.search("ArBoLeS").unwrap();
//! assert_eq!(found.len(), 1);
//! println!("Matches: {}", found[0]);
//! ```

// Core domain types
pub mod core;

// Crate error type
pub mod error;

// Search algorithms
pub mod matcher;

// Word storage
pub mod store;

// Search and administration entry points
pub mod service;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{Error, Result};
