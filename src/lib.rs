//! Word Finder
//!
//! Finds every dictionary word that can be spelled from a bag of letters and
//! picks the highest scoring one under a per-letter score table (Scrabble
//! values by default).
//!
//! # Quick Start
//!
//! ```rust
//! use word_finder::core::ScoreTable;
//! use word_finder::dictionary::Dictionary;
//! use word_finder::finder::Finder;
//!
//! let dictionary = Dictionary::from_words(["cat", "act", "cats", "dog"]);
//! let table = ScoreTable::default();
//! let finder = Finder::new(&dictionary, &table);
//!
//! let words = finder.find_all_words("tac");
//! assert_eq!(words, ["cat", "act"]);
//!
//! let best = finder.best_word(&words).unwrap();
//! assert_eq!((best.word, best.score), ("cat", 5));
//! ```

// Core domain types
pub mod core;

// Recognized options and defaults
pub mod config;

// Word list loading
pub mod dictionary;

// Dictionary matching
pub mod finder;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
