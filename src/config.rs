//! Finder configuration
//!
//! Defaults for every recognized option. The CLI maps its flags onto
//! [`FinderConfig`].

use crate::core::ScoreTable;
use crate::dictionary::{Dictionary, DictionaryError};
use std::path::PathBuf;

/// Word list read when no path is given
pub const DEFAULT_DICTIONARY: &str = "wordList.txt";

/// Maximum number of words kept from the word list
pub const MAX_WORDS: usize = 100_000;

/// Longest word accepted from the word list
pub const MAX_WORD_LENGTH: usize = 30;

/// Words per row when printing results
pub const COLUMNS: usize = 10;

/// Width of each printed word cell
pub const CELL_WIDTH: usize = 15;

/// Shortest accepted letter query
pub const MIN_QUERY_LENGTH: usize = 3;

/// Longest accepted letter query
pub const MAX_QUERY_LENGTH: usize = 12;

/// All options for loading, matching and printing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderConfig {
    pub dictionary: PathBuf,
    pub max_words: usize,
    pub max_word_length: usize,
    pub columns: usize,
    pub cell_width: usize,
    pub score_table: ScoreTable,
}

impl FinderConfig {
    /// Create a configuration with default options for the given word list
    #[must_use]
    pub fn new(dictionary: impl Into<PathBuf>) -> Self {
        Self {
            dictionary: dictionary.into(),
            ..Self::default()
        }
    }

    /// Load the configured word list with the configured limits
    ///
    /// # Errors
    ///
    /// Returns a [`DictionaryError`] if the word list cannot be opened or read.
    pub fn load_dictionary(&self) -> Result<Dictionary, DictionaryError> {
        Dictionary::load(&self.dictionary, self.max_words, self.max_word_length)
    }
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            dictionary: PathBuf::from(DEFAULT_DICTIONARY),
            max_words: MAX_WORDS,
            max_word_length: MAX_WORD_LENGTH,
            columns: COLUMNS,
            cell_width: CELL_WIDTH,
            score_table: ScoreTable::scrabble(),
        }
    }
}
