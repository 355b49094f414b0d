//! Core domain types for word games
//!
//! Letter multisets for the subset test and letter score tables for ranking.
//! Nothing here touches I/O.

mod letters;
mod score;

pub use letters::{ALPHABET_SIZE, LetterCount, can_form_word, letter_index};
pub use score::{SCRABBLE_SCORES, ScoreTable, ScoreTableError, ScoredWord, best_word, score};
