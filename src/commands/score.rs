//! Word scoring command

use crate::core::{ScoreTable, score};

/// Result of scoring a single word
#[derive(Debug, Clone)]
pub struct ScoreResult {
    pub word: String,
    pub score: u32,
}

/// Score a word against a table
///
/// Uppercase letters score as lowercase; other characters score nothing.
#[must_use]
pub fn score_word(word: &str, table: &ScoreTable) -> ScoreResult {
    let word = word.trim();
    ScoreResult {
        word: word.to_string(),
        score: score(word, table),
    }
}
