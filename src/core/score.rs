//! Letter scoring
//!
//! A [`ScoreTable`] assigns points to each letter `a`-`z`. Words score the sum
//! of their letters, and [`best_word`] picks the top scorer of a candidate list.

use super::letters::{ALPHABET_SIZE, letter_index};
use std::fmt;
use std::str::FromStr;

/// Standard Scrabble letter values, `a` through `z`
pub const SCRABBLE_SCORES: [u32; ALPHABET_SIZE] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
];

/// Point value for each letter, in alphabetical order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTable([u32; ALPHABET_SIZE]);

/// Error type for score tables that fail to parse
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoreTableError {
    #[error("score table needs exactly 26 values, got {0}")]
    WrongLength(usize),
    #[error("invalid score `{value}` for letter '{letter}'")]
    InvalidValue { letter: char, value: String },
}

impl ScoreTable {
    /// Create a table from 26 values, `a` through `z`
    #[must_use]
    pub const fn new(values: [u32; ALPHABET_SIZE]) -> Self {
        Self(values)
    }

    /// The standard Scrabble table
    #[must_use]
    pub const fn scrabble() -> Self {
        Self(SCRABBLE_SCORES)
    }

    /// Points for a single letter
    ///
    /// Uppercase ASCII letters score like their lowercase form; anything
    /// outside the alphabet is worth nothing.
    #[inline]
    #[must_use]
    pub fn letter_score(&self, letter: char) -> u32 {
        letter_index(letter.to_ascii_lowercase()).map_or(0, |index| self.0[index])
    }
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self::scrabble()
    }
}

impl FromStr for ScoreTable {
    type Err = ScoreTableError;

    /// Parse 26 comma-separated values, e.g. `"1,3,3,2,..."`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != ALPHABET_SIZE {
            return Err(ScoreTableError::WrongLength(parts.len()));
        }

        let mut values = [0; ALPHABET_SIZE];
        for ((slot, raw), letter) in values.iter_mut().zip(parts).zip('a'..='z') {
            *slot = raw.parse().map_err(|_| ScoreTableError::InvalidValue {
                letter,
                value: raw.to_string(),
            })?;
        }

        Ok(Self(values))
    }
}

impl fmt::Display for ScoreTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

/// Calculate the score of a word: the sum of its letter values
///
/// The sum saturates at `u32::MAX`, so a table of huge values cannot wrap
/// around and rank a word below a cheaper one.
///
/// # Examples
/// ```
/// use word_finder::core::{ScoreTable, score};
///
/// let table = ScoreTable::default();
/// assert_eq!(score("cat", &table), 5);
/// assert_eq!(score("", &table), 0);
/// ```
#[must_use]
pub fn score(word: &str, table: &ScoreTable) -> u32 {
    word.chars()
        .fold(0u32, |total, letter| total.saturating_add(table.letter_score(letter)))
}

/// A word together with its score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredWord<'a> {
    pub word: &'a str,
    pub score: u32,
}

/// Find the highest scoring word in a candidate list
///
/// The running maximum starts at zero and only a strictly higher score
/// replaces it. Among equal top scores the first candidate wins, and a list
/// whose words all score zero has no best word.
#[must_use]
pub fn best_word<'a>(candidates: &[&'a str], table: &ScoreTable) -> Option<ScoredWord<'a>> {
    let mut best = None;
    let mut max_score = 0;

    for &word in candidates {
        let word_score = score(word, table);
        if word_score > max_score {
            max_score = word_score;
            best = Some(ScoredWord {
                word,
                score: word_score,
            });
        }
    }

    best
}
