//! Letter query validation

use crate::config::{MAX_QUERY_LENGTH, MIN_QUERY_LENGTH};
use std::fmt;

/// A validated bag of letters: 3-12 ASCII letters, stored lowercase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

/// Error type for rejected queries
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error(
        "Invalid input. The list of letters should be between {} and {} letters long.",
        MIN_QUERY_LENGTH,
        MAX_QUERY_LENGTH
    )]
    InvalidLength(usize),
    #[error("Invalid input. The list of letters may only contain the letters a to z.")]
    InvalidCharacters,
}

impl Query {
    /// Validate user input as a letter query
    ///
    /// Surrounding whitespace is ignored and letters are lowercased.
    ///
    /// # Errors
    /// Returns `QueryError` if:
    /// - Length is not between 3 and 12
    /// - Contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use word_finder::commands::Query;
    ///
    /// let query = Query::parse(" TaC ").unwrap();
    /// assert_eq!(query.letters(), "tac");
    ///
    /// assert!(Query::parse("ab").is_err());
    /// assert!(Query::parse("ab c").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, QueryError> {
        let trimmed = input.trim();

        let len = trimmed.chars().count();
        if !(MIN_QUERY_LENGTH..=MAX_QUERY_LENGTH).contains(&len) {
            return Err(QueryError::InvalidLength(len));
        }

        if !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(QueryError::InvalidCharacters);
        }

        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
