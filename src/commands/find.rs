//! Word finding command
//!
//! Finds every word a query can spell and picks the best scoring one.

use super::Query;
use crate::core::ScoredWord;
use crate::finder::Finder;

/// Result of searching the dictionary for a query
#[derive(Debug, Clone)]
pub struct FindResult<'a> {
    pub words: Vec<&'a str>,
    pub best: Option<ScoredWord<'a>>,
}

/// Find all words for a query along with the highest scoring match
#[must_use]
pub fn find_words<'a>(query: &Query, finder: &Finder<'a>) -> FindResult<'a> {
    let words = finder.find_all_words(query.letters());
    let best = finder.best_word(&words);
    log::debug!(
        "Query '{query}' matched {} of {} words",
        words.len(),
        finder.dictionary().len()
    );

    FindResult { words, best }
}
