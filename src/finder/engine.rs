//! Main word finder interface

use super::matcher::find_all_words;
use crate::core::{ScoreTable, ScoredWord, best_word, score};
use crate::dictionary::Dictionary;

/// Word finder over one dictionary and one score table
///
/// Borrows both, so several finders can share a dictionary or compare
/// scoring schemes side by side.
pub struct Finder<'a> {
    dictionary: &'a Dictionary,
    score_table: &'a ScoreTable,
}

impl<'a> Finder<'a> {
    /// Create a new finder
    ///
    /// # Parameters
    /// - `dictionary`: The words to search
    /// - `score_table`: Letter values used to rank matches
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary, score_table: &'a ScoreTable) -> Self {
        Self {
            dictionary,
            score_table,
        }
    }

    /// Get every dictionary word that `letters` can spell, in dictionary order
    #[must_use]
    pub fn find_all_words(&self, letters: &str) -> Vec<&'a str> {
        find_all_words(letters, self.dictionary)
    }

    /// Get the highest scoring word among `candidates`
    ///
    /// Returns `None` if the list is empty or nothing scores above zero.
    #[must_use]
    pub fn best_word(&self, candidates: &[&'a str]) -> Option<ScoredWord<'a>> {
        best_word(candidates, self.score_table)
    }

    /// Score a single word
    #[must_use]
    pub fn score(&self, word: &str) -> u32 {
        score(word, self.score_table)
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ALPHABET_SIZE;

    fn setup() -> (Dictionary, ScoreTable) {
        (
            Dictionary::from_words(["cat", "act", "cats", "dog"]),
            ScoreTable::default(),
        )
    }

    #[test]
    fn finds_and_scores() {
        let (dictionary, table) = setup();
        let finder = Finder::new(&dictionary, &table);

        let words = finder.find_all_words("tac");
        assert_eq!(words, ["cat", "act"]);

        let best = finder.best_word(&words).unwrap();
        assert_eq!(best.word, "cat");
        assert_eq!(best.score, 5);
    }

    #[test]
    fn no_candidates_no_best_word() {
        let (dictionary, table) = setup();
        let finder = Finder::new(&dictionary, &table);

        let words = finder.find_all_words("zzz");
        assert!(words.is_empty());
        assert!(finder.best_word(&words).is_none());
    }

    #[test]
    fn empty_dictionary() {
        let dictionary = Dictionary::default();
        let table = ScoreTable::default();
        let finder = Finder::new(&dictionary, &table);

        assert!(finder.find_all_words("abc").is_empty());
        assert!(finder.best_word(&[]).is_none());
    }

    #[test]
    fn score_table_changes_ranking() {
        let dictionary = Dictionary::from_words(["cat", "dog", "god", "cog"]);
        let mut values = [0; ALPHABET_SIZE];
        values[usize::from(b'g' - b'a')] = 5;
        let table = ScoreTable::new(values);
        let finder = Finder::new(&dictionary, &table);

        let words = finder.find_all_words("gocdt");
        assert_eq!(words, ["dog", "god", "cog"]);

        let best = finder.best_word(&words).unwrap();
        assert_eq!(best.word, "dog");
        assert_eq!(finder.score("egg"), 10);
    }

    #[test]
    fn finders_share_a_dictionary() {
        let dictionary = Dictionary::from_words(["quiz", "zap"]);
        let scrabble = ScoreTable::default();
        let flat = ScoreTable::new([1; ALPHABET_SIZE]);

        let by_scrabble = Finder::new(&dictionary, &scrabble);
        let by_length = Finder::new(&dictionary, &flat);

        assert_eq!(by_scrabble.score("quiz"), 22);
        assert_eq!(by_length.score("quiz"), 4);
        assert!(std::ptr::eq(by_scrabble.dictionary(), by_length.dictionary()));
    }
}
