//! In-memory word list
//!
//! A [`Dictionary`] is loaded once and never changes afterwards, so one
//! instance can back any number of queries.

mod loader;

pub use loader::DictionaryError;

/// Ordered list of dictionary words
///
/// Words keep the order and spelling of their source. Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Build a dictionary directly from words, without any size limits
    ///
    /// # Examples
    /// ```
    /// use word_finder::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["cat", "act", "dog"]);
    /// assert_eq!(dictionary.len(), 3);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Iterate over the words in load order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_words_keeps_order_and_duplicates() {
        let dictionary = Dictionary::from_words(["cat", "Act", "cat"]);
        assert_eq!(dictionary.words(), ["cat", "Act", "cat"]);
        assert_eq!(dictionary.len(), 3);
    }

    #[test]
    fn empty_dictionary() {
        let dictionary = Dictionary::default();
        assert!(dictionary.is_empty());
        assert_eq!(dictionary.iter().count(), 0);
    }

    #[test]
    fn iterates_in_order() {
        let dictionary = Dictionary::from_words(vec!["b".to_string(), "a".to_string()]);
        let words: Vec<&str> = dictionary.iter().collect();
        assert_eq!(words, ["b", "a"]);

        let mut seen = Vec::new();
        for word in &dictionary {
            seen.push(word.clone());
        }
        assert_eq!(seen, ["b", "a"]);
    }
}
