//! Candidate filtering

use crate::core::LetterCount;
use crate::dictionary::Dictionary;

/// Find all dictionary words that can be formed from `letters`
///
/// Matching ignores case on both sides, but the returned words keep the
/// spelling stored in the dictionary. Results follow dictionary order.
///
/// # Examples
/// ```
/// use word_finder::dictionary::Dictionary;
/// use word_finder::finder::find_all_words;
///
/// let dictionary = Dictionary::from_words(["cat", "act", "cats", "dog"]);
/// assert_eq!(find_all_words("TAC", &dictionary), ["cat", "act"]);
/// ```
#[must_use]
pub fn find_all_words<'a>(letters: &str, dictionary: &'a Dictionary) -> Vec<&'a str> {
    let letters = letters.to_lowercase();
    let letter_len = letters.chars().count();
    let available = LetterCount::from_letters(&letters);

    dictionary
        .iter()
        .filter(|word| {
            let word = word.to_lowercase();
            word.chars().count() <= letter_len && available.can_form(&word)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::can_form_word;

    fn sample() -> Dictionary {
        Dictionary::from_words(["cat", "act", "cats", "dog"])
    }

    #[test]
    fn finds_matches_in_dictionary_order() {
        assert_eq!(find_all_words("tac", &sample()), ["cat", "act"]);
    }

    #[test]
    fn empty_dictionary_has_no_matches() {
        let dictionary = Dictionary::default();
        assert!(find_all_words("anything", &dictionary).is_empty());
    }

    #[test]
    fn no_matches() {
        assert!(find_all_words("xyz", &sample()).is_empty());
    }

    #[test]
    fn case_insensitive_but_keeps_stored_form() {
        let dictionary = Dictionary::from_words(["Cat", "ACT", "dog"]);
        assert_eq!(find_all_words("TaC", &dictionary), ["Cat", "ACT"]);
    }

    #[test]
    fn respects_letter_multiplicity() {
        let dictionary = Dictionary::from_words(["bob", "bo", "boob", "ob"]);
        assert_eq!(find_all_words("bbo", &dictionary), ["bob", "bo", "ob"]);
    }

    #[test]
    fn words_with_unsupported_characters_never_match() {
        let dictionary = Dictionary::from_words(["it's", "its", "co-op", "naïve"]);
        assert_eq!(find_all_words("stiopcoo", &dictionary), ["its"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let dictionary = Dictionary::from_words(["cat", "cat"]);
        assert_eq!(find_all_words("cat", &dictionary), ["cat", "cat"]);
    }

    #[test]
    fn result_is_ordered_subsequence_of_formable_words() {
        let dictionary = Dictionary::from_words([
            "listen", "silent", "enlist", "tinsel", "inlets", "list", "lens", "stone", "tin",
            "nets", "lilt",
        ]);
        let found = find_all_words("listen", &dictionary);

        let expected: Vec<&str> = dictionary
            .iter()
            .filter(|word| can_form_word("listen", word))
            .collect();
        assert_eq!(found, expected);
        assert!(!found.contains(&"lilt"));
        assert!(!found.contains(&"stone"));
    }
}
