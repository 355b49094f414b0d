//! Letter multisets
//!
//! A [`LetterCount`] tallies how often each of the 26 lowercase letters occurs.
//! A word can be spelled from a bag of letters exactly when, letter by letter,
//! the word needs no more copies than the bag holds.

/// Number of letters in the supported alphabet (`a`-`z`)
pub const ALPHABET_SIZE: usize = 26;

/// Map a lowercase ASCII letter to its alphabet index (0-25)
///
/// Returns `None` for anything outside `a`-`z`, including uppercase letters.
#[inline]
#[must_use]
pub const fn letter_index(letter: char) -> Option<usize> {
    if letter.is_ascii_lowercase() {
        Some(letter as usize - 'a' as usize)
    } else {
        None
    }
}

/// Occurrence count of each letter `a`-`z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterCount([u32; ALPHABET_SIZE]);

impl LetterCount {
    /// Count the letters of a string
    ///
    /// Characters outside `a`-`z` are not counted, so they can never be used
    /// to spell anything.
    ///
    /// # Examples
    /// ```
    /// use word_finder::core::LetterCount;
    ///
    /// let counts = LetterCount::from_letters("aabc");
    /// assert_eq!(counts.get('a'), 2);
    /// assert_eq!(counts.get('z'), 0);
    /// ```
    #[must_use]
    pub fn from_letters(letters: &str) -> Self {
        let mut counts = [0; ALPHABET_SIZE];
        for index in letters.chars().filter_map(letter_index) {
            counts[index] += 1;
        }
        Self(counts)
    }

    /// How many copies of `letter` are available
    #[inline]
    #[must_use]
    pub const fn get(&self, letter: char) -> u32 {
        match letter_index(letter) {
            Some(index) => self.0[index],
            None => 0,
        }
    }

    /// Total number of letters in the multiset
    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Use up one copy of `letter`
    ///
    /// Returns `false` (and leaves the counts untouched) if no copy is left or
    /// the character is not a supported letter.
    #[inline]
    pub fn take(&mut self, letter: char) -> bool {
        match letter_index(letter) {
            Some(index) if self.0[index] > 0 => {
                self.0[index] -= 1;
                true
            }
            _ => false,
        }
    }

    /// Check whether `word` can be spelled from these letters
    ///
    /// Works on a copy, so the same count can be reused for every word of a
    /// dictionary scan.
    #[must_use]
    pub fn can_form(&self, word: &str) -> bool {
        if word.chars().count() > self.total() as usize {
            return false;
        }

        let mut available = *self;
        word.chars().all(|letter| available.take(letter))
    }
}

/// Check if `word` can be formed from `letters`, using each letter at most as
/// often as it appears
///
/// Both strings are compared as given: callers wanting case-insensitive
/// matching lowercase them first. A word containing anything other than
/// `a`-`z` is never formable.
///
/// # Examples
/// ```
/// use word_finder::core::can_form_word;
///
/// assert!(can_form_word("aabbcc", "abcabc"));
/// assert!(!can_form_word("aabbcc", "abcabcx"));
/// ```
#[must_use]
pub fn can_form_word(letters: &str, word: &str) -> bool {
    if word.chars().count() > letters.chars().count() {
        return false;
    }

    LetterCount::from_letters(letters).can_form(word)
}
