//! Word list loading
//!
//! Reads newline-delimited word lists from files or any buffered reader.

use super::Dictionary;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Ways loading a [`Dictionary`] can fail
///
/// Both are fatal: no matching can happen without the word list.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// The word list file could not be opened
    #[error("could not open dictionary file `{}`: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    /// Reading from the word list failed part way through
    #[error("could not read dictionary: {0}")]
    Read(#[source] io::Error),
}

impl Dictionary {
    /// Load a dictionary from a file with one word per line
    ///
    /// See [`Dictionary::from_reader`] for how lines are accepted.
    ///
    /// # Errors
    ///
    /// Returns a [`DictionaryError`] if the file cannot be opened or read.
    ///
    /// # Examples
    /// ```no_run
    /// use word_finder::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::load("wordList.txt", 100_000, 30).unwrap();
    /// println!("Loaded {} words", dictionary.len());
    /// ```
    pub fn load<P: AsRef<Path>>(
        path: P,
        max_words: usize,
        max_word_length: usize,
    ) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DictionaryError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let dictionary = Self::from_reader(BufReader::new(file), max_words, max_word_length)?;
        log::info!(
            "Loaded {} words from {}",
            dictionary.len(),
            path.display()
        );

        Ok(dictionary)
    }

    /// Load a dictionary from a buffered reader
    ///
    /// Lines are read until the input ends or `max_words` words have been
    /// accepted. A line is accepted when it is at most `max_word_length`
    /// characters long. Blank lines and lines that are not valid UTF-8 are
    /// skipped, as are over-long lines; none of them count toward `max_words`.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Read`] if the underlying reader fails.
    ///
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    /// use word_finder::dictionary::Dictionary;
    ///
    /// let input = Cursor::new("cat\ndog\nhippopotamus\n");
    /// let dictionary = Dictionary::from_reader(input, 100, 5).unwrap();
    /// assert_eq!(dictionary.words(), ["cat", "dog"]);
    /// ```
    pub fn from_reader<R: BufRead>(
        mut reader: R,
        max_words: usize,
        max_word_length: usize,
    ) -> Result<Self, DictionaryError> {
        let mut words = Vec::new();
        let mut skipped = 0usize;
        let mut buf = Vec::new();

        while words.len() < max_words {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(DictionaryError::Read)?;
            if read == 0 {
                break;
            }

            match std::str::from_utf8(strip_line_ending(&buf)) {
                Ok(word) if !word.is_empty() && word.chars().count() <= max_word_length => {
                    words.push(word.to_owned());
                }
                _ => skipped += 1,
            }
        }

        if words.len() == max_words {
            log::debug!("Stopped loading at the {max_words} word limit");
        }
        if skipped > 0 {
            log::debug!("Skipped {skipped} blank, over-long or malformed lines");
        }

        Ok(Self { words })
    }
}

/// Strip a trailing `\n` or `\r\n`
fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
