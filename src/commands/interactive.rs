//! Interactive prompt mode
//!
//! Reads letter queries line by line and prints the matches for each.

use super::{Query, QueryError, find_words};
use crate::config::FinderConfig;
use crate::finder::Finder;
use crate::output::write_find_result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Prompt shown before each query
pub const PROMPT: &str =
    "Please enter a list of letters, from 3 to 12 letters long, without spaces";

/// Run the interactive prompt loop
///
/// Each line of `input` is treated as one query. An empty line or the end of
/// input ends the session; there is no quit keyword since `quit` is itself a
/// valid query. Invalid queries, including lines that are not UTF-8, print
/// the validation message and prompt again.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `output` fails.
pub fn run_interactive<R: BufRead, W: Write>(
    finder: &Finder<'_>,
    config: &FinderConfig,
    mut input: R,
    mut output: W,
) -> anyhow::Result<()> {
    writeln!(
        output,
        "{} words loaded. Enter an empty line to quit.\n",
        finder.dictionary().len().to_string().bright_cyan()
    )?;

    loop {
        let line = match get_user_input(&mut input, &mut output, PROMPT) {
            Ok(Some(line)) => line,
            Ok(None) => {
                writeln!(output)?;
                return Ok(());
            }
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                log::debug!("Ignoring unreadable input line: {e}");
                writeln!(output, "{}", QueryError::InvalidCharacters.to_string().red())?;
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        if line.is_empty() {
            return Ok(());
        }

        match Query::parse(&line) {
            Ok(query) => {
                let result = find_words(&query, finder);
                writeln!(output)?;
                write_find_result(&mut output, &result, config.columns, config.cell_width)?;
            }
            Err(e) => writeln!(output, "{}", e.to_string().red())?,
        }
    }
}

/// Get user input with a prompt
///
/// Returns `None` at end of input.
fn get_user_input<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt} -> ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScoreTable;
    use crate::dictionary::Dictionary;
    use std::io::Cursor;

    fn run(input: &str) -> String {
        let dictionary = Dictionary::from_words(["cat", "act", "cats", "dog", "zax"]);
        let table = ScoreTable::default();
        let finder = Finder::new(&dictionary, &table);
        let config = FinderConfig::default();

        let mut output = Vec::new();
        run_interactive(&finder, &config, Cursor::new(input), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn answers_a_query() {
        let output = run("tac\n");

        assert!(output.contains(PROMPT));
        assert!(output.contains("cat"));
        assert!(output.contains("act"));
        assert!(!output.contains("cats"));
        assert!(output.contains("Highest scoring word: "));
        assert!(output.contains("Score = "));
    }

    #[test]
    fn reports_no_matches() {
        let output = run("qqq\n");
        assert!(output.contains("No valid words found with the given letters."));
    }

    #[test]
    fn rejects_invalid_query_and_prompts_again() {
        let output = run("ab\ndog\n");

        assert!(output.contains("should be between 3 and 12 letters long"));
        assert_eq!(output.matches(PROMPT).count(), 3);
        assert!(output.contains("Highest scoring word: "));
    }

    #[test]
    fn empty_line_quits() {
        let output = run("\ntac\n");

        assert_eq!(output.matches(PROMPT).count(), 1);
        assert!(!output.contains("Highest scoring word"));
    }

    #[test]
    fn end_of_input_quits() {
        let output = run("");
        assert_eq!(output.matches(PROMPT).count(), 1);
    }

    #[test]
    fn quit_is_answered_as_a_query() {
        let dictionary = Dictionary::from_words(["quit", "tic"]);
        let table = ScoreTable::default();
        let finder = Finder::new(&dictionary, &table);
        let config = FinderConfig::default();

        let mut output = Vec::new();
        run_interactive(&finder, &config, Cursor::new("quit\ntic\n"), &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert_eq!(output.matches(PROMPT).count(), 3);
        assert_eq!(output.matches("Highest scoring word: ").count(), 2);
    }

    #[test]
    fn invalid_utf8_line_prompts_again() {
        let dictionary = Dictionary::from_words(["cat", "act"]);
        let table = ScoreTable::default();
        let finder = Finder::new(&dictionary, &table);
        let config = FinderConfig::default();

        let input: &[u8] = b"\xff\xfeab\ntac\n";
        let mut output = Vec::new();
        run_interactive(&finder, &config, input, &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.contains("may only contain the letters a to z"));
        assert_eq!(output.matches(PROMPT).count(), 3);
        assert_eq!(output.matches("Highest scoring word: ").count(), 1);
    }

    #[test]
    fn several_queries_in_one_session() {
        let output = run("tac\nxaz\n");
        assert_eq!(output.matches("Highest scoring word: ").count(), 2);
    }
}
