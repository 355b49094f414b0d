//! Display functions for command results

use super::formatters::{points, render};
use crate::commands::{FindResult, ScoreResult};
use colored::Colorize;
use std::io::{self, Write};

/// Message shown when no candidate scores
pub const NO_WORDS_MESSAGE: &str = "No valid words found with the given letters.";

/// Write the matches as a table followed by the best word
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_find_result<W: Write>(
    out: &mut W,
    result: &FindResult<'_>,
    columns: usize,
    cell_width: usize,
) -> io::Result<()> {
    for line in render(&result.words, columns, cell_width) {
        out.write_all(line.as_bytes())?;
    }

    match result.best {
        Some(best) => {
            writeln!(
                out,
                "\nHighest scoring word: {}",
                best.word.bright_yellow().bold()
            )?;
            writeln!(out, "Score = {}\n", best.score.to_string().green())?;
        }
        None => writeln!(out, "{}", NO_WORDS_MESSAGE.red())?,
    }

    Ok(())
}

/// Print the result of a word search to stdout
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn print_find_result(
    result: &FindResult<'_>,
    columns: usize,
    cell_width: usize,
) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out)?;
    write_find_result(&mut out, result, columns, cell_width)
}

/// Write the score of a single word
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_score_result<W: Write>(out: &mut W, result: &ScoreResult) -> io::Result<()> {
    writeln!(
        out,
        "{} scores {}",
        result.word.bright_yellow().bold(),
        points(result.score).green()
    )
}

/// Print the score of a single word to stdout
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn print_score_result(result: &ScoreResult) -> io::Result<()> {
    write_score_result(&mut io::stdout().lock(), result)
}
