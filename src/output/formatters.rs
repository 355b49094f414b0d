//! Formatting utilities for terminal output

/// Lay words out as a fixed-width table
///
/// Each word is left-justified in a cell of `cell_width` characters and a row
/// ends after every `columns`-th word. Every returned line, including a
/// partial last row, ends with a newline. Words wider than a cell are not
/// truncated. A `columns` value of zero is treated as one.
///
/// # Examples
/// ```
/// use word_finder::output::formatters::render;
///
/// let lines = render(&["a", "bb", "ccc"], 2, 5);
/// assert_eq!(lines, ["a    bb   \n", "ccc  \n"]);
/// ```
#[must_use]
pub fn render<S: AsRef<str>>(words: &[S], columns: usize, cell_width: usize) -> Vec<String> {
    words
        .chunks(columns.max(1))
        .map(|row| {
            let mut line: String = row
                .iter()
                .map(|word| format!("{:<cell_width$}", word.as_ref()))
                .collect();
            line.push('\n');
            line
        })
        .collect()
}

/// Format a score with its unit, e.g. `1 point` or `12 points`
#[must_use]
pub fn points(score: u32) -> String {
    if score == 1 {
        "1 point".to_string()
    } else {
        format!("{score} points")
    }
}
