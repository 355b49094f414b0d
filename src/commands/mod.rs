//! Command implementations

pub mod find;
pub mod interactive;
pub mod query;
pub mod score;

pub use find::{FindResult, find_words};
pub use interactive::run_interactive;
pub use query::{Query, QueryError};
pub use score::{ScoreResult, score_word};
