//! Dictionary matching
//!
//! Filters a dictionary down to the words a bag of letters can spell.

mod engine;
mod matcher;

pub use engine::Finder;
pub use matcher::find_all_words;
