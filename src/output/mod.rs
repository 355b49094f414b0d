//! Terminal output formatting
//!
//! Tabular word listings and result printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_find_result, print_score_result, write_find_result, write_score_result,
};
pub use formatters::render;
