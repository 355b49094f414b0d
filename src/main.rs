//! Word Finder - CLI
//!
//! Lists every dictionary word that can be spelled from a bag of letters and
//! reports the highest scoring one.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use word_finder::{
    commands::{Query, find_words, run_interactive, score_word},
    config::{CELL_WIDTH, COLUMNS, DEFAULT_DICTIONARY, FinderConfig, MAX_WORD_LENGTH, MAX_WORDS},
    core::ScoreTable,
    dictionary::Dictionary,
    finder::Finder,
    output::{print_find_result, print_score_result},
};

#[derive(Parser)]
#[command(
    name = "word_finder",
    about = "Find every word you can spell from a bag of letters, and the best scoring one",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line
    #[arg(short, long, global = true, default_value = DEFAULT_DICTIONARY)]
    dictionary: PathBuf,

    /// Maximum number of words to load from the word list
    #[arg(long, global = true, default_value_t = MAX_WORDS)]
    max_words: usize,

    /// Longest word kept from the word list
    #[arg(long, global = true, default_value_t = MAX_WORD_LENGTH)]
    max_word_length: usize,

    /// Words per row in the results table
    #[arg(short, long, global = true, default_value_t = COLUMNS)]
    columns: usize,

    /// Width of each cell in the results table
    #[arg(short, long = "width", global = true, default_value_t = CELL_WIDTH)]
    width: usize,

    /// Letter scores a to z as 26 comma-separated numbers (default: Scrabble)
    #[arg(long, global = true)]
    scores: Option<ScoreTable>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive prompt mode (default)
    Play,

    /// Find all words for a list of letters
    Find {
        /// 3 to 12 letters, without spaces
        letters: String,
    },

    /// Print the score of a word
    Score {
        /// The word to score
        word: String,
    },
}

impl Cli {
    fn config(&self) -> FinderConfig {
        FinderConfig {
            dictionary: self.dictionary.clone(),
            max_words: self.max_words,
            max_word_length: self.max_word_length,
            columns: self.columns,
            cell_width: self.width,
            score_table: self.scores.clone().unwrap_or_default(),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = cli.config();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Find { letters } => run_find_command(&letters, &config),
        Commands::Score { word } => run_score_command(&word, &config),
    }
}

/// Load the word list, failing the whole run if it is unavailable
fn load_dictionary(config: &FinderConfig) -> Result<Dictionary> {
    config.load_dictionary().with_context(|| {
        format!(
            "could not load the dictionary file `{}`",
            config.dictionary.display()
        )
    })
}

fn run_play_command(config: &FinderConfig) -> Result<()> {
    let dictionary = load_dictionary(config)?;
    let finder = Finder::new(&dictionary, &config.score_table);

    run_interactive(&finder, config, io::stdin().lock(), io::stdout().lock())
}

fn run_find_command(letters: &str, config: &FinderConfig) -> Result<()> {
    let query = Query::parse(letters)?;

    let dictionary = load_dictionary(config)?;
    let finder = Finder::new(&dictionary, &config.score_table);

    let result = find_words(&query, &finder);
    print_find_result(&result, config.columns, config.cell_width)?;
    Ok(())
}

fn run_score_command(word: &str, config: &FinderConfig) -> Result<()> {
    let result = score_word(word, &config.score_table);
    print_score_result(&result)?;
    Ok(())
}
