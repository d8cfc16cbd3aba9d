//! Command-line interface for wordgames.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordchain::Variant;

/// Wordgames - word-chain puzzles for chat channels
#[derive(Parser, Debug)]
#[command(name = "wordgames")]
#[command(
    about = "Word-chain puzzles (WordShrink, WordTwist) for chat channels",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, default_value = "wordgames.toml")]
    pub config: PathBuf,

    /// Word list file (overrides the configuration)
    #[arg(long)]
    pub word_file: Option<PathBuf>,

    /// RNG seed for reproducible puzzles (overrides the configuration)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the bot on stdin/stdout, one "<channel> <nick> <message>" per line
    Play,

    /// Generate a single puzzle and print it
    Puzzle {
        /// Game variant (shrink or twist)
        #[arg(long, default_value = "twist")]
        variant: Variant,

        /// Number of words in the chain
        #[arg(short, long)]
        length: Option<usize>,

        /// Print every solution as well
        #[arg(long)]
        reveal: bool,

        /// Print the puzzle as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every chain of a given length between two words
    Solve {
        /// Game variant (shrink or twist)
        #[arg(long, default_value = "twist")]
        variant: Variant,

        /// First word
        start: String,

        /// Last word
        end: String,

        /// Number of words in the chain
        #[arg(short, long, default_value = "4")]
        length: usize,
    },
}
