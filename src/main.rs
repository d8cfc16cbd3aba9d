//! Wordgames - Unified CLI
//!
//! Word-chain puzzle bot with a console chat transport and puzzle tools.

#![warn(missing_docs)]

use anyhow::{Result, bail};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use wordchain::markup::{self, strip_formatting};
use wordchain::{PuzzleGenerator, Variant, WordFile, WordIndex, WordSource, find_all};
use wordgames::cli::{Cli, Command};
use wordgames::{Bot, BotConfig, console};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let mut config = BotConfig::load(&cli.config)?;
    if let Some(word_file) = cli.word_file {
        config = config.with_word_file(word_file);
    }
    if cli.seed.is_some() {
        config = config.with_seed(cli.seed);
    }

    match cli.command {
        Command::Play => run_play(&config).await,
        Command::Puzzle {
            variant,
            length,
            reveal,
            json,
        } => run_puzzle(&config, variant, length, reveal, json),
        Command::Solve {
            variant,
            start,
            end,
            length,
        } => run_solve(&config, variant, &start, &end, length),
    }
}

/// Run the bot on the console transport
#[instrument(skip(config))]
async fn run_play(config: &BotConfig) -> Result<()> {
    info!("Starting wordgames bot");
    let mut bot = Bot::new(config);
    let input = tokio::io::BufReader::new(tokio::io::stdin());
    console::run(&mut bot, input, tokio::io::stdout()).await?;
    info!(channels = ?bot.sessions().list_channels(), "Bot stopped");
    Ok(())
}

/// Generate and print one puzzle
#[instrument(skip(config))]
fn run_puzzle(
    config: &BotConfig,
    variant: Variant,
    length: Option<usize>,
    reveal: bool,
    json: bool,
) -> Result<()> {
    let bounds = config.length_bounds();
    let length = length.unwrap_or(bounds.default);
    if !bounds.contains(length) {
        bail!(bounds.usage());
    }

    let dictionary = WordFile::new(config.word_file()).load()?;
    let index = WordIndex::build(dictionary.words(), variant);
    let mut rng = match config.seed() {
        Some(seed) => ChaCha20Rng::seed_from_u64(*seed),
        None => ChaCha20Rng::from_rng(&mut rand::rng()),
    };
    let puzzle = PuzzleGenerator::new(&index, dictionary.words(), config.generation_settings())
        .generate(&mut rng, length)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&puzzle)?);
        return Ok(());
    }

    println!(
        "{}",
        strip_formatting(&markup::announce(variant, &markup::masked_chain(puzzle.chain())))
    );
    println!("{}", strip_formatting(&markup::solution_count(puzzle.solutions().len())));
    if reveal {
        for solution in puzzle.solutions() {
            println!("{}", solution.join(" > "));
        }
    }
    Ok(())
}

/// Print every chain between two words
#[instrument(skip(config))]
fn run_solve(
    config: &BotConfig,
    variant: Variant,
    start: &str,
    end: &str,
    length: usize,
) -> Result<()> {
    let dictionary = WordFile::new(config.word_file()).load()?;
    for word in [start, end] {
        if !dictionary.contains(word) {
            bail!("{} is not a word I know", word);
        }
    }

    let index = WordIndex::build(dictionary.words(), variant);
    let solutions = find_all(&index, start, end, length, config.generation_settings().search)?;
    for solution in &solutions {
        println!("{}", solution.join(" > "));
    }
    println!("{}", strip_formatting(&markup::solution_count(solutions.len())));
    Ok(())
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,wordchain=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Tracing initialized");
}
