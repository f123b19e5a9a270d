//! Wordle Challenge - CLI
//!
//! Daily puzzles, shareable challenges and random rounds, in a TUI or on
//! plain stdin.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wordle_challenge::{
    commands::{RoundKind, create_challenge, load_history, run_simple, start_round},
    config::{ConfigLoader, GameConfig},
    dictionary::{Dictionary, DictionaryLoader, WORDS},
    output::{print_challenge, print_history},
};

#[derive(Parser)]
#[command(
    name = "wordle-challenge",
    about = "Wordle with daily puzzles and shareable challenges",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file (one word per line); built-in list when omitted
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Extra config file, applied after the user and project config
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Args, Clone, Default)]
struct RoundArgs {
    /// Play today's daily puzzle
    #[arg(long, conflicts_with = "challenge")]
    daily: bool,

    /// Play a challenge token or link
    #[arg(long, value_name = "TOKEN")]
    challenge: Option<String>,
}

impl RoundArgs {
    fn kind(&self) -> RoundKind {
        match (&self.challenge, self.daily) {
            (Some(token), _) => RoundKind::Challenge(token.clone()),
            (None, true) => RoundKind::Daily,
            (None, false) => RoundKind::Random,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play(RoundArgs),

    /// Line-based game without the TUI
    Simple(RoundArgs),

    /// Create a challenge token and link for a word
    Create {
        /// The secret word
        word: String,

        /// Name shown to the player (defaults to the configured player name)
        #[arg(long)]
        by: Option<String>,
    },

    /// Show stored daily results
    History,
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_dictionary(wordlist: Option<&PathBuf>, config: &GameConfig) -> Result<DictionaryLoader> {
    let mut loader = DictionaryLoader::new(config.solutions_pool_size);
    match wordlist {
        Some(path) => {
            loader
                .load_with(|| fs::read_to_string(path))
                .with_context(|| format!("Failed to load word list {}", path.display()))?;
        }
        None => loader.install(Dictionary::from_words(WORDS, config.solutions_pool_size)),
    }
    Ok(loader)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ConfigLoader::load(cli.config.as_deref()).context("Invalid configuration")?;
    let loader = load_dictionary(cli.wordlist.as_ref(), &config)?;
    let dictionary = loader.dictionary()?;

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Play(RoundArgs::default()));

    match command {
        Commands::Play(args) => run_play_command(dictionary, &args, &config),
        Commands::Simple(args) => run_simple_command(dictionary, &args, &config),
        Commands::Create { word, by } => {
            let by = by.unwrap_or_else(|| config.player_name.clone());
            let (token, link) = create_challenge(dictionary, &word, &by, &config.link_base)?;
            print_challenge(&word, &token, &link);
            Ok(())
        }
        Commands::History => {
            let records = load_history(&config.store_dir())?;
            print_history(&records);
            Ok(())
        }
    }
}

fn run_play_command(dictionary: &Dictionary, args: &RoundArgs, config: &GameConfig) -> Result<()> {
    use wordle_challenge::interactive::{App, MessageStyle, run_tui};

    let start = start_round(dictionary, &args.kind(), &config.store_dir())?;
    let mut app = App::new(start.tracker, config.reveal, &config.share_title);
    if let Some(notice) = start.notice {
        app.add_message(&notice, MessageStyle::Error);
    }
    run_tui(app)
}

fn run_simple_command(dictionary: &Dictionary, args: &RoundArgs, config: &GameConfig) -> Result<()> {
    let start = start_round(dictionary, &args.kind(), &config.store_dir())?;
    if let Some(notice) = &start.notice {
        eprintln!("{}", notice.red());
    }
    let mut tracker = start.tracker;
    run_simple(&mut tracker, &config.share_title)
}
