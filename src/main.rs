//! Terminal Wordle - CLI
//!
//! Full-screen TUI by default, or a line-based game with `simple`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::io;
use std::path::PathBuf;
use wordle_game::{
    commands::{run_simple, score_guess},
    core::Word,
    game::{DEFAULT_MAX_ATTEMPTS, GameConfig, GameSession, MAX_ATTEMPTS_LIMIT},
    logging,
    output::{scored_guess, terminal_width},
    wordlists::{SecretSource, WORDS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Play against a fixed secret instead of a random one
    #[arg(long, global = true)]
    secret: Option<String>,

    /// Seed for the random secret choice
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Attempts per game
    #[arg(
        short = 'a',
        long,
        global = true,
        default_value_t = DEFAULT_MAX_ATTEMPTS,
        value_parser = clap::value_parser!(u8).range(1..=i64::from(MAX_ATTEMPTS_LIMIT))
    )]
    attempts: u8,

    /// Disable ANSI colors in line-based output
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write log records to a file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Line-based game in the normal terminal scrollback
    Simple,

    /// Print the feedback for a guess against a secret
    Score {
        /// The secret word
        secret: String,

        /// The guess to score
        guess: String,
    },
}

/// Load the word bank based on the -w flag
fn load_wordlist(wordlist: &str) -> Result<Vec<Word>> {
    use wordle_game::wordlists::loader::load_from_file;

    match wordlist {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => load_from_file(path).with_context(|| format!("failed to load word list {path}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.as_deref())?;

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = GameConfig {
        max_attempts: cli.attempts,
        secret: cli.secret.clone(),
        seed: cli.seed,
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Score { secret, guess } => run_score_command(&secret, &guess),
        Commands::Play => {
            let source = secret_source(&cli.wordlist, &config)?;
            run_play_command(source, &config)
        }
        Commands::Simple => {
            let source = secret_source(&cli.wordlist, &config)?;
            run_simple_command(source, &config)
        }
    }
}

fn secret_source(wordlist: &str, config: &GameConfig) -> Result<SecretSource> {
    SecretSource::from_config(config, || load_wordlist(wordlist))
}

fn run_score_command(secret: &str, guess: &str) -> Result<()> {
    let result = score_guess(secret, guess)?;
    println!("{}", scored_guess(&result.guess, &result.feedback));
    Ok(())
}

fn run_simple_command(mut source: SecretSource, config: &GameConfig) -> Result<()> {
    let mut session = GameSession::with_max_attempts(source.next_secret(), config.max_attempts);
    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    let outcome = run_simple(&mut session, &mut stdin, &mut stdout, terminal_width())?;
    info!("simple game finished: {outcome:?}");
    Ok(())
}

fn run_play_command(source: SecretSource, config: &GameConfig) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(source, config.max_attempts);
    run_tui(app)
}
