//! Morris CLI - Three Men's Morris engine
//!
//! This CLI provides a unified interface for:
//! - Listing legal moves of a position
//! - Asking the minimax or best-first searcher for a move
//! - Running matches between strategies
//! - Playing interactively against the computer

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "morris")]
#[command(version, about = "Three Men's Morris engine and search toolkit", long_about = None)]
struct Cli {
    /// Log search and match details (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the legal moves of a position
    Moves(morris::cli::commands::moves::MovesArgs),

    /// Compute the move a strategy would play
    BestMove(morris::cli::commands::best_move::BestMoveArgs),

    /// Play a match between two strategies
    Match(morris::cli::commands::play_match::MatchArgs),

    /// Play against the computer on the terminal
    Play(morris::cli::commands::play::PlayArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "morris=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Moves(args) => morris::cli::commands::moves::execute(args),
        Commands::BestMove(args) => morris::cli::commands::best_move::execute(args),
        Commands::Match(args) => morris::cli::commands::play_match::execute(args),
        Commands::Play(args) => morris::cli::commands::play::execute(args),
    }
}
