//! Play command - Interactive game against a strategy on stdin

use std::io::{BufRead, Write};

use anyhow::{Result, anyhow};
use clap::Parser;

use crate::{
    cli::output::{format_positions, render_board},
    config::{Difficulty, MobilityModel, SearchConfig, StrategyKind},
    game::{BlockedPolicy, GameSession, Move, Position, Scoreboard, SessionRules, Side, WinRule},
    ports::SearchStrategy,
    search::strategy_for,
};

#[derive(Parser, Debug)]
#[command(about = "Play against the computer")]
pub struct PlayArgs {
    /// Computer strategy: minimax, best-first or random
    #[arg(long, default_value = "minimax")]
    pub strategy: StrategyKind,

    /// Computer difficulty: easy, medium or hard
    #[arg(long, short = 'd', default_value = "medium")]
    pub difficulty: Difficulty,

    /// Side you play (A moves first)
    #[arg(long, default_value = "a")]
    pub human: Side,

    /// Mobility model of the minimax evaluator
    #[arg(long, default_value = "compass")]
    pub mobility: MobilityModel,

    /// Win rule: positional or start-row-guarded
    #[arg(long, default_value = "start-row-guarded")]
    pub win_rule: WinRule,

    /// What a blocked side to move means: loss or draw
    #[arg(long, default_value = "loss")]
    pub blocked: BlockedPolicy,

    /// Random seed (random strategy only)
    #[arg(long)]
    pub seed: Option<u64>,
}

const HELP: &str = "Commands: a move like '2,1-1,1' or '7-4', 'moves', 'from r,c', \
                    'level' (cycle difficulty), 'new', 'quit'";

pub fn execute(args: PlayArgs) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let score = run_interactive(&args, stdin.lock(), stdout.lock())?;
    println!(
        "Final score - A: {}, B: {}, draws: {}",
        score.a_wins, score.b_wins, score.draws
    );
    Ok(())
}

/// Drive a session from `input` until `quit` or end of input.
///
/// Returns the scoreboard of every game finished along the way.
pub fn run_interactive<R: BufRead, W: Write>(
    args: &PlayArgs,
    input: R,
    mut out: W,
) -> Result<Scoreboard> {
    let rules = SessionRules {
        win_rule: args.win_rule,
        blocked_policy: args.blocked,
    };
    let mut session = GameSession::new(rules);
    let mut config =
        SearchConfig::new(args.strategy, args.difficulty).with_mobility(args.mobility);
    let mut computer = strategy_for(args.strategy, args.seed);
    let mut lines = input.lines();

    writeln!(
        out,
        "You play {} against {} ({}). {HELP}",
        args.human,
        computer.name(),
        config.difficulty
    )?;
    writeln!(out, "{}", render_board(session.board()))?;

    loop {
        if let Some(outcome) = session.outcome() {
            let score = session.scoreboard();
            writeln!(
                out,
                "Game over: {outcome}. Score A {} - B {} ({} draws). 'new' or 'quit'?",
                score.a_wins, score.b_wins, score.draws
            )?;
            match lines.next().transpose()?.as_deref().map(str::trim) {
                Some("new") => {
                    session.reset();
                    writeln!(out, "{}", render_board(session.board()))?;
                }
                Some("quit" | "exit") | None => break,
                Some(_) => {}
            }
            continue;
        }

        let side = session.to_move();
        if side != args.human {
            let board = *session.board();
            let mv = computer
                .choose_move(&board, side, &config)
                .ok_or_else(|| anyhow!("computer has no legal move on {}", board.encode()))?;
            session.play(mv)?;
            writeln!(out, "Computer ({side}) plays {mv}")?;
            writeln!(out, "{}", render_board(session.board()))?;
            continue;
        }

        write!(out, "{side} to move> ")?;
        out.flush()?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let line = line.trim();

        match line {
            "" => {}
            "quit" | "exit" => break,
            "help" => writeln!(out, "{HELP}")?,
            "new" => {
                session.reset();
                writeln!(out, "{}", render_board(session.board()))?;
            }
            "moves" => {
                let moves: Vec<String> =
                    session.legal_moves().iter().map(Move::to_string).collect();
                writeln!(out, "Legal moves: {}", moves.join("  "))?;
            }
            "level" | "difficulty" => {
                config.difficulty = config.difficulty.cycle();
                writeln!(out, "Difficulty is now {}", config.difficulty)?;
            }
            _ if line.starts_with("from ") => match line["from ".len()..].parse::<Position>() {
                Ok(from) => {
                    let targets = session.legal_destinations_from(from);
                    writeln!(out, "Destinations from ({from}): {}", format_positions(&targets))?;
                }
                Err(err) => writeln!(out, "{err}")?,
            },
            _ => match line.parse::<Move>() {
                Ok(mv) => match session.play(mv) {
                    Ok(_) => writeln!(out, "{}", render_board(session.board()))?,
                    Err(err) => writeln!(out, "Illegal move: {err}")?,
                },
                Err(err) => writeln!(out, "{err}")?,
            },
        }
    }

    Ok(session.scoreboard())
}
