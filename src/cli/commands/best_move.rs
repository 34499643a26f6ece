//! Best-move command - Ask a searcher for a move

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output::{print_kv, print_section, render_board},
    config::{Difficulty, MobilityModel, SearchConfig, StrategyKind},
    game::{Board, Side},
    ports::SearchStrategy,
    search::{BestFirstSearcher, MinimaxSearcher, strategy_for},
};

#[derive(Parser, Debug)]
#[command(about = "Compute the move a strategy would play")]
pub struct BestMoveArgs {
    /// Board as 9 row-major cells, e.g. "AAA...BBB"
    #[arg(long, short = 'b')]
    pub board: Board,

    /// Side to move (a or b)
    #[arg(long, short = 's', default_value = "a")]
    pub side: Side,

    /// Strategy: minimax, best-first (alias astar) or random
    #[arg(long, default_value = "minimax")]
    pub strategy: StrategyKind,

    /// Difficulty: easy, medium or hard
    #[arg(long, short = 'd', default_value = "medium")]
    pub difficulty: Difficulty,

    /// Explicit search depth (overrides difficulty)
    #[arg(long)]
    pub depth: Option<u8>,

    /// Mobility model of the minimax evaluator: compass or connections
    #[arg(long, default_value = "compass")]
    pub mobility: MobilityModel,

    /// Disable alpha-beta pruning
    #[arg(long)]
    pub no_pruning: bool,

    /// Random seed (random strategy only)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Fail when the side has no legal move
    #[arg(long)]
    pub strict: bool,
}

impl BestMoveArgs {
    fn search_config(&self) -> SearchConfig {
        let mut config = SearchConfig::new(self.strategy, self.difficulty)
            .with_mobility(self.mobility)
            .with_pruning(!self.no_pruning);
        if let Some(depth) = self.depth {
            config = config.with_depth(depth);
        }
        config
    }
}

pub fn execute(args: BestMoveArgs) -> Result<()> {
    if args.depth == Some(0) {
        anyhow::bail!("--depth must be at least 1");
    }

    let config = args.search_config();
    print_section(&format!("{} to move", args.side));
    print!("{}", render_board(&args.board));
    println!();
    print_kv("Strategy", &config.strategy.to_string());
    print_kv("Depth", &config.max_depth().to_string());

    let best_move = match config.strategy {
        StrategyKind::Minimax => {
            let report = MinimaxSearcher::new().search(&args.board, args.side, &config);
            print_kv("Mobility", &config.mobility.to_string());
            print_kv("Pruning", &config.pruning.to_string());
            print_kv("Nodes", &report.nodes.to_string());
            if report.best_move.is_some() {
                print_kv("Value", &report.value.to_string());
            }
            report.best_move
        }
        StrategyKind::BestFirst => {
            let report = BestFirstSearcher::new().search(&args.board, args.side, &config);
            print_kv("Budget", &config.node_budget().to_string());
            print_kv("Closed", &report.closed.to_string());
            print_kv("Found win", &report.found_win.to_string());
            report.best_move
        }
        StrategyKind::Random => {
            let mut strategy = strategy_for(StrategyKind::Random, args.seed);
            strategy.choose_move(&args.board, args.side, &config)
        }
    };

    match best_move {
        Some(mv) => print_kv("Best move", &mv.to_string()),
        None if args.strict => anyhow::bail!("{} has no legal move", args.side),
        None => print_kv("Best move", "no legal move"),
    }
    Ok(())
}
