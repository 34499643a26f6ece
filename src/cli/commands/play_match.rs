//! Match command - Play repeated games between two strategies

use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{
        config::load_match_config,
        output::{format_count, print_kv, print_section, print_subsection},
    },
    config::PlayerSpec,
    game::{BlockedPolicy, WinRule},
    pipeline::{
        Contender, JsonlObserver, MatchConfig, MatchPipeline, MatchResult, MetricsObserver,
        MetricsSummary, ProgressObserver,
    },
};

#[derive(Parser, Debug)]
#[command(about = "Play a match between two strategies")]
pub struct MatchArgs {
    /// First player, e.g. minimax:hard, best-first:easy, random, minimax:5
    #[arg(long)]
    pub first: PlayerSpec,

    /// Second player
    #[arg(long)]
    pub second: PlayerSpec,

    /// Number of games
    #[arg(long, short = 'g')]
    pub games: Option<usize>,

    /// Games longer than this many plies are drawn
    #[arg(long)]
    pub max_plies: Option<usize>,

    /// Alternate which player plays A (true or false)
    #[arg(long, value_name = "BOOL")]
    pub swap_sides: Option<bool>,

    /// Win rule: positional or start-row-guarded
    #[arg(long)]
    pub win_rule: Option<WinRule>,

    /// What a blocked side to move means: loss or draw
    #[arg(long)]
    pub blocked: Option<BlockedPolicy>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Match configuration file (JSON); flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Export the match result to JSON
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Write every move to a JSON Lines file
    #[arg(long)]
    pub log_moves: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long)]
    pub quiet: bool,
}

impl MatchArgs {
    /// File configuration (or defaults) with command-line overrides applied
    pub fn match_config(&self) -> Result<MatchConfig> {
        let mut config = match &self.config {
            Some(path) => load_match_config(path)?,
            None => MatchConfig::default(),
        };
        if let Some(games) = self.games {
            config.num_games = games;
        }
        if let Some(max_plies) = self.max_plies {
            config.max_plies = max_plies;
        }
        if let Some(swap_sides) = self.swap_sides {
            config.swap_sides = swap_sides;
        }
        if let Some(win_rule) = self.win_rule {
            config.rules.win_rule = win_rule;
        }
        if let Some(blocked) = self.blocked {
            config.rules.blocked_policy = blocked;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.validate()?;
        Ok(config)
    }
}

pub fn execute(args: MatchArgs) -> Result<()> {
    let config = args.match_config()?;

    let mut first = Contender::from_spec(&args.first, config.seed);
    let mut second = Contender::from_spec(&args.second, config.seed.map(|s| s.wrapping_add(1)));
    if first.name == second.name {
        first.name = format!("{} (1)", first.name);
        second.name = format!("{} (2)", second.name);
    }

    print_section(&format!("{} vs {}", first.name, second.name));
    print_kv("Games", &config.num_games.to_string());
    print_kv("Max plies", &config.max_plies.to_string());
    print_kv("Swap sides", &config.swap_sides.to_string());
    print_kv("Win rule", &config.rules.win_rule.to_string());
    print_kv("Blocked side", &config.rules.blocked_policy.to_string());
    if let Some(seed) = config.seed {
        print_kv("Seed", &seed.to_string());
    }

    let metrics = Arc::new(Mutex::new(MetricsObserver::new()));
    let mut pipeline = MatchPipeline::new(config).with_observer(Box::new(Arc::clone(&metrics)));
    if !args.quiet {
        pipeline = pipeline.with_observer(Box::new(ProgressObserver::new()));
    }
    if let Some(path) = &args.log_moves {
        pipeline = pipeline.with_observer(Box::new(JsonlObserver::new(path)?));
    }

    let result = pipeline.run(&mut first, &mut second)?;
    print_result(&result);
    let summary = metrics
        .lock()
        .map_err(|_| anyhow::anyhow!("metrics observer lock poisoned"))?
        .summary();
    print_metrics(&summary);

    if let Some(path) = &args.export {
        result.save(path)?;
        println!("\n✓ Results exported to: {}", path.display());
    }
    if let Some(path) = &args.log_moves {
        println!("✓ Moves logged to: {}", path.display());
    }

    Ok(())
}

fn print_result(result: &MatchResult) {
    print_subsection("Results");
    print_kv(
        &format!("{} wins", result.first),
        &format_count(result.first_wins, result.total_games),
    );
    print_kv(
        &format!("{} wins", result.second),
        &format_count(result.second_wins, result.total_games),
    );
    print_kv("Draws", &format_count(result.draws, result.total_games));
    if result.truncated > 0 {
        print_kv(
            "Ply-limit draws",
            &format_count(result.truncated, result.total_games),
        );
    }
    print_kv("Average plies", &format!("{:.1}", result.average_plies));
}

fn print_metrics(summary: &MetricsSummary) {
    print_subsection("Games");
    print_kv("A wins", &format_count(summary.a_wins, summary.total_games));
    print_kv("B wins", &format_count(summary.b_wins, summary.total_games));
    if let (Some(shortest), Some(longest)) = (summary.shortest_game, summary.longest_game) {
        print_kv("Length range", &format!("{shortest}-{longest} plies"));
    }
    print_kv(
        "Diagonal moves",
        &format!("{:.1}%", summary.diagonal_move_rate * 100.0),
    );
}
