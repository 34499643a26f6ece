//! Move-choosing algorithms behind the [`SearchStrategy`] port

pub mod best_first;
pub mod minimax;
pub mod random;

pub use best_first::{BestFirstReport, BestFirstSearcher, heuristic};
pub use minimax::{BLOCKED_SCORE, MinimaxReport, MinimaxSearcher, evaluate, mobility, scan_moves};
pub use random::RandomStrategy;

use crate::{config::StrategyKind, ports::SearchStrategy};

/// Build the strategy for `kind`.
///
/// `seed` only matters for [`StrategyKind::Random`]; without one the generator is
/// seeded from entropy.
pub fn strategy_for(kind: StrategyKind, seed: Option<u64>) -> Box<dyn SearchStrategy> {
    match kind {
        StrategyKind::Minimax => Box::new(MinimaxSearcher::new()),
        StrategyKind::BestFirst => Box::new(BestFirstSearcher::new()),
        StrategyKind::Random => match seed {
            Some(seed) => Box::new(RandomStrategy::with_seed(seed)),
            None => Box::new(RandomStrategy::new()),
        },
    }
}
