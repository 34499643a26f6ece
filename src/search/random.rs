//! Uniformly random baseline player

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    config::SearchConfig,
    game::{Board, Move, Side},
    ports::SearchStrategy,
};

/// Picks uniformly among the legal moves; ignores the search configuration
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// Create a random strategy seeded from the thread-local generator
    pub fn new() -> Self {
        Self {
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a random strategy with a deterministic seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStrategy for RandomStrategy {
    fn choose_move(&mut self, board: &Board, side: Side, _config: &SearchConfig) -> Option<Move> {
        let moves = board.legal_moves(side);
        if moves.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..moves.len());
        Some(moves[index])
    }

    fn name(&self) -> &str {
        "random"
    }

    fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_moves() {
        let board = Board::start();
        let config = SearchConfig::default();
        let mut a = RandomStrategy::with_seed(7);
        let mut b = RandomStrategy::with_seed(7);
        for _ in 0..20 {
            assert_eq!(
                a.choose_move(&board, Side::B, &config),
                b.choose_move(&board, Side::B, &config)
            );
        }
    }

    #[test]
    fn test_only_legal_moves() {
        let board = Board::parse("A.B.B.ABA").unwrap();
        let mut strategy = RandomStrategy::with_seed(42);
        for _ in 0..50 {
            let mv = strategy
                .choose_move(&board, Side::A, &SearchConfig::default())
                .unwrap();
            assert!(board.is_legal_move(mv, Side::A));
        }
    }

    #[test]
    fn test_blocked_returns_none() {
        let board = Board::parse("AAABBB...").unwrap();
        let mut strategy = RandomStrategy::with_seed(1);
        assert_eq!(
            strategy.choose_move(&board, Side::A, &SearchConfig::default()),
            None
        );
    }
}
