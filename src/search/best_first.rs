//! Heuristic best-first search over the mover's own move sequences
//!
//! The opponent's replies are not modelled: the search asks how quickly `me` could
//! complete a line if left alone, and falls back to a one-ply heuristic choice when
//! the closed-set budget runs out first.

use std::{
    cmp::Ordering,
    collections::{BinaryHeap, HashMap, HashSet},
};

use crate::{
    config::SearchConfig,
    game::{Board, LineAnalyzer, Move, Side, WINNING_LINES},
    ports::SearchStrategy,
};

/// Per-piece weight of the line heuristic
pub const LINE_PIECE_WEIGHT: i32 = 2;

/// Line-occupancy heuristic (lower is better for `me`)
pub fn heuristic(board: &Board, me: Side) -> i32 {
    let count = |side, line| LineAnalyzer::pieces_in_line(&board.cells, side, line) as i32;
    WINNING_LINES
        .iter()
        .map(|line| LINE_PIECE_WEIGHT * (count(me.opponent(), line) - count(me, line)))
        .sum()
}

/// Frontier entry.
///
/// Ordered by `(priority, cost, seq)` only, reversed so that [`BinaryHeap`] pops the
/// smallest first. `board` and `root_move` are payload and never compared.
#[derive(Debug, Clone)]
struct SearchNode {
    priority: i32,
    cost: u32,
    seq: u64,
    board: Board,
    /// First move of the path from the root; `None` for the root itself
    root_move: Option<Move>,
}

impl SearchNode {
    fn key(&self) -> (i32, u32, u64) {
        (self.priority, self.cost, self.seq)
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for SearchNode {}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key())
    }
}

/// Result of a best-first search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestFirstReport {
    /// `None` when the searching side has no legal move
    pub best_move: Option<Move>,
    /// States closed before the search stopped
    pub closed: usize,
    /// Whether a winning state was reached (otherwise the fallback chose the move)
    pub found_win: bool,
}

/// Budgeted best-first searcher
#[derive(Debug, Clone, Copy, Default)]
pub struct BestFirstSearcher;

impl BestFirstSearcher {
    pub fn new() -> Self {
        BestFirstSearcher
    }

    pub fn search(&self, board: &Board, me: Side, config: &SearchConfig) -> BestFirstReport {
        let root_moves = board.legal_moves(me);
        let Some(&first_move) = root_moves.first() else {
            return BestFirstReport {
                best_move: None,
                closed: 0,
                found_win: false,
            };
        };

        let budget = config.node_budget();
        let mut open = BinaryHeap::new();
        let mut closed: HashSet<String> = HashSet::new();
        let mut path_costs: HashMap<String, u32> = HashMap::new();
        let mut seq = 0u64;

        path_costs.insert(board.encode(), 0);
        open.push(SearchNode {
            priority: heuristic(board, me),
            cost: 0,
            seq,
            board: *board,
            root_move: None,
        });

        while closed.len() < budget {
            let Some(node) = open.pop() else {
                break;
            };
            let key = node.board.encode();
            if !closed.insert(key) {
                continue;
            }

            if node.board.is_winning(me) {
                let best_move = node.root_move.unwrap_or(first_move);
                tracing::debug!(
                    side = %me,
                    closed = closed.len(),
                    cost = node.cost,
                    %best_move,
                    "best-first search reached a win"
                );
                return BestFirstReport {
                    best_move: Some(best_move),
                    closed: closed.len(),
                    found_win: true,
                };
            }

            let cost = node.cost + 1;
            for mv in node.board.legal_moves(me) {
                let child = node.board.apply(mv);
                let child_key = child.encode();
                if path_costs.get(&child_key).is_some_and(|&known| known <= cost) {
                    continue;
                }
                path_costs.insert(child_key, cost);
                seq += 1;
                open.push(SearchNode {
                    priority: cost as i32 + heuristic(&child, me),
                    cost,
                    seq,
                    board: child,
                    root_move: Some(node.root_move.unwrap_or(mv)),
                });
            }
        }

        let best_move = Self::fallback(board, me, &root_moves);
        tracing::debug!(
            side = %me,
            closed = closed.len(),
            budget,
            %best_move,
            "best-first search fell back to one-ply heuristic"
        );
        BestFirstReport {
            best_move: Some(best_move),
            closed: closed.len(),
            found_win: false,
        }
    }

    /// First root move with the strictly lowest heuristic after it is played
    fn fallback(board: &Board, me: Side, root_moves: &[Move]) -> Move {
        let mut best = root_moves[0];
        let mut best_score = heuristic(&board.apply(best), me);
        for &mv in &root_moves[1..] {
            let score = heuristic(&board.apply(mv), me);
            tracing::trace!(%mv, score, "fallback candidate");
            if score < best_score {
                best = mv;
                best_score = score;
            }
        }
        best
    }
}

impl SearchStrategy for BestFirstSearcher {
    fn choose_move(&mut self, board: &Board, side: Side, config: &SearchConfig) -> Option<Move> {
        self.search(board, side, config).best_move
    }

    fn name(&self) -> &str {
        "best-first"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Difficulty, StrategyKind};

    fn config(difficulty: Difficulty) -> SearchConfig {
        SearchConfig::new(StrategyKind::BestFirst, difficulty)
    }

    fn node(priority: i32, cost: u32, seq: u64) -> SearchNode {
        SearchNode {
            priority,
            cost,
            seq,
            board: Board::start(),
            root_move: None,
        }
    }

    #[test]
    fn test_heuristic() {
        assert_eq!(heuristic(&Board::start(), Side::A), 0);
        // 8 line memberships across the top row
        let board = Board::from_string("AAA......").unwrap();
        assert_eq!(heuristic(&board, Side::A), -16);
        assert_eq!(heuristic(&board, Side::B), 16);

        let board = Board::parse("ABBA...AB").unwrap();
        assert_eq!(heuristic(&board, Side::A), 2);
        assert_eq!(heuristic(&board, Side::B), -2);
    }

    #[test]
    fn test_frontier_order_ignores_payload() {
        let mut heap = BinaryHeap::new();
        let mut late = node(3, 1, 9);
        late.root_move = Some("0,0-1,1".parse().unwrap());
        heap.push(late);
        heap.push(node(3, 1, 2));
        heap.push(node(3, 0, 5));
        heap.push(node(1, 4, 7));

        let order: Vec<_> = std::iter::from_fn(|| heap.pop().map(|n| n.key())).collect();
        assert_eq!(order, vec![(1, 4, 7), (3, 0, 5), (3, 1, 2), (3, 1, 9)]);
    }

    #[test]
    fn test_completes_line() {
        let board = Board::parse("ABBA...AB").unwrap();
        let expected: Move = "2,1-2,0".parse().unwrap();
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let report = BestFirstSearcher::new().search(&board, Side::A, &config(difficulty));
            assert_eq!(report.best_move, Some(expected), "{difficulty}");
            assert!(report.found_win);
        }
    }

    #[test]
    fn test_winning_root_returns_first_move() {
        let board = Board::parse("AAA.B.B.B").unwrap();
        let report = BestFirstSearcher::new().search(&board, Side::A, &config(Difficulty::Easy));
        assert_eq!(report.best_move, Some("0,0-1,0".parse().unwrap()));
        assert_eq!(report.closed, 1);
        assert!(report.found_win);
    }

    #[test]
    fn test_blocked_side_has_no_move() {
        let board = Board::parse("AAABBB...").unwrap();
        let report = BestFirstSearcher::new().search(&board, Side::A, &config(Difficulty::Hard));
        assert_eq!(report.best_move, None);
        assert_eq!(report.closed, 0);
    }

    #[test]
    fn test_closed_set_respects_budget() {
        let board = Board::start();
        let config = config(Difficulty::Easy);
        let report = BestFirstSearcher::new().search(&board, Side::B, &config);
        assert!(report.closed <= config.node_budget());
        assert!(report.best_move.is_some_and(|mv| board.is_legal_move(mv, Side::B)));
    }
}
