//! Depth-limited minimax with alpha-beta pruning

use crate::{
    config::{MobilityModel, SearchConfig},
    game::{Board, LineAnalyzer, Move, Position, Side},
    ports::SearchStrategy,
};

/// Score of a completed line
pub const LINE_SCORE: i32 = 100;
/// Score of holding the center
pub const CENTER_SCORE: i32 = 10;
/// Weight of the mobility difference
pub const MOBILITY_WEIGHT: i32 = 5;
/// Magnitude of a position where the mover cannot move; dominates every evaluation
pub const BLOCKED_SCORE: i32 = 1_000_000;

const COMPASS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Number of empty cells `side` could step onto under `model`.
///
/// [`MobilityModel::Compass`] counts all 8 directions, including diagonals that are
/// not spokes and therefore not legal moves.
pub fn mobility(board: &Board, side: Side, model: MobilityModel) -> i32 {
    let count: usize = match model {
        MobilityModel::Compass => board
            .positions_of(side)
            .map(|from| {
                COMPASS
                    .iter()
                    .filter_map(|&(dr, dc)| from.offset(dr, dc))
                    .filter(|&to| board.is_empty(to))
                    .count()
            })
            .sum(),
        MobilityModel::Connections => board
            .positions_of(side)
            .map(|from| board.legal_destinations(from).len())
            .sum(),
    };
    count as i32
}

/// Legal moves in neighbourhood-scan order.
///
/// Origins are taken row-major and each origin's destinations row-major too, which is
/// the order an 8-direction scan from `(-1, -1)` to `(1, 1)` visits them. Ties between
/// equally valued moves go to the first one in this order.
pub fn scan_moves(board: &Board, side: Side) -> Vec<Move> {
    let mut moves = board.legal_moves(side);
    moves.sort_by_key(|mv| (mv.from.index(), mv.to.index()));
    moves
}

/// Static evaluation from `me`'s point of view (higher is better)
pub fn evaluate(board: &Board, me: Side, model: MobilityModel) -> i32 {
    let opponent = me.opponent();
    let mut score = LINE_SCORE
        * (LineAnalyzer::completed_lines(&board.cells, me) as i32
            - LineAnalyzer::completed_lines(&board.cells, opponent) as i32);

    match board.get(Position::CENTER).to_side() {
        Some(side) if side == me => score += CENTER_SCORE,
        Some(_) => score -= CENTER_SCORE,
        None => {}
    }

    score + MOBILITY_WEIGHT * (mobility(board, me, model) - mobility(board, opponent, model))
}

/// Result of a minimax search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimaxReport {
    /// `None` when the searching side has no legal move
    pub best_move: Option<Move>,
    /// Backed-up value of `best_move`
    pub value: i32,
    /// Nodes visited, root children included
    pub nodes: u64,
}

/// Minimax searcher.
///
/// Each legal root move is scored by its own full-window search and the first move
/// with the strictly greatest value is kept, so results follow move generation order.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxSearcher;

impl MinimaxSearcher {
    pub fn new() -> Self {
        MinimaxSearcher
    }

    pub fn search(&self, board: &Board, me: Side, config: &SearchConfig) -> MinimaxReport {
        let depth = config.max_depth().max(1);
        let mut walker = TreeWalk {
            me,
            mobility: config.mobility,
            pruning: config.pruning,
            nodes: 0,
        };

        let mut best: Option<(Move, i32)> = None;
        for mv in scan_moves(board, me) {
            let value = walker.minimax(&board.apply(mv), depth - 1, i32::MIN, i32::MAX, false);
            if best.is_none_or(|(_, best_value)| value > best_value) {
                best = Some((mv, value));
            }
        }

        let report = MinimaxReport {
            best_move: best.map(|(mv, _)| mv),
            value: best.map_or(-BLOCKED_SCORE, |(_, value)| value),
            nodes: walker.nodes,
        };
        tracing::debug!(
            side = %me,
            depth,
            pruning = config.pruning,
            nodes = report.nodes,
            value = report.value,
            best_move = ?report.best_move.map(|mv| mv.to_string()),
            "minimax search finished"
        );
        report
    }
}

impl SearchStrategy for MinimaxSearcher {
    fn choose_move(&mut self, board: &Board, side: Side, config: &SearchConfig) -> Option<Move> {
        self.search(board, side, config).best_move
    }

    fn name(&self) -> &str {
        "minimax"
    }
}

struct TreeWalk {
    me: Side,
    mobility: MobilityModel,
    pruning: bool,
    nodes: u64,
}

impl TreeWalk {
    fn minimax(
        &mut self,
        board: &Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            return evaluate(board, self.me, self.mobility);
        }

        let mover = if maximizing { self.me } else { self.me.opponent() };
        let moves = scan_moves(board, mover);
        if moves.is_empty() {
            return if maximizing {
                -BLOCKED_SCORE
            } else {
                BLOCKED_SCORE
            };
        }

        if maximizing {
            let mut best = i32::MIN;
            for mv in moves {
                let value = self.minimax(&board.apply(mv), depth - 1, alpha, beta, false);
                best = best.max(value);
                alpha = alpha.max(value);
                if self.pruning && beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = i32::MAX;
            for mv in moves {
                let value = self.minimax(&board.apply(mv), depth - 1, alpha, beta, true);
                best = best.min(value);
                beta = beta.min(value);
                if self.pruning && beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Difficulty, StrategyKind};

    fn config(depth: u8) -> SearchConfig {
        SearchConfig::new(StrategyKind::Minimax, Difficulty::default()).with_depth(depth)
    }

    #[test]
    fn test_evaluate_start_is_balanced() {
        let board = Board::start();
        for model in [MobilityModel::Compass, MobilityModel::Connections] {
            assert_eq!(evaluate(&board, Side::A, model), 0);
            assert_eq!(evaluate(&board, Side::B, model), 0);
        }
    }

    #[test]
    fn test_evaluate_line_and_center() {
        let board = Board::from_string("AAA......").unwrap();
        assert_eq!(evaluate(&board, Side::A, MobilityModel::Compass), 135);
        assert_eq!(evaluate(&board, Side::B, MobilityModel::Compass), -135);

        let board = Board::from_string("....A....").unwrap();
        assert_eq!(evaluate(&board, Side::A, MobilityModel::Compass), 50);
    }

    #[test]
    fn test_mobility_models_differ_off_the_spokes() {
        // (0,1) has no diagonal connections
        let board = Board::from_string(".A.......").unwrap();
        assert_eq!(mobility(&board, Side::A, MobilityModel::Compass), 5);
        assert_eq!(mobility(&board, Side::A, MobilityModel::Connections), 3);
        assert_eq!(evaluate(&board, Side::A, MobilityModel::Compass), 25);
        assert_eq!(evaluate(&board, Side::A, MobilityModel::Connections), 15);
    }

    #[test]
    fn test_completes_line() {
        let board = Board::parse("ABBA...AB").unwrap();
        let report = MinimaxSearcher::new().search(&board, Side::A, &config(2));
        assert_eq!(report.best_move, Some("2,1-2,0".parse().unwrap()));
        assert_eq!(report.value, 65);
        assert_eq!(report.nodes, 24);
    }

    #[test]
    fn test_completed_line_is_not_a_leaf() {
        // B's replies after column 0 is filled are searched too
        let board = Board::parse("ABBA...AB").unwrap();
        let to_center: Move = "2,1-1,1".parse().unwrap();

        let report = MinimaxSearcher::new().search(&board, Side::A, &config(3));
        assert_eq!(report.best_move, Some(to_center));
        assert_eq!(report.value, 80);

        let report = MinimaxSearcher::new().search(&board, Side::A, &config(4));
        assert_eq!(report.best_move, Some(to_center));
        assert_eq!(report.value, 0);
    }

    #[test]
    fn test_deeper_search_visits_more_nodes() {
        let board = Board::start();
        let nodes: Vec<u64> = (2..=4)
            .map(|depth| MinimaxSearcher::new().search(&board, Side::A, &config(depth)).nodes)
            .collect();
        assert_eq!(nodes, vec![19, 71, 256]);

        let report = MinimaxSearcher::new().search(&board, Side::A, &config(4));
        assert_eq!(report.best_move, Some("0,0-1,0".parse().unwrap()));
        assert_eq!(report.value, 0);
    }

    #[test]
    fn test_scan_order() {
        let board = Board::from_string("....A....").unwrap();
        let moves: Vec<String> = scan_moves(&board, Side::A).iter().map(Move::to_string).collect();
        assert_eq!(
            moves,
            vec!["1,1-0,0", "1,1-0,1", "1,1-0,2", "1,1-1,0", "1,1-1,2", "1,1-2,0", "1,1-2,1", "1,1-2,2"]
        );
    }

    #[test]
    fn test_blocked_side_has_no_move() {
        let board = Board::parse("AAABBB...").unwrap();
        let report = MinimaxSearcher::new().search(&board, Side::A, &config(3));
        assert_eq!(report.best_move, None);
        assert_eq!(report.value, -BLOCKED_SCORE);
        assert_eq!(report.nodes, 0);
    }

    #[test]
    fn test_pruning_keeps_the_move_and_saves_nodes() {
        let board = Board::start();
        let pruned = MinimaxSearcher::new().search(&board, Side::A, &config(4));
        let full = MinimaxSearcher::new().search(&board, Side::A, &config(4).with_pruning(false));
        assert_eq!(pruned.best_move, full.best_move);
        assert_eq!(pruned.value, full.value);
        assert_eq!((pruned.nodes, full.nodes), (256, 345));
    }

    #[test]
    fn test_search_is_idempotent() {
        let board = Board::parse("A.B.B.ABA").unwrap();
        let mut searcher = MinimaxSearcher::new();
        let first = searcher.choose_move(&board, Side::B, &config(3));
        let second = searcher.choose_move(&board, Side::B, &config(3));
        assert_eq!(first, second);
        assert!(first.is_some_and(|mv| board.is_legal_move(mv, Side::B)));
    }
}
