//! Move generation and win tests

use super::{
    board::{BOARD_SIZE, Board, Move, Position, Side},
    connectivity,
    lines::LineAnalyzer,
};

impl Board {
    /// Empty neighbours of `from`.
    ///
    /// Does not look at who occupies `from`.
    pub fn legal_destinations(&self, from: Position) -> Vec<Position> {
        connectivity::neighbors(from)
            .iter()
            .copied()
            .filter(|&to| self.is_empty(to))
            .collect()
    }

    /// All legal moves for `side`.
    ///
    /// Origins are visited in row-major order and destinations in neighbour order, so
    /// the result is the same for the same board every time.
    pub fn legal_moves(&self, side: Side) -> Vec<Move> {
        let mut moves = Vec::new();
        for from in self.positions_of(side) {
            for to in self.legal_destinations(from) {
                moves.push(Move::new(from, to));
            }
        }
        moves
    }

    /// True when `side` cannot slide any piece
    pub fn is_blocked(&self, side: Side) -> bool {
        self.positions_of(side)
            .all(|from| connectivity::neighbors(from).iter().all(|&to| !self.is_empty(to)))
    }

    /// Check `mv` against the board without applying it
    pub fn is_legal_move(&self, mv: Move, side: Side) -> bool {
        self.get(mv.from) == side.to_cell()
            && self.is_empty(mv.to)
            && connectivity::are_connected(mv.from, mv.to)
    }

    /// Positional win test: any row, column or main diagonal fully held by `side`
    pub fn is_winning(&self, side: Side) -> bool {
        LineAnalyzer::has_won(&self.cells, side)
    }

    /// Positional winner, A checked first
    pub fn winner(&self) -> Option<Side> {
        Side::both().into_iter().find(|&side| self.is_winning(side))
    }

    /// Whether every cell of `side`'s home row holds one of its pieces
    pub fn all_on_home_row(&self, side: Side) -> bool {
        let row = side.home_row();
        (0..BOARD_SIZE).all(|col| self.cells[row * BOARD_SIZE + col] == side.to_cell())
    }

    /// Winner under the start-row rule used by game sessions.
    ///
    /// While either side still has all of its pieces on its home row nobody has won,
    /// whatever lines are on the board. Otherwise this is [`Board::winner`].
    pub fn start_row_guarded_winner(&self) -> Option<Side> {
        if Side::both().into_iter().any(|side| self.all_on_home_row(side)) {
            return None;
        }
        self.winner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_start_position_moves() {
        let board = Board::start();
        let moves = board.legal_moves(Side::A);
        let expected = vec![
            Move::new(pos(0, 0), pos(1, 0)),
            Move::new(pos(0, 0), pos(1, 1)),
            Move::new(pos(0, 1), pos(1, 1)),
            Move::new(pos(0, 2), pos(1, 2)),
            Move::new(pos(0, 2), pos(1, 1)),
        ];
        assert_eq!(moves, expected);
        assert_eq!(board.legal_moves(Side::B).len(), 5);
    }

    #[test]
    fn test_legal_destinations_ignores_occupant() {
        let board = Board::start();
        // (1,0) is empty but its empty neighbour (1,1) is still reported
        assert_eq!(board.legal_destinations(pos(1, 0)), vec![pos(1, 1)]);
        assert_eq!(
            board.legal_destinations(pos(1, 1)),
            vec![pos(1, 0), pos(1, 2)]
        );
    }

    #[test]
    fn test_blocked_side() {
        let board = Board::parse("AAABBB...").unwrap();
        assert!(board.is_blocked(Side::A));
        assert!(board.legal_moves(Side::A).is_empty());
        assert!(!board.is_blocked(Side::B));
    }

    #[test]
    fn test_is_legal_move() {
        let board = Board::start();
        assert!(board.is_legal_move(Move::new(pos(0, 0), pos(1, 1)), Side::A));
        assert!(!board.is_legal_move(Move::new(pos(0, 0), pos(1, 1)), Side::B));
        assert!(!board.is_legal_move(Move::new(pos(0, 1), pos(1, 0)), Side::A));
    }

    #[test]
    fn test_positional_win_ignores_start_rows() {
        let board = Board::start();
        assert!(board.is_winning(Side::A));
        assert!(board.is_winning(Side::B));
        assert_eq!(board.winner(), Some(Side::A));
        assert_eq!(board.start_row_guarded_winner(), None);
    }

    #[test]
    fn test_start_row_guard_suppresses_other_side() {
        // B wins row 1 while A is still on its home row
        let board = Board::parse("AAABBB...").unwrap();
        assert!(board.is_winning(Side::B));
        assert_eq!(board.start_row_guarded_winner(), None);

        let board = Board::parse("A.A.A.BBB").unwrap();
        assert_eq!(board.start_row_guarded_winner(), None);

        let board = Board::parse(".B.AAAB.B").unwrap();
        assert_eq!(board.start_row_guarded_winner(), Some(Side::A));
    }
}
