//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Number of rows (and columns) on the board
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Pieces each side keeps on the board for the whole game
pub const PIECES_PER_SIDE: usize = 3;

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    A,
    B,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::A => 'A',
            Cell::B => 'B',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '0' => Some(Cell::Empty),
            'A' | 'a' | '1' => Some(Cell::A),
            'B' | 'b' | '2' => Some(Cell::B),
            _ => None,
        }
    }

    /// The side occupying this cell, if any
    pub fn to_side(self) -> Option<Side> {
        match self {
            Cell::A => Some(Side::A),
            Cell::B => Some(Side::B),
            Cell::Empty => None,
        }
    }
}

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    /// Get the opponent side
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Convert side to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Side::A => Cell::A,
            Side::B => Cell::B,
        }
    }

    /// Row the side's pieces occupy in the starting position
    pub fn home_row(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => BOARD_SIZE - 1,
        }
    }

    pub fn both() -> [Side; 2] {
        [Side::A, Side::B]
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::A => "A",
            Side::B => "B",
        })
    }
}

impl FromStr for Side {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" | "1" => Ok(Side::A),
            "b" | "2" => Ok(Side::B),
            _ => Err(crate::Error::ParseSide {
                input: s.to_string(),
            }),
        }
    }
}

/// One of the nine board positions, stored as a row-major index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Position(u8);

impl Position {
    pub const CENTER: Position = Position(4);

    /// Create a position from row and column coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPosition`] if either coordinate is outside 0-2.
    pub fn new(row: usize, col: usize) -> Result<Self, crate::Error> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Position((row * BOARD_SIZE + col) as u8))
        } else {
            Err(crate::Error::InvalidPosition { row, col })
        }
    }

    /// Create a position from its row-major index.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPositionIndex`] if the index is >= 9.
    pub fn from_index(index: usize) -> Result<Self, crate::Error> {
        if index < CELL_COUNT {
            Ok(Position(index as u8))
        } else {
            Err(crate::Error::InvalidPositionIndex { index })
        }
    }

    /// Index-checked constructor for internal tables; `index` must be < 9.
    pub(crate) const fn at(index: usize) -> Self {
        debug_assert!(index < CELL_COUNT);
        Position(index as u8)
    }

    /// All positions in row-major order
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELL_COUNT).map(Position::at)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn row(self) -> usize {
        self.index() / BOARD_SIZE
    }

    pub fn col(self) -> usize {
        self.index() % BOARD_SIZE
    }

    pub fn is_center(self) -> bool {
        self == Self::CENTER
    }

    pub fn is_corner(self) -> bool {
        matches!(self.0, 0 | 2 | 6 | 8)
    }

    /// Step by a (row, column) offset, or `None` when it leaves the board
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Position> {
        let row = self.row() as isize + d_row;
        let col = self.col() as isize + d_col;
        if (0..BOARD_SIZE as isize).contains(&row) && (0..BOARD_SIZE as isize).contains(&col) {
            Some(Position::at(row as usize * BOARD_SIZE + col as usize))
        } else {
            None
        }
    }
}

impl TryFrom<usize> for Position {
    type Error = crate::Error;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Position::from_index(index)
    }
}

impl From<Position> for usize {
    fn from(pos: Position) -> Self {
        pos.index()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row(), self.col())
    }
}

impl FromStr for Position {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_error = || crate::Error::ParsePosition {
            input: s.to_string(),
        };
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');

        if let Some((row, col)) = trimmed.split_once(',') {
            let row = row.trim().parse::<usize>().map_err(|_| parse_error())?;
            let col = col.trim().parse::<usize>().map_err(|_| parse_error())?;
            Position::new(row, col)
        } else {
            let index = trimmed.parse::<usize>().map_err(|_| parse_error())?;
            Position::from_index(index)
        }
    }
}

/// A piece slide from one position to a neighbouring one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    pub fn new(from: Position, to: Position) -> Self {
        Move { from, to }
    }

    /// The move that slides the piece back again
    pub fn reversed(self) -> Self {
        Move {
            from: self.to,
            to: self.from,
        }
    }

    /// Whether the move changes both row and column
    pub fn is_diagonal(self) -> bool {
        self.from.row() != self.to.row() && self.from.col() != self.to.col()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (from, to) = s
            .split_once("->")
            .or_else(|| s.split_once('-'))
            .ok_or_else(|| crate::Error::ParseMove {
                input: s.to_string(),
            })?;
        let from = from.parse::<Position>().map_err(|_| crate::Error::ParseMove {
            input: s.to_string(),
        })?;
        let to = to.parse::<Position>().map_err(|_| crate::Error::ParseMove {
            input: s.to_string(),
        })?;
        Ok(Move { from, to })
    }
}

/// Piece counts for both sides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    a: usize,
    b: usize,
}

/// Board snapshot: nine cells in row-major order
///
/// This type implements `Copy`; every search step works on its own copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Board with no pieces
    pub fn empty() -> Self {
        Board {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Starting position: A fills row 0, B fills row 2
    pub fn start() -> Self {
        let mut board = Self::empty();
        for side in Side::both() {
            let row = side.home_row();
            for col in 0..BOARD_SIZE {
                board.cells[row * BOARD_SIZE + col] = side.to_cell();
            }
        }
        board
    }

    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Board { cells }
    }

    /// Build a board from the positions held by each side.
    ///
    /// Positions listed for both sides end up holding B.
    pub fn from_positions(a: &[Position], b: &[Position]) -> Self {
        let mut board = Self::empty();
        for &pos in a {
            board.cells[pos.index()] = Cell::A;
        }
        for &pos in b {
            board.cells[pos.index()] = Cell::B;
        }
        board
    }

    /// Create a board from a string representation.
    ///
    /// The string must contain 9 cell characters in row-major order; whitespace and
    /// `/` row separators are ignored. Piece counts are not checked, use
    /// [`Board::parse`] for that.
    ///
    /// # Errors
    ///
    /// Returns error if fewer than 9 cells remain or any character is invalid.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();

        if chars.len() < CELL_COUNT {
            return Err(crate::Error::InvalidBoardLength {
                expected: CELL_COUNT,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (i, &c) in chars.iter().take(CELL_COUNT).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// Parse a board string and require three pieces per side.
    ///
    /// # Errors
    ///
    /// Returns the [`Board::from_string`] errors, or
    /// [`crate::Error::InvalidPieceCounts`] for a malformed piece count.
    pub fn parse(s: &str) -> Result<Self, crate::Error> {
        let board = Self::from_string(s)?;
        board.validate_piece_counts()?;
        Ok(board)
    }

    fn count_pieces(&self) -> PieceCount {
        let mut count = PieceCount { a: 0, b: 0 };
        for cell in &self.cells {
            match cell {
                Cell::A => count.a += 1,
                Cell::B => count.b += 1,
                Cell::Empty => {}
            }
        }
        count
    }

    /// Check that each side has exactly three pieces
    pub fn validate_piece_counts(&self) -> Result<(), crate::Error> {
        let count = self.count_pieces();
        if count.a == PIECES_PER_SIDE && count.b == PIECES_PER_SIDE {
            Ok(())
        } else {
            Err(crate::Error::InvalidPieceCounts {
                a_count: count.a,
                b_count: count.b,
                expected: PIECES_PER_SIDE,
            })
        }
    }

    /// Number of pieces a side has on the board
    pub fn piece_count(&self, side: Side) -> usize {
        let count = self.count_pieces();
        match side {
            Side::A => count.a,
            Side::B => count.b,
        }
    }

    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Positions held by `side`, in row-major order
    pub fn positions_of(&self, side: Side) -> impl Iterator<Item = Position> + '_ {
        let target = side.to_cell();
        Position::all().filter(move |&pos| self.get(pos) == target)
    }

    /// Get all empty positions
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::all().filter(|&pos| self.is_empty(pos)).collect()
    }

    /// Slide the piece on `mv.from` to `mv.to` and return the new board.
    ///
    /// No legality check is performed: the destination takes whatever occupies the
    /// origin and the origin is cleared. Use [`Board::make_move`] for untrusted moves.
    #[must_use = "apply returns a new board; the original is unchanged"]
    pub fn apply(&self, mv: Move) -> Board {
        let mut next = *self;
        next.cells[mv.to.index()] = self.cells[mv.from.index()];
        next.cells[mv.from.index()] = Cell::Empty;
        next
    }

    /// Apply a move after checking it is legal for `side`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::IllegalMove`] if the origin is not held by `side`, the
    /// destination is occupied, or the two positions are not connected.
    pub fn make_move(&self, mv: Move, side: Side) -> Result<Board, crate::Error> {
        let illegal = |reason: &str| crate::Error::IllegalMove {
            mv: mv.to_string(),
            side: side.to_string(),
            reason: reason.to_string(),
        };

        if self.get(mv.from) != side.to_cell() {
            return Err(illegal("origin is not occupied by the mover"));
        }
        if !self.is_empty(mv.to) {
            return Err(illegal("destination is occupied"));
        }
        if !super::connectivity::are_connected(mv.from, mv.to) {
            return Err(illegal("positions are not connected"));
        }

        Ok(self.apply(mv))
    }

    /// Swap A and B pieces on the board
    #[must_use = "swap_sides returns a new board; the original is unchanged"]
    pub fn swap_sides(&self) -> Self {
        let mut swapped = *self;
        for cell in &mut swapped.cells {
            *cell = match cell {
                Cell::A => Cell::B,
                Cell::B => Cell::A,
                Cell::Empty => Cell::Empty,
            };
        }
        swapped
    }

    /// Row-major string of the nine cells, used as a state key
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::start()
    }
}

impl FromStr for Board {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::parse(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(BOARD_SIZE) && i < CELL_COUNT - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_start_position() {
        let board = Board::start();
        assert_eq!(board.encode(), "AAA...BBB");
        assert!(board.validate_piece_counts().is_ok());
        assert_eq!(board.positions_of(Side::B).count(), 3);
    }

    #[test]
    fn test_position_bounds() {
        assert_eq!(pos(2, 1).index(), 7);
        assert!(matches!(
            Position::new(3, 0),
            Err(crate::Error::InvalidPosition { row: 3, col: 0 })
        ));
        assert!(Position::from_index(9).is_err());
        assert!(Position::CENTER.is_center());
        assert!(pos(2, 2).is_corner());
        assert!(!pos(1, 2).is_corner());
    }

    #[test]
    fn test_position_offset() {
        assert_eq!(pos(0, 0).offset(1, 1), Some(Position::CENTER));
        assert_eq!(pos(0, 0).offset(-1, 0), None);
        assert_eq!(pos(2, 2).offset(0, 1), None);
    }

    #[test]
    fn test_parse_position_and_move() {
        assert_eq!("1,2".parse::<Position>().unwrap(), pos(1, 2));
        assert_eq!("(0,0)".parse::<Position>().unwrap(), pos(0, 0));
        assert_eq!("7".parse::<Position>().unwrap(), pos(2, 1));
        assert!("3,3".parse::<Position>().is_err());
        assert!("x".parse::<Position>().is_err());

        let mv: Move = "2,1-1,1".parse().unwrap();
        assert_eq!(mv, Move::new(pos(2, 1), pos(1, 1)));
        assert_eq!("7-4".parse::<Move>().unwrap(), mv);
        assert_eq!(mv.to_string().parse::<Move>().unwrap(), mv);
        assert!("7".parse::<Move>().is_err());
    }

    #[test]
    fn test_from_string() {
        let board = Board::from_string("AB. / .A. / B.B").unwrap();
        assert_eq!(board.get(pos(0, 0)), Cell::A);
        assert_eq!(board.get(pos(0, 1)), Cell::B);
        assert_eq!(board.get(pos(2, 2)), Cell::B);

        assert!(Board::from_string("AB").is_err());
        assert!(Board::from_string("ABZ......").is_err());
    }

    #[test]
    fn test_parse_rejects_wrong_piece_counts() {
        let err = Board::parse("AAAA..BBB").unwrap_err();
        assert!(matches!(
            err,
            crate::Error::InvalidPieceCounts {
                a_count: 4,
                b_count: 3,
                ..
            }
        ));
        assert!(Board::parse("AA....BBB").is_err());
        assert!(Board::parse("A.A.A.BBB").is_ok());
    }

    #[test]
    fn test_apply_does_not_mutate_input() {
        let board = Board::start();
        let mv = Move::new(pos(0, 0), pos(1, 0));
        let next = board.apply(mv);

        assert_eq!(board.encode(), "AAA...BBB");
        assert_eq!(next.encode(), ".AAA..BBB");
        assert_eq!(next.apply(mv.reversed()), board);
    }

    #[test]
    fn test_make_move_validation() {
        let board = Board::start();

        let err = board
            .make_move(Move::new(pos(2, 0), pos(1, 0)), Side::A)
            .unwrap_err();
        assert!(err.to_string().contains("not occupied by the mover"));

        let err = board
            .make_move(Move::new(pos(0, 0), pos(0, 1)), Side::A)
            .unwrap_err();
        assert!(err.to_string().contains("occupied"));

        // (0,1) to (1,0) is a diagonal that is not a spoke
        let err = board
            .make_move(Move::new(pos(0, 1), pos(1, 0)), Side::A)
            .unwrap_err();
        assert!(err.to_string().contains("not connected"));

        let next = board
            .make_move(Move::new(pos(0, 0), pos(1, 1)), Side::A)
            .unwrap();
        assert_eq!(next.encode(), ".AA.A.BBB");
    }

    #[test]
    fn test_swap_sides() {
        let board = Board::start().swap_sides();
        assert_eq!(board.encode(), "BBB...AAA");
    }

    #[test]
    fn test_display() {
        let board = Board::start();
        assert_eq!(format!("{board}"), "AAA\n...\nBBB");
    }

    #[test]
    fn test_side_parsing() {
        assert_eq!("a".parse::<Side>().unwrap(), Side::A);
        assert_eq!(" B ".parse::<Side>().unwrap(), Side::B);
        assert!("c".parse::<Side>().is_err());
        assert_eq!(Side::A.opponent(), Side::B);
        assert_eq!(Side::B.home_row(), 2);
    }
}
