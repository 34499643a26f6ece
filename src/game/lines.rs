//! Winning line analysis

use super::{Cell, Side};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a side has three in a line
    pub fn has_won(cells: &[Cell; 9], side: Side) -> bool {
        let target = side.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// Number of lines fully held by a side (lines sharing a cell count separately)
    pub fn completed_lines(cells: &[Cell; 9], side: Side) -> usize {
        let target = side.to_cell();
        WINNING_LINES
            .iter()
            .filter(|line| line.iter().all(|&idx| cells[idx] == target))
            .count()
    }

    /// Pieces of `side` in a single line
    pub fn pieces_in_line(cells: &[Cell; 9], side: Side, line: &[usize; 3]) -> usize {
        let target = side.to_cell();
        line.iter().filter(|&&idx| cells[idx] == target).count()
    }
}
