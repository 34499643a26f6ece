//! Common test utilities for the morris test suite.
//!
//! Provides exhaustive position enumeration used by the property tests.

#![allow(dead_code)]

use morris::game::{Board, CELL_COUNT, Cell, Move, PIECES_PER_SIDE};

/// Every board with exactly three A and three B pieces (9! / (3! 3! 3!) = 1680).
pub fn all_boards() -> Vec<Board> {
    let mut boards = Vec::with_capacity(1680);
    let mut cells = [Cell::Empty; CELL_COUNT];
    fill(&mut cells, 0, 0, 0, &mut boards);
    boards
}

fn fill(
    cells: &mut [Cell; CELL_COUNT],
    idx: usize,
    a: usize,
    b: usize,
    out: &mut Vec<Board>,
) {
    if idx == CELL_COUNT {
        if a == PIECES_PER_SIDE && b == PIECES_PER_SIDE {
            out.push(Board::from_cells(*cells));
        }
        return;
    }
    let remaining = CELL_COUNT - idx;
    let needed = (PIECES_PER_SIDE - a) + (PIECES_PER_SIDE - b);
    if needed < remaining {
        cells[idx] = Cell::Empty;
        fill(cells, idx + 1, a, b, out);
    }
    if a < PIECES_PER_SIDE {
        cells[idx] = Cell::A;
        fill(cells, idx + 1, a + 1, b, out);
    }
    if b < PIECES_PER_SIDE {
        cells[idx] = Cell::B;
        fill(cells, idx + 1, a, b + 1, out);
    }
    cells[idx] = Cell::Empty;
}

/// Every 13th board, for the slower search checks
pub fn sample_boards() -> Vec<Board> {
    all_boards().into_iter().step_by(13).collect()
}

pub fn mv(text: &str) -> Move {
    text.parse().unwrap()
}
