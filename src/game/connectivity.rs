//! Connectivity graph of the board: orthogonal links plus the four corner spokes

use std::sync::LazyLock;

use super::board::{BOARD_SIZE, CELL_COUNT, Position};

/// Orthogonal steps in neighbour order: up, down, left, right
const ORTHOGONAL_STEPS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Corners in the order the center lists its spokes
const CORNERS: [usize; 4] = [0, 2, 6, 8];

static GRAPH: LazyLock<ConnectivityGraph> = LazyLock::new(ConnectivityGraph::build);

/// Adjacency table for the nine positions.
///
/// Every horizontally or vertically adjacent pair is connected (12 edges). The only
/// diagonal edges are the spokes joining each corner to the center (4 edges). Each
/// neighbour list is ordered up, down, left, right, then spokes.
#[derive(Debug, Clone)]
pub struct ConnectivityGraph {
    neighbors: [Vec<Position>; CELL_COUNT],
}

impl ConnectivityGraph {
    /// The process-wide graph, built on first use
    pub fn global() -> &'static ConnectivityGraph {
        &GRAPH
    }

    fn build() -> Self {
        let mut neighbors: [Vec<Position>; CELL_COUNT] = Default::default();

        for pos in Position::all() {
            let list = &mut neighbors[pos.index()];
            for (d_row, d_col) in ORTHOGONAL_STEPS {
                if let Some(next) = pos.offset(d_row, d_col) {
                    list.push(next);
                }
            }

            if pos.is_corner() {
                list.push(Position::CENTER);
            } else if pos.is_center() {
                list.extend(CORNERS.iter().map(|&idx| Position::at(idx)));
            }
        }

        ConnectivityGraph { neighbors }
    }

    /// Neighbours of `pos` in fixed order
    pub fn neighbors(&self, pos: Position) -> &[Position] {
        &self.neighbors[pos.index()]
    }

    pub fn are_connected(&self, a: Position, b: Position) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// Every undirected edge once, lower index first
    pub fn edges(&self) -> Vec<(Position, Position)> {
        Position::all()
            .flat_map(|a| {
                self.neighbors(a)
                    .iter()
                    .filter(move |&&b| a < b)
                    .map(move |&b| (a, b))
            })
            .collect()
    }
}

/// Neighbours of `pos` in the global graph
pub fn neighbors(pos: Position) -> &'static [Position] {
    ConnectivityGraph::global().neighbors(pos)
}

/// Neighbours of the position at raw coordinates.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidPosition`] when `row` or `col` is outside 0-2; the
/// graph has no entries for such coordinates.
pub fn neighbors_at(row: usize, col: usize) -> Result<&'static [Position], crate::Error> {
    if row >= BOARD_SIZE || col >= BOARD_SIZE {
        return Err(crate::Error::InvalidPosition { row, col });
    }
    Ok(neighbors(Position::new(row, col)?))
}

pub fn are_connected(a: Position, b: Position) -> bool {
    ConnectivityGraph::global().are_connected(a, b)
}
