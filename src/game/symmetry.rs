//! D4 symmetry group operations on positions, moves and boards

use serde::{Deserialize, Serialize};

use super::board::{BOARD_SIZE, Board, CELL_COUNT, Cell, Move, Position};

/// D4 symmetry transformation (dihedral group of the square)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct D4Transform {
    /// Rotation in degrees (0, 90, 180, 270)
    pub rotation: u16,
    /// Whether to apply reflection
    pub reflection: bool,
}

impl D4Transform {
    pub fn identity() -> Self {
        D4Transform {
            rotation: 0,
            reflection: false,
        }
    }

    /// Get all 8 D4 transforms
    pub fn all() -> Vec<D4Transform> {
        let mut transforms = Vec::with_capacity(8);
        for rotation in [0, 90, 180, 270] {
            transforms.push(D4Transform {
                rotation,
                reflection: false,
            });
            transforms.push(D4Transform {
                rotation,
                reflection: true,
            });
        }
        transforms
    }

    /// Apply transform to a position
    pub fn transform_position(&self, pos: Position) -> Position {
        let last = BOARD_SIZE - 1;
        let (mut row, mut col) = (pos.row(), pos.col());

        // Reflect across the vertical axis before rotating
        if self.reflection {
            col = last - col;
        }

        // Clockwise quarter turns
        for _ in 0..(self.rotation / 90) {
            let new_row = col;
            let new_col = last - row;
            row = new_row;
            col = new_col;
        }

        Position::at(row * BOARD_SIZE + col)
    }

    pub fn transform_move(&self, mv: Move) -> Move {
        Move::new(
            self.transform_position(mv.from),
            self.transform_position(mv.to),
        )
    }

    /// Get the inverse transform
    pub fn inverse(&self) -> D4Transform {
        if self.reflection {
            // Reflect-then-rotate compositions are involutions
            *self
        } else {
            D4Transform {
                rotation: (360 - self.rotation) % 360,
                reflection: false,
            }
        }
    }
}

impl Board {
    /// Apply a D4 transform to the board
    #[must_use = "transform returns a new board; the original is unchanged"]
    pub fn transform(&self, t: &D4Transform) -> Self {
        let mut cells = [Cell::Empty; CELL_COUNT];
        for pos in Position::all() {
            cells[t.transform_position(pos).index()] = self.get(pos);
        }
        Board { cells }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::connectivity;

    #[test]
    fn test_inverse_round_trip() {
        for t in D4Transform::all() {
            for pos in Position::all() {
                let there = t.transform_position(pos);
                assert_eq!(t.inverse().transform_position(there), pos, "{t:?}");
            }
        }
    }

    #[test]
    fn test_transforms_are_distinct() {
        let marker = Board::from_string("AB.......").unwrap();
        let images: std::collections::HashSet<String> = D4Transform::all()
            .iter()
            .map(|t| marker.transform(t).encode())
            .collect();
        assert_eq!(images.len(), 8);
    }

    #[test]
    fn test_center_is_fixed() {
        for t in D4Transform::all() {
            assert_eq!(t.transform_position(Position::CENTER), Position::CENTER);
        }
    }

    #[test]
    fn test_graph_is_invariant() {
        for t in D4Transform::all() {
            for a in Position::all() {
                for &b in connectivity::neighbors(a) {
                    assert!(connectivity::are_connected(
                        t.transform_position(a),
                        t.transform_position(b)
                    ));
                }
            }
        }
    }
}
