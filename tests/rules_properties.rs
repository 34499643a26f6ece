//! Exhaustive rule properties over every 3-vs-3 position

mod common;

use std::collections::HashSet;

use common::all_boards;
use morris::game::{Board, ConnectivityGraph, D4Transform, Move, Position, Side, connectivity};

#[test]
fn test_enumeration_is_complete() {
    let boards = all_boards();
    assert_eq!(boards.len(), 1680);
    let distinct: HashSet<String> = boards.iter().map(Board::encode).collect();
    assert_eq!(distinct.len(), 1680);
    assert!(boards.iter().all(|b| b.validate_piece_counts().is_ok()));
}

#[test]
fn test_legal_moves_are_legal() {
    for board in all_boards() {
        for side in Side::both() {
            for mv in board.legal_moves(side) {
                assert_eq!(board.get(mv.from), side.to_cell(), "{board:?} {mv}");
                assert!(board.is_empty(mv.to), "{board:?} {mv}");
                assert!(connectivity::are_connected(mv.from, mv.to));
                assert!(board.make_move(mv, side).is_ok());
            }
        }
    }
}

#[test]
fn test_legal_moves_are_complete() {
    for board in all_boards() {
        for side in Side::both() {
            let generated: HashSet<Move> = board.legal_moves(side).into_iter().collect();
            for from in Position::all() {
                for to in Position::all() {
                    let mv = Move::new(from, to);
                    assert_eq!(
                        generated.contains(&mv),
                        board.is_legal_move(mv, side),
                        "{} {mv}",
                        board.encode()
                    );
                }
            }
            assert_eq!(board.is_blocked(side), generated.is_empty());
        }
    }
}

#[test]
fn test_only_spokes_are_diagonal() {
    let graph = ConnectivityGraph::global();
    let diagonal: Vec<(Position, Position)> = graph
        .edges()
        .into_iter()
        .filter(|&(a, b)| Move::new(a, b).is_diagonal())
        .collect();
    assert_eq!(diagonal.len(), 4);
    for (a, b) in diagonal {
        assert!(a.is_center() || b.is_center());
        assert!(a.is_corner() || b.is_corner());
    }

    // (0,1) -> (1,0) is diagonal but not a spoke
    let board = Board::from_string(".A.......").unwrap();
    let mv = Move::new(Position::new(0, 1).unwrap(), Position::new(1, 0).unwrap());
    assert!(!board.is_legal_move(mv, Side::A));
}

#[test]
fn test_win_is_symmetric_under_side_swap() {
    for board in all_boards() {
        let swapped = board.swap_sides();
        assert_eq!(board.is_winning(Side::A), swapped.is_winning(Side::B));
        assert_eq!(board.is_winning(Side::B), swapped.is_winning(Side::A));
    }
}

#[test]
fn test_win_is_invariant_under_d4() {
    let transforms = D4Transform::all();
    for board in all_boards() {
        for t in &transforms {
            let image = board.transform(t);
            for side in Side::both() {
                assert_eq!(board.is_winning(side), image.is_winning(side));
            }
            assert_eq!(
                board.legal_moves(Side::A).len(),
                image.legal_moves(Side::A).len()
            );
        }
    }
}

#[test]
fn test_apply_then_reverse_restores_board() {
    for board in all_boards() {
        for side in Side::both() {
            for mv in board.legal_moves(side) {
                let after = board.apply(mv);
                assert_eq!(after.apply(mv.reversed()), board);
                assert!(after.is_legal_move(mv.reversed(), side));
            }
        }
    }
}

#[test]
fn test_every_blocked_board_holds_a_line() {
    for board in all_boards() {
        for side in Side::both() {
            if board.is_blocked(side) {
                assert!(board.winner().is_some(), "{}", board.encode());
            }
        }
    }
}
