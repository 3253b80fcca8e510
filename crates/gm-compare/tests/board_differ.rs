//! Board differ behaviour against the concrete board and custom views.

use std::cell::Cell;

use gm_board::{Board, BoardView, Colour};
use gm_compare::{BoardMismatch, Rendering, check_boards_equal, diff_boards};
use proptest::prelude::*;

/// A view over a plain character grid that counts lookups.
struct CountingGrid {
    rows: Vec<Vec<char>>,
    lookups: Cell<usize>,
}

impl CountingGrid {
    fn new(rows: &[&str]) -> Self {
        Self {
            rows: rows.iter().map(|r| r.chars().collect()).collect(),
            lookups: Cell::new(0),
        }
    }
}

impl BoardView for CountingGrid {
    type Occupant = char;

    fn side(&self) -> usize {
        self.rows.len()
    }

    fn get(&self, row: usize, col: usize) -> char {
        self.lookups.set(self.lookups.get() + 1);
        self.rows[row][col]
    }
}

#[test]
fn test_size_mismatch_compares_no_points() {
    let small = CountingGrid::new(&["..", ".."]);
    let large = CountingGrid::new(&["...", "...", "..."]);
    let err = check_boards_equal(&small, &large).unwrap_err();
    assert_eq!(err.to_string(), "size is different: 2, 3");
    assert_eq!(small.lookups.get(), 0);
    assert_eq!(large.lookups.get(), 0);
}

#[test]
fn test_unrenderable_view_lists_points_only() {
    let a = CountingGrid::new(&["x.", ".."]);
    let b = CountingGrid::new(&["..", ".y"]);
    let err = check_boards_equal(&a, &b).unwrap_err();
    match &err {
        BoardMismatch::CellMismatch(report) => {
            assert_eq!(report.differences, vec![(0, 0), (1, 1)]);
            assert_eq!(report.rendering, Rendering::Unavailable);
            assert!(!report.rendering.is_available());
        }
        other => panic!("unexpected mismatch: {other:?}"),
    }
    assert_eq!(err.to_string(), "boards differ at A1 B2");
}

#[test]
fn test_every_point_is_compared() {
    let a = CountingGrid::new(&["abc", "def", "ghi"]);
    let b = CountingGrid::new(&["abc", "def", "ghi"]);
    assert_eq!(check_boards_equal(&a, &b), Ok(()));
    assert_eq!(a.lookups.get(), 9);
    assert_eq!(b.lookups.get(), 9);
}

fn occupant() -> impl Strategy<Value = Option<Colour>> {
    prop_oneof![
        Just(None),
        Just(Some(Colour::Black)),
        Just(Some(Colour::White)),
    ]
}

fn board_of_side(side: usize) -> impl Strategy<Value = Board> {
    prop::collection::vec(occupant(), side * side).prop_map(move |cells| {
        let mut board = Board::new(side).unwrap();
        for (i, colour) in cells.into_iter().enumerate() {
            board.set(i / side, i % side, colour).unwrap();
        }
        board
    })
}

fn board_pair() -> impl Strategy<Value = (Board, Board)> {
    (1usize..=9).prop_flat_map(|side| (board_of_side(side), board_of_side(side)))
}

proptest! {
    #[test]
    fn comparison_is_reflexive(board in (1usize..=13).prop_flat_map(board_of_side)) {
        prop_assert_eq!(check_boards_equal(&board, &board), Ok(()));
        prop_assert_eq!(check_boards_equal(&board, &board.clone()), Ok(()));
    }

    #[test]
    fn comparison_is_symmetric((b1, b2) in board_pair()) {
        let forward = diff_boards(&b1, &b2);
        let backward = diff_boards(&b2, &b1);
        prop_assert_eq!(&forward, &backward);
        prop_assert_eq!(
            check_boards_equal(&b1, &b2).is_ok(),
            check_boards_equal(&b2, &b1).is_ok()
        );
    }

    #[test]
    fn equal_iff_every_point_matches((b1, b2) in board_pair()) {
        let all_match = b1
            .board_coords()
            .all(|(row, col)| b1.get(row, col) == b2.get(row, col));
        prop_assert_eq!(check_boards_equal(&b1, &b2).is_ok(), all_match);
        prop_assert_eq!(all_match, b1 == b2);
    }

    #[test]
    fn different_sides_always_size_mismatch(s1 in 1usize..=19, s2 in 1usize..=19) {
        prop_assume!(s1 != s2);
        let b1 = Board::new(s1).unwrap();
        let b2 = Board::new(s2).unwrap();
        prop_assert_eq!(
            check_boards_equal(&b1, &b2),
            Err(BoardMismatch::SizeMismatch { first: s1, second: s2 })
        );
    }
}
