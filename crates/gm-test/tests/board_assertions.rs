//! Board-aware assertions compared with the plain framework.

use gm_board::{Board, BoardView, Colour, RenderError};
use gm_test::framework::{PlainTestCase, SimpleTestCase};
use gm_test::{Assertions, BoardAssertions, GomillTestCase, HarnessConfig, TestResult};

fn noop_gomill(_tc: &GomillTestCase) -> TestResult {
    Ok(())
}

fn noop_plain(_tc: &PlainTestCase) -> TestResult {
    Ok(())
}

fn configs() -> [HarnessConfig; 2] {
    [
        HarnessConfig::default(),
        HarnessConfig {
            long_message: true,
            ..HarnessConfig::default()
        },
    ]
}

/// A board whose diagram can never be drawn.
struct Unrenderable(Board);

impl BoardView for Unrenderable {
    type Occupant = Option<Colour>;

    fn side(&self) -> usize {
        self.0.side()
    }

    fn get(&self, row: usize, col: usize) -> Option<Colour> {
        self.0.get(row, col)
    }

    fn render(&self) -> Result<String, RenderError> {
        Err(RenderError::Failed("display offline".into()))
    }
}

#[test]
fn test_not_equal_matches_plain_framework_for_other_types() {
    for config in configs() {
        let gomill = GomillTestCase::from_function("g", noop_gomill, &config);
        let plain = PlainTestCase::from_function("p", noop_plain, &config);
        for (a, b) in [(1, 2), (3, 3), (-5, 5), (0, 0)] {
            for msg in [None, Some("ints")] {
                assert_eq!(
                    gomill.assert_not_equal(&a, &b, msg),
                    plain.assert_not_equal(&a, &b, msg)
                );
            }
        }
        assert_eq!(
            gomill.assert_not_equal(&"same", &"same", None),
            plain.assert_not_equal(&"same", &"same", None)
        );
        assert_eq!(
            gomill.assert_not_equal(&vec![1, 2], &vec![1, 2], Some("vecs")),
            plain.assert_not_equal(&vec![1, 2], &vec![1, 2], Some("vecs"))
        );
    }
}

#[test]
fn test_equal_boards_without_board_assertions() {
    let plain = PlainTestCase::from_function("p", noop_plain, &HarnessConfig::default());
    let b1 = Board::new(3).unwrap();
    let mut b2 = Board::new(3).unwrap();
    b2.set(0, 0, Some(Colour::Black)).unwrap();
    let failure = plain.assert_equal(&b1, &b2, None).unwrap_err();
    assert!(failure.message.contains(" != "));
    assert!(!failure.message.contains("boards differ"));
}

#[test]
fn test_equal_boards_with_board_assertions() {
    let gomill = GomillTestCase::from_function("g", noop_gomill, &HarnessConfig::default());
    let b1 = Board::new(3).unwrap();
    let mut b2 = Board::new(3).unwrap();
    b2.set(0, 0, Some(Colour::Black)).unwrap();
    assert_eq!(gomill.assert_equal(&b1, &b1.clone(), None), Ok(()));
    let failure = gomill.assert_equal(&b1, &b2, None).unwrap_err();
    assert!(failure.message.starts_with("boards differ at A1\n"));
}

#[test]
fn test_unrenderable_boards_still_report_points() {
    let gomill = GomillTestCase::from_function("g", noop_gomill, &HarnessConfig::default());
    let mut b1 = Board::new(4).unwrap();
    let mut b2 = Board::new(4).unwrap();
    b1.set(0, 3, Some(Colour::White)).unwrap();
    b2.set(3, 0, Some(Colour::White)).unwrap();
    let failure = gomill
        .assert_board_equal(&Unrenderable(b1), &Unrenderable(b2), None)
        .unwrap_err();
    assert_eq!(failure.message, "boards differ at D1 A4\n");
}

#[test]
fn test_board_not_equal_on_views() {
    let gomill = GomillTestCase::from_function("g", noop_gomill, &HarnessConfig::default());
    let board = Board::new(2).unwrap();
    let failure = gomill
        .assert_board_not_equal(&Unrenderable(board.clone()), &Unrenderable(board), Some("no change"))
        .unwrap_err();
    assert_eq!(failure.message, "no change");
}

#[test]
fn test_size_mismatch_counts_as_not_equal() {
    let gomill = GomillTestCase::from_function("g", noop_gomill, &HarnessConfig::default());
    let small = Board::new(9).unwrap();
    let large = Board::new(19).unwrap();
    assert_eq!(gomill.assert_not_equal(&small, &large, None), Ok(()));
    assert_eq!(
        gomill.assert_equal(&small, &large, None).unwrap_err().message,
        "size is different: 9, 19\n"
    );
}

#[test]
fn test_cases_built_concurrently_are_independent() {
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                scope.spawn(move || {
                    let config = HarnessConfig {
                        long_message: i % 2 == 0,
                        ..HarnessConfig::default()
                    };
                    let tc = GomillTestCase::from_function("t", noop_gomill, &config);
                    let board = Board::new(5).unwrap();
                    tc.assert_not_equal(&board, &board.clone(), Some("thread"))
                        .unwrap_err()
                        .message
                })
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            let message = handle.join().unwrap();
            if i % 2 == 0 {
                assert_eq!(message, "boards have the same position : thread");
            } else {
                assert_eq!(message, "thread");
            }
        }
    });
}
