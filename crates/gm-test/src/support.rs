//! Board-aware assertions.
//!
//! [`BoardAssertions`] adds to the framework's [`Assertions`]:
//!  - `assert_board_equal`
//!  - `assert_equal` for [`Board`]s, through the case's type-equality table
//!  - `assert_not_equal` for [`Board`]s
//!
//! [`GomillTestCase`] is the simple test case carrying these, and
//! [`make_simple_tests`] builds suites of them.

use core::any::Any;
use core::fmt::Debug;

use gm_board::{Board, BoardView};
use gm_compare::check_boards_equal;

use crate::config::HarnessConfig;
use crate::framework::{self, Assertions, SimpleTestCase, Suite, TestCase, TestFn, TestModule, TestResult};

/// Standard message when two boards expected to differ do not.
pub const SAME_POSITION: &str = "boards have the same position";

/// Board-aware additions to [`Assertions`].
pub trait BoardAssertions: Assertions {
    fn test_case_mut(&mut self) -> &mut TestCase;

    /// Route `assert_equal` on [`Board`]s through the board differ.
    ///
    /// Call once when the case is constructed.
    fn init_board_assertions(&mut self) {
        self.test_case_mut()
            .add_type_equality_func::<Board, _>(board_equal::<Board>);
    }

    /// Fail unless the boards hold the same position.
    ///
    /// The failure message lists every differing point, followed by both
    /// boards when they can be rendered.
    fn assert_board_equal<B>(&self, b1: &B, b2: &B, msg: Option<&str>) -> TestResult
    where
        B: BoardView + ?Sized,
    {
        board_equal(self.test_case(), b1, b2, msg)
    }

    /// Fail if the boards hold the same position.
    fn assert_board_not_equal<B>(&self, b1: &B, b2: &B, msg: Option<&str>) -> TestResult
    where
        B: BoardView + ?Sized,
    {
        board_not_equal(self.test_case(), b1, b2, msg)
    }

    /// `assert_not_equal` that compares [`Board`]s by position and leaves
    /// every other type to the framework.
    fn board_aware_not_equal<T>(&self, first: &T, second: &T, msg: Option<&str>) -> TestResult
    where
        T: Any + PartialEq + Debug,
    {
        let (any_first, any_second): (&dyn Any, &dyn Any) = (first, second);
        match (any_first.downcast_ref::<Board>(), any_second.downcast_ref::<Board>()) {
            (Some(b1), Some(b2)) => self.assert_board_not_equal(b1, b2, msg),
            _ => self.test_case().assert_not_equal(first, second, msg),
        }
    }
}

fn board_equal<B>(tc: &TestCase, b1: &B, b2: &B, msg: Option<&str>) -> TestResult
where
    B: BoardView + ?Sized,
{
    check_boards_equal(b1, b2).map_err(|mismatch| tc.failure(tc.format_message(msg, &format!("{mismatch}\n"))))
}

fn board_not_equal<B>(tc: &TestCase, b1: &B, b2: &B, msg: Option<&str>) -> TestResult
where
    B: BoardView + ?Sized,
{
    match check_boards_equal(b1, b2) {
        Err(_) => Ok(()),
        Ok(()) => Err(tc.failure(tc.format_message(msg, SAME_POSITION))),
    }
}

/// Simple test case with board-aware assertions.
pub struct GomillTestCase {
    case: TestCase,
    body: TestFn<GomillTestCase>,
}

impl Assertions for GomillTestCase {
    fn test_case(&self) -> &TestCase {
        &self.case
    }

    fn assert_not_equal<T>(&self, first: &T, second: &T, msg: Option<&str>) -> TestResult
    where
        T: Any + PartialEq + Debug,
    {
        self.board_aware_not_equal(first, second, msg)
    }
}

impl BoardAssertions for GomillTestCase {
    fn test_case_mut(&mut self) -> &mut TestCase {
        &mut self.case
    }
}

impl SimpleTestCase for GomillTestCase {
    fn from_function(name: &str, body: TestFn<Self>, config: &HarnessConfig) -> Self {
        let mut tc = Self {
            case: TestCase::new(name, config),
            body,
        };
        tc.init_board_assertions();
        tc
    }

    fn body(&self) -> TestFn<Self> {
        self.body
    }
}

/// Make test cases from a module's functions whose names start with `prefix`.
///
/// The test functions can use the [`BoardAssertions`] methods.
pub fn make_simple_tests(module: &TestModule<GomillTestCase>, prefix: &str) -> Suite<GomillTestCase> {
    framework::make_simple_tests(module, prefix, &HarnessConfig::default())
}

/// Like [`make_simple_tests`], taking the prefix and message style from
/// `config`.
pub fn make_simple_tests_with(
    module: &TestModule<GomillTestCase>,
    config: &HarnessConfig,
) -> Suite<GomillTestCase> {
    framework::make_simple_tests(module, &config.prefix, config)
}
