//! gomill test support
//!
//! A small assertion framework plus the pieces that make it board-aware:
//!
//! 1. **Framework**: [`framework::TestCase`], the [`Assertions`] vocabulary,
//!    per-case type-equality functions, suites and a runner.
//! 2. **Board assertions**: [`BoardAssertions`], which routes board equality
//!    through the point-by-point differ in `gm-compare`.
//! 3. **Simple tests**: [`make_simple_tests`] turns the `test_*` functions of a
//!    [`framework::TestModule`] into a runnable [`framework::Suite`].

pub mod config;
pub mod framework;
pub mod support;

// Re-export commonly used items
pub use config::{ConfigError, HarnessConfig};
pub use framework::{Assertions, TestFailure, TestResult};
pub use support::{BoardAssertions, GomillTestCase, make_simple_tests, make_simple_tests_with};
