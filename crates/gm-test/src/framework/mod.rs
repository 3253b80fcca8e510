//! Minimal assertion framework: test cases, assertions, suites and a runner.

pub mod case;
pub mod simple;
pub mod suite;

pub use case::{Assertions, EqualityFn, TestCase, TestFailure, TestResult, TypeEqualityRegistry};
pub use simple::{PlainTestCase, SimpleTestCase, TestFn, TestModule, make_simple_tests};
pub use suite::{CaseResult, Outcome, Suite, SuiteReport};
