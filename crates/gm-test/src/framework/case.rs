//! Test cases and the assertion vocabulary.

use core::any::{Any, TypeId};
use core::fmt::Debug;
use std::collections::HashMap;

use thiserror::Error;

use crate::config::HarnessConfig;

/// The failure signal of this framework. Assertions return it; runners
/// report it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TestFailure {
    /// Id of the test case that failed.
    pub name: String,
    pub message: String,
}

pub type TestResult = Result<(), TestFailure>;

/// A type-specific equality check.
pub type EqualityFn<T> = Box<dyn Fn(&TestCase, &T, &T, Option<&str>) -> TestResult>;

/// Per-case table of type-specific equality functions.
///
/// [`TestCase::assert_equal`] consults it before falling back to
/// `PartialEq`.
#[derive(Default)]
pub struct TypeEqualityRegistry {
    funcs: HashMap<TypeId, Box<dyn Any>>,
}

impl TypeEqualityRegistry {
    /// Register `func` for `T`, replacing any earlier registration.
    pub fn register<T, F>(&mut self, func: F)
    where
        T: Any,
        F: Fn(&TestCase, &T, &T, Option<&str>) -> TestResult + 'static,
    {
        let func: EqualityFn<T> = Box::new(func);
        self.funcs.insert(TypeId::of::<T>(), Box::new(func));
    }

    /// The function registered for `T`, if any.
    pub fn lookup<T: Any>(&self) -> Option<&EqualityFn<T>> {
        self.funcs.get(&TypeId::of::<T>())?.downcast_ref()
    }

    pub fn contains<T: Any>(&self) -> bool {
        self.funcs.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.funcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.funcs.is_empty()
    }
}

impl core::fmt::Debug for TypeEqualityRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TypeEqualityRegistry")
            .field("registered", &self.funcs.len())
            .finish()
    }
}

/// State and default assertions shared by every test case.
#[derive(Debug)]
pub struct TestCase {
    id: String,
    long_message: bool,
    type_equality: TypeEqualityRegistry,
}

impl TestCase {
    pub fn new(id: impl Into<String>, config: &HarnessConfig) -> Self {
        Self {
            id: id.into(),
            long_message: config.long_message,
            type_equality: TypeEqualityRegistry::default(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn long_message(&self) -> bool {
        self.long_message
    }

    pub fn set_long_message(&mut self, long_message: bool) {
        self.long_message = long_message;
    }

    pub fn type_equality(&self) -> &TypeEqualityRegistry {
        &self.type_equality
    }

    /// Use `func` whenever [`assert_equal`](Self::assert_equal) sees two
    /// values of type `T`.
    pub fn add_type_equality_func<T, F>(&mut self, func: F)
    where
        T: Any,
        F: Fn(&TestCase, &T, &T, Option<&str>) -> TestResult + 'static,
    {
        self.type_equality.register(func);
    }

    pub fn failure(&self, message: impl Into<String>) -> TestFailure {
        TestFailure {
            name: self.id.clone(),
            message: message.into(),
        }
    }

    /// Combine a caller's message with a standard one.
    ///
    /// Without long messages the caller's message wins when present and
    /// non-empty. With long messages both appear as `standard : msg`.
    pub fn format_message(&self, msg: Option<&str>, standard: &str) -> String {
        if !self.long_message {
            return msg.filter(|m| !m.is_empty()).unwrap_or(standard).to_string();
        }
        match msg {
            None => standard.to_string(),
            Some(msg) => format!("{standard} : {msg}"),
        }
    }

    pub fn fail(&self, msg: &str) -> TestResult {
        Err(self.failure(msg))
    }

    pub fn assert_equal<T>(&self, first: &T, second: &T, msg: Option<&str>) -> TestResult
    where
        T: Any + PartialEq + Debug,
    {
        if let Some(func) = self.type_equality.lookup::<T>() {
            return func(self, first, second, msg);
        }
        if first == second {
            return Ok(());
        }
        Err(self.failure(self.format_message(msg, &format!("{first:?} != {second:?}"))))
    }

    pub fn assert_not_equal<T>(&self, first: &T, second: &T, msg: Option<&str>) -> TestResult
    where
        T: Any + PartialEq + Debug,
    {
        if first != second {
            return Ok(());
        }
        Err(self.failure(self.format_message(msg, &format!("{first:?} == {second:?}"))))
    }

    pub fn assert_true(&self, expr: bool, msg: Option<&str>) -> TestResult {
        if expr {
            return Ok(());
        }
        Err(self.failure(self.format_message(msg, "false is not true")))
    }

    pub fn assert_false(&self, expr: bool, msg: Option<&str>) -> TestResult {
        if !expr {
            return Ok(());
        }
        Err(self.failure(self.format_message(msg, "true is not false")))
    }
}

/// The assertion vocabulary available inside test bodies.
///
/// Every method defaults to the [`TestCase`] behaviour, so implementors only
/// override what they extend.
///
/// `assert_equal` and `assert_not_equal` dispatch on [`TypeId`], so their
/// operands must be `'static`: `&s.as_str()` on a local `String` is rejected,
/// while `&s` (a `String`) or a string literal is accepted.
pub trait Assertions {
    fn test_case(&self) -> &TestCase;

    fn fail(&self, msg: &str) -> TestResult {
        self.test_case().fail(msg)
    }

    fn format_message(&self, msg: Option<&str>, standard: &str) -> String {
        self.test_case().format_message(msg, standard)
    }

    fn assert_equal<T>(&self, first: &T, second: &T, msg: Option<&str>) -> TestResult
    where
        T: Any + PartialEq + Debug,
    {
        self.test_case().assert_equal(first, second, msg)
    }

    fn assert_not_equal<T>(&self, first: &T, second: &T, msg: Option<&str>) -> TestResult
    where
        T: Any + PartialEq + Debug,
    {
        self.test_case().assert_not_equal(first, second, msg)
    }

    fn assert_true(&self, expr: bool, msg: Option<&str>) -> TestResult {
        self.test_case().assert_true(expr, msg)
    }

    fn assert_false(&self, expr: bool, msg: Option<&str>) -> TestResult {
        self.test_case().assert_false(expr, msg)
    }
}

impl Assertions for TestCase {
    fn test_case(&self) -> &TestCase {
        self
    }
}
