//! Simple tests: plain functions promoted to test cases.
//!
//! A [`TestModule`] lists named functions in declaration order.
//! [`make_simple_tests`] selects those whose name starts with a prefix and
//! wraps each one in a test case whose body is that function.

use crate::config::HarnessConfig;
use crate::framework::case::{Assertions, TestCase, TestResult};
use crate::framework::suite::Suite;

/// Body of a simple test. It receives its own test case for assertions.
pub type TestFn<C> = fn(&C) -> TestResult;

/// Named functions in declaration order.
pub struct TestModule<C> {
    name: String,
    functions: Vec<(String, TestFn<C>)>,
}

impl<C> TestModule<C> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            functions: Vec::new(),
        }
    }

    /// Declare the next function.
    pub fn function(mut self, name: impl Into<String>, func: TestFn<C>) -> Self {
        self.functions.push((name.into(), func));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared functions, in declaration order.
    pub fn functions(&self) -> impl Iterator<Item = (&str, TestFn<C>)> {
        self.functions.iter().map(|(name, func)| (name.as_str(), *func))
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

/// Declare a [`TestModule`] from functions in scope, keeping their order.
///
/// ```ignore
/// let module: TestModule<GomillTestCase> =
///     test_module!("board_tests"; test_alpha, helper, test_beta);
/// ```
#[macro_export]
macro_rules! test_module {
    ($name:expr; $($func:ident),* $(,)?) => {
        $crate::framework::TestModule::new($name)
            $(.function(stringify!($func), $func))*
    };
}

/// A test case built around a single function.
pub trait SimpleTestCase: Assertions + Sized {
    /// Build the case for `body`, named `name`.
    fn from_function(name: &str, body: TestFn<Self>, config: &HarnessConfig) -> Self;

    fn body(&self) -> TestFn<Self>;

    fn name(&self) -> &str {
        self.test_case().id()
    }

    fn run_body(&self) -> TestResult {
        (self.body())(self)
    }
}

/// A simple test case with only the framework's own assertions.
pub struct PlainTestCase {
    case: TestCase,
    body: TestFn<PlainTestCase>,
}

impl Assertions for PlainTestCase {
    fn test_case(&self) -> &TestCase {
        &self.case
    }
}

impl SimpleTestCase for PlainTestCase {
    fn from_function(name: &str, body: TestFn<Self>, config: &HarnessConfig) -> Self {
        Self {
            case: TestCase::new(name, config),
            body,
        }
    }

    fn body(&self) -> TestFn<Self> {
        self.body
    }
}

/// One test case per function of `module` whose name starts with `prefix`.
///
/// Cases keep the module's declaration order.
pub fn make_simple_tests<C>(module: &TestModule<C>, prefix: &str, config: &HarnessConfig) -> Suite<C>
where
    C: SimpleTestCase,
{
    let mut suite = Suite::new(module.name());
    for (name, func) in module.functions() {
        if !name.starts_with(prefix) {
            tracing::trace!(module = module.name(), function = name, "not a test function");
            continue;
        }
        suite.push(C::from_function(name, func, config));
    }
    tracing::debug!(
        module = module.name(),
        prefix,
        selected = suite.len(),
        declared = module.len(),
        "built simple test suite"
    );
    suite
}
