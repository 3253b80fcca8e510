//! Suites and the runner.

use std::panic::{self, AssertUnwindSafe};

use serde::{Deserialize, Serialize};

use crate::framework::simple::SimpleTestCase;

/// Test cases in the order they will run.
pub struct Suite<C> {
    name: String,
    cases: Vec<C>,
}

impl<C> Suite<C> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cases: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn push(&mut self, case: C) {
        self.cases.push(case);
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &C> {
        self.cases.iter()
    }
}

impl<C: SimpleTestCase> Suite<C> {
    pub fn names(&self) -> Vec<&str> {
        self.cases.iter().map(SimpleTestCase::name).collect()
    }

    /// Run every case in order.
    ///
    /// A panicking body is reported as an error and does not stop the run.
    pub fn run(&self) -> SuiteReport {
        let mut report = SuiteReport::new(&self.name);
        for case in &self.cases {
            let outcome = match panic::catch_unwind(AssertUnwindSafe(|| case.run_body())) {
                Ok(Ok(())) => Outcome::Passed,
                Ok(Err(failure)) => {
                    tracing::trace!(case = %failure.name, message = %failure.message, "assertion failed");
                    Outcome::Failed {
                        message: failure.message,
                    }
                }
                Err(payload) => Outcome::Error {
                    message: panic_message(payload.as_ref()),
                },
            };
            tracing::debug!(suite = %self.name, case = case.name(), outcome = outcome.label(), "ran test case");
            report.results.push(CaseResult {
                name: case.name().to_string(),
                outcome,
            });
        }
        report
    }
}

impl<C> IntoIterator for Suite<C> {
    type Item = C;
    type IntoIter = std::vec::IntoIter<C>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases.into_iter()
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "test body panicked".to_string()
    }
}

/// How a single case ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Passed,
    /// An assertion failed.
    Failed { message: String },
    /// The body panicked.
    Error { message: String },
}

impl Outcome {
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Passed => "PASS",
            Outcome::Failed { .. } => "FAIL",
            Outcome::Error { .. } => "ERROR",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseResult {
    pub name: String,
    pub outcome: Outcome,
}

/// Results of a suite run, in run order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    pub suite: String,
    pub results: Vec<CaseResult>,
}

impl SuiteReport {
    pub fn new(suite: &str) -> Self {
        Self {
            suite: suite.to_string(),
            results: Vec::new(),
        }
    }

    /// True if every case passed.
    pub fn passed(&self) -> bool {
        self.results.iter().all(|r| r.outcome == Outcome::Passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseResult> {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, Outcome::Failed { .. }))
    }

    pub fn errors(&self) -> impl Iterator<Item = &CaseResult> {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, Outcome::Error { .. }))
    }

    /// Human-readable summary, one block per failing case.
    pub fn summary(&self) -> String {
        let mut out = format!(
            "{}: {} run, {} failed, {} errors\n",
            self.suite,
            self.results.len(),
            self.failures().count(),
            self.errors().count()
        );
        for result in &self.results {
            if let Outcome::Failed { message } | Outcome::Error { message } = &result.outcome {
                out.push_str(&format!(
                    "{} {}\n{}\n",
                    result.outcome.label(),
                    result.name,
                    message
                ));
            }
        }
        out
    }

    pub fn print_summary(&self) {
        print!("{}", self.summary());
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }
}
