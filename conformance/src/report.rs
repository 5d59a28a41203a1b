//! Conformance report types: results, severity levels, and report aggregation.

use std::fmt;

/// Severity level of a conformance check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The check passed.
    Pass,
    /// The check identified a warning (non-blocking).
    Warning,
    /// The check failed (blocks conformance).
    Failure,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Pass => "PASS",
            Severity::Warning => "WARN",
            Severity::Failure => "FAIL",
        })
    }
}

/// A single conformance check result.
#[derive(Debug, Clone)]
pub struct TestResult {
    /// Short identifier of the validator that produced this result.
    pub validator: &'static str,
    /// Human-readable message describing the outcome.
    pub message: String,
    /// Severity of the result.
    pub severity: Severity,
    /// Offending property names or other detail lines.
    pub details: Vec<String>,
}

impl TestResult {
    fn new(validator: &'static str, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            validator,
            message: message.into(),
            severity,
            details: Vec::new(),
        }
    }

    /// Creates a passing result.
    pub fn pass(validator: &'static str, message: impl Into<String>) -> Self {
        Self::new(validator, message, Severity::Pass)
    }

    /// Creates a failure result.
    pub fn fail(validator: &'static str, message: impl Into<String>) -> Self {
        Self::new(validator, message, Severity::Failure)
    }

    /// Creates a warning result.
    pub fn warn(validator: &'static str, message: impl Into<String>) -> Self {
        Self::new(validator, message, Severity::Warning)
    }

    /// Attaches detail lines.
    #[must_use]
    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = details;
        self
    }

    /// Returns a failure listing `offenders` when there are any, otherwise a pass.
    pub fn check(
        validator: &'static str,
        offenders: Vec<String>,
        pass: impl Into<String>,
        fail: impl Into<String>,
    ) -> Self {
        if offenders.is_empty() {
            Self::pass(validator, pass)
        } else {
            Self::fail(validator, fail).with_details(offenders)
        }
    }

    /// Returns true if this result represents a failure.
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }
}

/// Aggregated conformance report from all validators.
#[derive(Debug, Default)]
pub struct ConformanceReport {
    /// All individual results across all validators.
    pub results: Vec<TestResult>,
}

impl ConformanceReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result to this report.
    pub fn push(&mut self, result: TestResult) {
        self.results.push(result);
    }

    /// Extends this report with results from another report.
    pub fn extend(&mut self, other: ConformanceReport) {
        self.results.extend(other.results);
    }

    /// Returns the number of results with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.results.iter().filter(|r| r.severity == severity).count()
    }

    /// Returns the count of failed checks.
    pub fn failure_count(&self) -> usize {
        self.count(Severity::Failure)
    }

    /// Returns true if all checks passed (no failures).
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_fails_with_offenders() {
        let result = TestResult::check("table/x", vec!["gap".to_owned()], "ok", "bad");
        assert!(result.is_failure());
        assert_eq!(result.message, "bad");
        assert_eq!(result.details, ["gap"]);

        let result = TestResult::check("table/x", Vec::new(), "ok", "bad");
        assert_eq!(result.severity, Severity::Pass);
    }

    #[test]
    fn counts_by_severity() {
        let mut report = ConformanceReport::new();
        report.push(TestResult::pass("a", "ok"));
        report.push(TestResult::warn("a", "hm"));
        assert!(report.all_passed());
        report.push(TestResult::fail("b", "no"));
        assert_eq!(report.count(Severity::Warning), 1);
        assert_eq!(report.failure_count(), 1);
        assert!(!report.all_passed());
        assert_eq!(Severity::Failure.to_string(), "FAIL");
    }
}
