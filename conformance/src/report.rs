//! Validation report types: results, severity levels, and report aggregation.

use std::fmt;

/// Severity level of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The check passed.
    Pass,
    /// The data deviates from the ontology's intent but the graph is still usable.
    Warning,
    /// The graph or artifact is broken.
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

/// The outcome of one check.
#[derive(Debug, Clone)]
pub struct TestResult {
    /// Short identifier of the validator, e.g. `data/cardinality`.
    pub validator: String,
    /// One-line outcome.
    pub message: String,
    /// Outcome class.
    pub severity: Severity,
    /// Example subjects or parse errors backing the message.
    pub details: Vec<String>,
}

impl TestResult {
    fn new(validator: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            validator: validator.into(),
            message: message.into(),
            severity,
            details: Vec::new(),
        }
    }

    /// A passing check.
    pub fn pass(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(validator, message, Severity::Pass)
    }

    /// A non-blocking deviation.
    pub fn warn(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(validator, message, Severity::Warning)
    }

    /// A blocking failure.
    pub fn fail(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(validator, message, Severity::Failure)
    }

    /// Attaches detail lines.
    #[must_use]
    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = details;
        self
    }

    /// Returns true for failures.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }

    /// Returns true if this result is a warning.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.validator, self.message)?;
        for detail in &self.details {
            write!(f, "\n       {detail}")?;
        }
        Ok(())
    }
}

/// Aggregated results from all validators.
#[derive(Debug, Default)]
pub struct ConformanceReport {
    /// Every individual result, in validator order.
    pub results: Vec<TestResult>,
}

impl ConformanceReport {
    /// An empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result.
    pub fn push(&mut self, result: TestResult) {
        self.results.push(result);
    }

    /// Moves every result of `other` into this report.
    pub fn extend(&mut self, other: ConformanceReport) {
        self.results.extend(other.results);
    }

    /// Number of failed checks.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_failure()).count()
    }

    /// Number of warnings.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_warning()).count()
    }

    /// Returns true if no check failed. Warnings do not count.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warnings_do_not_fail_the_report() {
        let mut report = ConformanceReport::new();
        report.push(TestResult::pass("a", "ok"));
        report.push(TestResult::warn("b", "odd"));
        assert!(report.all_passed());
        assert_eq!(report.warning_count(), 1);

        report.push(TestResult::fail("c", "broken"));
        assert!(!report.all_passed());
        assert_eq!(report.failure_count(), 1);
    }

    #[test]
    fn display_lists_details() {
        let result = TestResult::warn("data/cardinality", "2 violations")
            .with_details(vec!["mySemantics:A".into(), "mySemantics:B".into()]);
        let text = result.to_string();
        assert!(text.starts_with("[WARN] data/cardinality: 2 violations"));
        assert!(text.contains("\n       mySemantics:B"));
    }
}
