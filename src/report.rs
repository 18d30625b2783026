//! Per-check outcomes and the aggregate suite report.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

/// Outcome of one check
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    /// Check name
    pub name: String,
    /// Wall-clock duration of the check
    pub duration: Duration,
    /// Failure message, None when the check passed
    pub failure: Option<String>,
}

impl CheckOutcome {
    /// Record a passed check
    #[must_use]
    pub fn passed(name: impl Into<String>, duration: Duration) -> Self {
        Self {
            name: name.into(),
            duration,
            failure: None,
        }
    }

    /// Record a failed check
    #[must_use]
    pub fn failed(name: impl Into<String>, duration: Duration, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            duration,
            failure: Some(message.into()),
        }
    }

    /// Whether the check passed
    #[must_use]
    pub const fn is_passed(&self) -> bool {
        self.failure.is_none()
    }
}

/// Aggregate result of a full suite run
#[derive(Debug, Clone, Default, Serialize)]
pub struct SuiteReport {
    outcomes: Vec<CheckOutcome>,
}

impl SuiteReport {
    /// Build a report from outcomes in execution order
    #[must_use]
    pub fn new(outcomes: Vec<CheckOutcome>) -> Self {
        Self { outcomes }
    }

    /// Outcomes in execution order
    #[must_use]
    pub fn outcomes(&self) -> &[CheckOutcome] {
        &self.outcomes
    }

    /// Number of checks run
    #[must_use]
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of passed checks
    #[must_use]
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_passed()).count()
    }

    /// Number of failed checks
    #[must_use]
    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    /// Whether every check passed
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            match &outcome.failure {
                None => writeln!(
                    f,
                    "{} ... ok ({:.1}s)",
                    outcome.name,
                    outcome.duration.as_secs_f64()
                )?,
                Some(message) => writeln!(
                    f,
                    "{} ... FAILED ({:.1}s): {message}",
                    outcome.name,
                    outcome.duration.as_secs_f64()
                )?,
            }
        }
        write!(f, "{} passed, {} failed", self.passed(), self.failed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod outcome_tests {
        use super::*;

        #[test]
        fn test_passed_outcome() {
            let outcome = CheckOutcome::passed("install", Duration::from_secs(1));
            assert!(outcome.is_passed());
            assert!(outcome.failure.is_none());
        }

        #[test]
        fn test_failed_outcome() {
            let outcome =
                CheckOutcome::failed("register", Duration::from_secs(2), "header mismatch");
            assert!(!outcome.is_passed());
            assert_eq!(outcome.failure.as_deref(), Some("header mismatch"));
        }
    }

    mod report_tests {
        use super::*;

        fn mixed_report() -> SuiteReport {
            SuiteReport::new(vec![
                CheckOutcome::passed("install", Duration::from_millis(1200)),
                CheckOutcome::failed("landing", Duration::from_millis(300), "no h2"),
                CheckOutcome::passed("register", Duration::from_millis(800)),
            ])
        }

        #[test]
        fn test_counts() {
            let report = mixed_report();
            assert_eq!(report.total(), 3);
            assert_eq!(report.passed(), 2);
            assert_eq!(report.failed(), 1);
            assert!(!report.is_success());
        }

        #[test]
        fn test_all_passed_is_success() {
            let report =
                SuiteReport::new(vec![CheckOutcome::passed("install", Duration::ZERO)]);
            assert!(report.is_success());
        }

        #[test]
        fn test_empty_report_is_success() {
            assert!(SuiteReport::default().is_success());
        }

        #[test]
        fn test_display_summary() {
            let rendered = mixed_report().to_string();
            assert!(rendered.contains("install ... ok"));
            assert!(rendered.contains("landing ... FAILED"));
            assert!(rendered.contains("no h2"));
            assert!(rendered.ends_with("2 passed, 1 failed"));
        }
    }
}
