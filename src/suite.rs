//! The ordered check pipeline.
//!
//! Execution order is data here, not an accident of naming: each check
//! depends on state the previous one left behind, so the suite always runs
//! the full sequence in order. A failed check is recorded and the run
//! continues; later checks may then start from an inconsistent state,
//! which is accepted as-is.

use std::time::Instant;

use futures::future::BoxFuture;
use tracing::{info, warn};

use crate::checks;
use crate::driver::Driver;
use crate::report::{CheckOutcome, SuiteReport};
use crate::result::SuiteResult;
use crate::session::Session;

/// A check step: a name plus the async operation it performs
type CheckFn<D> = for<'a> fn(&'a mut Session<D>) -> BoxFuture<'a, SuiteResult<()>>;

/// One ordered unit of browser interaction plus assertions
pub struct Check<D: Driver> {
    name: &'static str,
    run: CheckFn<D>,
}

impl<D: Driver> Check<D> {
    /// Create a check
    #[must_use]
    pub fn new(name: &'static str, run: CheckFn<D>) -> Self {
        Self { name, run }
    }

    /// Check name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

/// The five checks in the order they must run
#[must_use]
pub fn ordered_checks<D: Driver>() -> Vec<Check<D>> {
    vec![
        Check::new("install", |s| Box::pin(checks::install(s))),
        Check::new("landing", |s| Box::pin(checks::landing(s))),
        Check::new("register", |s| Box::pin(checks::register(s))),
        Check::new("login", |s| Box::pin(checks::login_check(s))),
        Check::new("create_repo", |s| Box::pin(checks::create_repo(s))),
    ]
}

/// An ordered run of checks against one session
pub struct Suite<D: Driver> {
    checks: Vec<Check<D>>,
}

impl<D: Driver> Default for Suite<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Driver> Suite<D> {
    /// The standard five-check suite
    #[must_use]
    pub fn new() -> Self {
        Self {
            checks: ordered_checks(),
        }
    }

    /// A suite over an explicit check sequence
    #[must_use]
    pub fn with_checks(checks: Vec<Check<D>>) -> Self {
        Self { checks }
    }

    /// Number of checks in the pipeline
    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Whether the pipeline is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Check names in execution order
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.checks.iter().map(Check::name).collect()
    }

    /// Run every check in order against the session.
    ///
    /// Failures are recorded per check; the run never stops early.
    pub async fn run(&self, session: &mut Session<D>) -> SuiteReport {
        let mut outcomes = Vec::with_capacity(self.checks.len());

        for check in &self.checks {
            info!(check = check.name, "running");
            let started = Instant::now();
            let result = (check.run)(session).await;
            let duration = started.elapsed();

            match result {
                Ok(()) => {
                    info!(check = check.name, ?duration, "passed");
                    outcomes.push(CheckOutcome::passed(check.name, duration));
                }
                Err(e) => {
                    warn!(check = check.name, error = %e, "failed");
                    outcomes.push(CheckOutcome::failed(check.name, duration, e.to_string()));
                }
            }
        }

        SuiteReport::new(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SuiteConfig;
    use crate::driver::MockDriver;
    use crate::result::SuiteError;
    use crate::selector::Selector;

    fn session() -> Session<MockDriver> {
        let config = SuiteConfig::new("http://gin.test")
            .with_implicit_wait(20)
            .with_poll_interval(5);
        Session::new(MockDriver::new(), config)
    }

    mod pipeline_tests {
        use super::*;

        #[test]
        fn test_standard_suite_order() {
            let suite: Suite<MockDriver> = Suite::new();
            assert_eq!(
                suite.names(),
                vec!["install", "landing", "register", "login", "create_repo"]
            );
        }

        #[test]
        fn test_standard_suite_has_five_checks() {
            let suite: Suite<MockDriver> = Suite::new();
            assert_eq!(suite.len(), 5);
            assert!(!suite.is_empty());
        }
    }

    mod run_tests {
        use super::*;

        async fn failing_step(s: &mut Session<MockDriver>) -> crate::result::SuiteResult<()> {
            // Nothing matches in an empty mock DOM
            s.click(&Selector::id("missing")).await
        }

        async fn passing_step(s: &mut Session<MockDriver>) -> crate::result::SuiteResult<()> {
            s.goto("/after-failure").await
        }

        #[tokio::test]
        async fn test_suite_continues_after_a_failed_check() {
            let suite = Suite::with_checks(vec![
                Check::new("first", |s| Box::pin(failing_step(s))),
                Check::new("second", |s| Box::pin(passing_step(s))),
            ]);
            let mut session = session();

            let report = suite.run(&mut session).await;

            assert_eq!(report.total(), 2);
            assert_eq!(report.passed(), 1);
            assert_eq!(report.failed(), 1);
            assert!(!report.is_success());
            // Order preserved: the failing check comes first in the report
            assert_eq!(report.outcomes()[0].name, "first");
            assert!(!report.outcomes()[0].is_passed());
            assert_eq!(report.outcomes()[1].name, "second");
            assert!(report.outcomes()[1].is_passed());
            // And the second check actually ran against the session
            assert!(session
                .driver()
                .was_called("navigate:http://gin.test/after-failure"));
        }

        #[tokio::test]
        async fn test_failure_message_carries_the_error() {
            let suite = Suite::with_checks(vec![Check::new("only", |s| {
                Box::pin(failing_step(s))
            })]);
            let mut session = session();

            let report = suite.run(&mut session).await;
            let expected = SuiteError::ElementNotFound {
                selector: "id=missing".to_string(),
                ms: 20,
            };
            assert_eq!(
                report.outcomes()[0].failure.as_deref(),
                Some(expected.to_string().as_str())
            );
        }

        #[tokio::test]
        async fn test_empty_suite_reports_success() {
            let suite: Suite<MockDriver> = Suite::with_checks(Vec::new());
            let mut session = session();
            let report = suite.run(&mut session).await;
            assert!(report.is_success());
            assert_eq!(report.total(), 0);
        }
    }
}
