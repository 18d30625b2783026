//! Suite configuration.

use std::time::Duration;

use crate::result::{SuiteError, SuiteResult};

/// Environment variable naming the target instance's base URL
pub const GIN_URL_ENV: &str = "GINURL";

/// Default implicit wait for element lookups (3 seconds)
pub const DEFAULT_IMPLICIT_WAIT_MS: u64 = 3_000;

/// Default polling interval while waiting (50ms)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 50;

/// Configuration for the suite and its browser session
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    /// Base URL of the instance under test, without trailing slash
    pub base_url: String,
    /// Run the browser headless
    pub headless: bool,
    /// Path to the Chromium binary (None = auto-detect)
    pub chromium_path: Option<String>,
    /// Chromium sandbox (disable for containers)
    pub sandbox: bool,
    /// Implicit wait applied to every element lookup
    pub implicit_wait_ms: u64,
    /// Polling interval while waiting for a condition
    pub poll_interval_ms: u64,
    /// Leave the browser connected after the suite finishes
    pub keep_browser_open: bool,
}

impl SuiteConfig {
    /// Create a configuration for the given base URL
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            headless: true,
            chromium_path: None,
            sandbox: true,
            implicit_wait_ms: DEFAULT_IMPLICIT_WAIT_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            keep_browser_open: true,
        }
    }

    /// Read the base URL from `GINURL`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the variable is unset.
    pub fn from_env() -> SuiteResult<Self> {
        let base_url = std::env::var(GIN_URL_ENV).map_err(|_| SuiteError::Config {
            message: format!("{GIN_URL_ENV} must name the target instance base URL"),
        })?;
        Ok(Self::new(base_url))
    }

    /// Set headless mode
    #[must_use]
    pub const fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Set the Chromium binary path
    #[must_use]
    pub fn with_chromium_path(mut self, path: impl Into<String>) -> Self {
        self.chromium_path = Some(path.into());
        self
    }

    /// Disable the Chromium sandbox (containers/CI)
    #[must_use]
    pub const fn with_no_sandbox(mut self) -> Self {
        self.sandbox = false;
        self
    }

    /// Set the implicit wait in milliseconds
    #[must_use]
    pub const fn with_implicit_wait(mut self, ms: u64) -> Self {
        self.implicit_wait_ms = ms;
        self
    }

    /// Set the polling interval in milliseconds
    #[must_use]
    pub const fn with_poll_interval(mut self, ms: u64) -> Self {
        self.poll_interval_ms = ms;
        self
    }

    /// Control whether the browser stays connected after the suite
    #[must_use]
    pub const fn with_keep_browser_open(mut self, keep: bool) -> Self {
        self.keep_browser_open = keep;
        self
    }

    /// Implicit wait as a Duration
    #[must_use]
    pub const fn implicit_wait(&self) -> Duration {
        Duration::from_millis(self.implicit_wait_ms)
    }

    /// Polling interval as a Duration
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Absolute URL for a path on the instance under test
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
