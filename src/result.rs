//! Result and error types for the acceptance suite.

use thiserror::Error;

/// Result type for suite operations
pub type SuiteResult<T> = Result<T, SuiteError>;

/// Errors that can occur while driving the browser session
#[derive(Debug, Error)]
pub enum SuiteError {
    /// Browser launch error
    #[error("Failed to launch browser: {message}")]
    BrowserLaunch {
        /// Error message
        message: String,
    },

    /// Navigation error
    #[error("Navigation to {url} failed: {message}")]
    Navigation {
        /// URL that failed
        url: String,
        /// Error message
        message: String,
    },

    /// JavaScript evaluation error
    #[error("Script evaluation failed: {message}")]
    Evaluation {
        /// Error message
        message: String,
    },

    /// No element matched the selector within the implicit wait
    #[error("No element matching {selector} within {ms}ms")]
    ElementNotFound {
        /// Selector that matched nothing
        selector: String,
        /// Implicit wait in milliseconds
        ms: u64,
    },

    /// No JavaScript dialog is open
    #[error("No alert present")]
    NoAlertPresent,

    /// Dialog handling error
    #[error("Dialog handling failed: {message}")]
    Dialog {
        /// Error message
        message: String,
    },

    /// Assertion failed
    #[error("Assertion failed: {message}")]
    Assertion {
        /// Error message
        message: String,
    },

    /// Missing or invalid configuration
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Driver-level fault
    #[error("Driver error: {message}")]
    Driver {
        /// Error message
        message: String,
    },
}
