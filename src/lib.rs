//! Acceptance checks for a freshly provisioned GIN instance.
//!
//! Drives one headless Chromium session (via the Chrome DevTools Protocol)
//! through the instance's install, landing, registration, login and
//! repository-creation flows, asserting on literal rendered text at every
//! step. The five checks run as an explicit ordered pipeline because each
//! depends on state the previous one created.
//!
//! # Usage
//!
//! ```bash
//! GINURL=http://localhost:3000 gin-e2e
//! ```
//!
//! The exit status reflects aggregate pass/fail. The browser is left
//! connected after the run for manual inspection unless `--close-browser`
//! is passed.

pub mod cdp;
pub mod checks;
pub mod config;
pub mod driver;
pub mod fixtures;
pub mod report;
pub mod result;
pub mod selector;
pub mod session;
pub mod suite;

pub use cdp::CdpDriver;
pub use config::SuiteConfig;
pub use driver::{Driver, MockDriver, MockElement, PendingDialog};
pub use report::{CheckOutcome, SuiteReport};
pub use result::{SuiteError, SuiteResult};
pub use selector::Selector;
pub use session::Session;
pub use suite::{ordered_checks, Check, Suite};
