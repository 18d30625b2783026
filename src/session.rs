//! The long-lived browser session shared by every check.
//!
//! `Session` layers the suite's waiting and assertion policy over a
//! `Driver`: every element lookup polls with a bounded implicit wait, and
//! every expectation compares against the literal expected string. The
//! probe helpers (`is_element_present`, `is_alert_present`) report absence
//! as `Ok(false)` instead of an error.

use std::time::Instant;

use tracing::debug;

use crate::config::SuiteConfig;
use crate::driver::Driver;
use crate::result::{SuiteError, SuiteResult};
use crate::selector::Selector;

/// One browser session, held for the lifetime of the whole suite
pub struct Session<D: Driver> {
    driver: D,
    config: SuiteConfig,
    accept_next_alert: bool,
}

impl<D: Driver> Session<D> {
    /// Wrap a driver with the suite's session policy
    pub fn new(driver: D, config: SuiteConfig) -> Self {
        Self {
            driver,
            config,
            accept_next_alert: true,
        }
    }

    /// The session configuration
    #[must_use]
    pub const fn config(&self) -> &SuiteConfig {
        &self.config
    }

    /// The underlying driver
    #[must_use]
    pub const fn driver(&self) -> &D {
        &self.driver
    }

    /// Whether the next alert will be accepted rather than dismissed
    #[must_use]
    pub const fn accepts_next_alert(&self) -> bool {
        self.accept_next_alert
    }

    /// Choose whether the next alert is accepted or dismissed
    pub fn set_accept_next_alert(&mut self, accept: bool) {
        self.accept_next_alert = accept;
    }

    /// Navigate to a path on the instance under test
    pub async fn goto(&mut self, path: &str) -> SuiteResult<()> {
        let url = self.config.url(path);
        self.driver.navigate(&url).await
    }

    /// Wait until an element matching the selector exists.
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` when the implicit wait elapses first.
    pub async fn wait_present(&mut self, selector: &Selector) -> SuiteResult<()> {
        let deadline = Instant::now() + self.config.implicit_wait();
        loop {
            if self.driver.is_present(selector).await? {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(SuiteError::ElementNotFound {
                    selector: selector.to_string(),
                    ms: self.config.implicit_wait_ms,
                });
            }
            tokio::time::sleep(self.config.poll_interval()).await;
        }
    }

    /// Wait until a matching element exists and is rendered.
    ///
    /// Replaces fixed sleeps around client-side transitions with a bounded
    /// poll on the element actually being visible.
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` when the implicit wait elapses first.
    pub async fn wait_visible(&mut self, selector: &Selector) -> SuiteResult<()> {
        let deadline = Instant::now() + self.config.implicit_wait();
        loop {
            if self.driver.is_visible(selector).await? {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(SuiteError::ElementNotFound {
                    selector: selector.to_string(),
                    ms: self.config.implicit_wait_ms,
                });
            }
            tokio::time::sleep(self.config.poll_interval()).await;
        }
    }

    /// Click the element matching the selector
    pub async fn click(&mut self, selector: &Selector) -> SuiteResult<()> {
        self.wait_present(selector).await?;
        if self.driver.click(selector).await? {
            Ok(())
        } else {
            Err(SuiteError::ElementNotFound {
                selector: selector.to_string(),
                ms: self.config.implicit_wait_ms,
            })
        }
    }

    /// Clear the matching element and type text into it
    pub async fn fill(&mut self, selector: &Selector, text: &str) -> SuiteResult<()> {
        self.wait_present(selector).await?;
        if self.driver.fill(selector, text).await? {
            Ok(())
        } else {
            Err(SuiteError::ElementNotFound {
                selector: selector.to_string(),
                ms: self.config.implicit_wait_ms,
            })
        }
    }

    /// Rendered text of the matching element
    pub async fn text_of(&mut self, selector: &Selector) -> SuiteResult<String> {
        self.wait_present(selector).await?;
        self.driver
            .text(selector)
            .await?
            .ok_or_else(|| SuiteError::ElementNotFound {
                selector: selector.to_string(),
                ms: self.config.implicit_wait_ms,
            })
    }

    /// Attribute value of the matching element
    pub async fn attribute_of(&mut self, selector: &Selector, name: &str) -> SuiteResult<String> {
        self.wait_present(selector).await?;
        self.driver
            .attribute(selector, name)
            .await?
            .ok_or_else(|| SuiteError::ElementNotFound {
                selector: selector.to_string(),
                ms: self.config.implicit_wait_ms,
            })
    }

    /// Current page title
    pub async fn title(&mut self) -> SuiteResult<String> {
        self.driver.title().await
    }

    /// Probe for an element without waiting; absence is false, not an error
    pub async fn is_element_present(&mut self, selector: &Selector) -> SuiteResult<bool> {
        self.driver.is_present(selector).await
    }

    /// Probe for an open alert; absence is false, not an error
    pub async fn is_alert_present(&mut self) -> SuiteResult<bool> {
        Ok(self.driver.pending_dialog().await?.is_some())
    }

    /// Close the open alert and return its message.
    ///
    /// The alert is accepted or dismissed according to the
    /// `accept_next_alert` flag, which resets to true no matter how this
    /// call ends.
    ///
    /// # Errors
    ///
    /// Returns `NoAlertPresent` when no alert is open.
    pub async fn close_alert_and_get_its_text(&mut self) -> SuiteResult<String> {
        let pending = self.driver.pending_dialog().await;
        let accept = self.accept_next_alert;
        self.accept_next_alert = true;

        let dialog = pending?.ok_or(SuiteError::NoAlertPresent)?;
        self.driver.resolve_dialog(accept).await?;
        Ok(dialog.message)
    }

    /// Assert the matching element's rendered text equals `expected` exactly
    pub async fn expect_text(&mut self, selector: &Selector, expected: &str) -> SuiteResult<()> {
        let actual = self.text_of(selector).await?;
        if actual == expected {
            debug!(%selector, %expected, "text matches");
            Ok(())
        } else {
            Err(SuiteError::Assertion {
                message: format!("{selector}: expected text {expected:?}, got {actual:?}"),
            })
        }
    }

    /// Assert the matching element's attribute equals `expected` exactly
    pub async fn expect_attribute(
        &mut self,
        selector: &Selector,
        name: &str,
        expected: &str,
    ) -> SuiteResult<()> {
        let actual = self.attribute_of(selector, name).await?;
        if actual == expected {
            Ok(())
        } else {
            Err(SuiteError::Assertion {
                message: format!(
                    "{selector}: expected attribute {name}={expected:?}, got {actual:?}"
                ),
            })
        }
    }

    /// Assert the page title equals `expected` exactly
    pub async fn expect_title(&mut self, expected: &str) -> SuiteResult<()> {
        let actual = self.title().await?;
        if actual == expected {
            Ok(())
        } else {
            Err(SuiteError::Assertion {
                message: format!("expected title {expected:?}, got {actual:?}"),
            })
        }
    }

    /// Close the browser session
    pub async fn close(&mut self) -> SuiteResult<()> {
        self.driver.close().await
    }
}
