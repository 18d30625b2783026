//! Abstract browser driver trait.
//!
//! The suite talks to the browser at element granularity through `Driver`,
//! so the checks run unchanged against the real CDP session or against
//! `MockDriver` in unit tests.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::result::{SuiteError, SuiteResult};
use crate::selector::Selector;

/// A JavaScript dialog (alert, confirm, prompt) waiting to be handled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingDialog {
    /// Message displayed in the dialog
    pub message: String,
}

impl PendingDialog {
    /// Create a pending dialog
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Abstract driver for one browser session.
///
/// `CdpDriver` is the real implementation; `MockDriver` backs unit tests.
#[async_trait]
pub trait Driver: Send {
    /// Navigate to an absolute URL
    async fn navigate(&mut self, url: &str) -> SuiteResult<()>;

    /// Whether an element matching the selector exists
    async fn is_present(&mut self, selector: &Selector) -> SuiteResult<bool>;

    /// Whether a matching element exists and is rendered
    async fn is_visible(&mut self, selector: &Selector) -> SuiteResult<bool>;

    /// Click the matched element; false when nothing matched
    async fn click(&mut self, selector: &Selector) -> SuiteResult<bool>;

    /// Clear the matched element and type text; false when nothing matched
    async fn fill(&mut self, selector: &Selector, text: &str) -> SuiteResult<bool>;

    /// Rendered text of the matched element, None when nothing matched
    async fn text(&mut self, selector: &Selector) -> SuiteResult<Option<String>>;

    /// Attribute value of the matched element, None when nothing matched
    async fn attribute(&mut self, selector: &Selector, name: &str)
        -> SuiteResult<Option<String>>;

    /// Current page title
    async fn title(&mut self) -> SuiteResult<String>;

    /// The currently open dialog, if any, without handling it
    async fn pending_dialog(&mut self) -> SuiteResult<Option<PendingDialog>>;

    /// Accept or dismiss the currently open dialog
    ///
    /// # Errors
    ///
    /// Returns `NoAlertPresent` when no dialog is open.
    async fn resolve_dialog(&mut self, accept: bool) -> SuiteResult<()>;

    /// Close the browser session
    async fn close(&mut self) -> SuiteResult<()>;
}

/// An element in the mock DOM
#[derive(Debug, Clone, Default)]
pub struct MockElement {
    /// Rendered text
    pub text: String,
    /// Whether the element is rendered
    pub visible: bool,
    /// Attribute values
    pub attributes: HashMap<String, String>,
}

impl MockElement {
    /// Create a visible element with no text
    #[must_use]
    pub fn new() -> Self {
        Self {
            text: String::new(),
            visible: true,
            attributes: HashMap::new(),
        }
    }

    /// Set the rendered text
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set an attribute value
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Mark the element present but not rendered
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// Mock driver for unit testing
#[derive(Debug, Default)]
pub struct MockDriver {
    /// Mock DOM, keyed by the selector's display form
    pub elements: HashMap<String, MockElement>,
    /// Current URL
    pub current_url: String,
    /// Page title
    pub page_title: String,
    /// Dialog waiting to be handled
    pub dialog: Option<PendingDialog>,
    /// Calls made against this driver, in order
    pub call_history: Vec<String>,
    /// Accept/dismiss decisions passed to `resolve_dialog`
    pub resolved_dialogs: Vec<bool>,
}

impl MockDriver {
    /// Create an empty mock driver
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element to the mock DOM
    pub fn insert(&mut self, selector: &Selector, element: MockElement) {
        self.elements.insert(selector.to_string(), element);
    }

    /// Set the page title
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.page_title = title.into();
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, message: impl Into<String>) {
        self.dialog = Some(PendingDialog::new(message));
    }

    /// Get call history
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.call_history
    }

    /// Check if a call with the given prefix was made
    #[must_use]
    pub fn was_called(&self, prefix: &str) -> bool {
        self.call_history.iter().any(|c| c.starts_with(prefix))
    }

    fn element(&self, selector: &Selector) -> Option<&MockElement> {
        self.elements.get(&selector.to_string())
    }
}

#[async_trait]
impl Driver for MockDriver {
    async fn navigate(&mut self, url: &str) -> SuiteResult<()> {
        self.call_history.push(format!("navigate:{url}"));
        self.current_url = url.to_string();
        Ok(())
    }

    async fn is_present(&mut self, selector: &Selector) -> SuiteResult<bool> {
        self.call_history.push(format!("is_present:{selector}"));
        Ok(self.element(selector).is_some())
    }

    async fn is_visible(&mut self, selector: &Selector) -> SuiteResult<bool> {
        self.call_history.push(format!("is_visible:{selector}"));
        Ok(self.element(selector).is_some_and(|el| el.visible))
    }

    async fn click(&mut self, selector: &Selector) -> SuiteResult<bool> {
        self.call_history.push(format!("click:{selector}"));
        Ok(self.element(selector).is_some())
    }

    async fn fill(&mut self, selector: &Selector, text: &str) -> SuiteResult<bool> {
        self.call_history.push(format!("fill:{selector}={text}"));
        Ok(self.element(selector).is_some())
    }

    async fn text(&mut self, selector: &Selector) -> SuiteResult<Option<String>> {
        self.call_history.push(format!("text:{selector}"));
        Ok(self.element(selector).map(|el| el.text.clone()))
    }

    async fn attribute(
        &mut self,
        selector: &Selector,
        name: &str,
    ) -> SuiteResult<Option<String>> {
        self.call_history.push(format!("attribute:{selector}:{name}"));
        Ok(self
            .element(selector)
            .map(|el| el.attributes.get(name).cloned().unwrap_or_default()))
    }

    async fn title(&mut self) -> SuiteResult<String> {
        self.call_history.push("title".to_string());
        Ok(self.page_title.clone())
    }

    async fn pending_dialog(&mut self) -> SuiteResult<Option<PendingDialog>> {
        Ok(self.dialog.clone())
    }

    async fn resolve_dialog(&mut self, accept: bool) -> SuiteResult<()> {
        if self.dialog.take().is_none() {
            return Err(SuiteError::NoAlertPresent);
        }
        self.resolved_dialogs.push(accept);
        Ok(())
    }

    async fn close(&mut self) -> SuiteResult<()> {
        self.call_history.push("close".to_string());
        Ok(())
    }
}
