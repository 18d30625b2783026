//! Real browser session over the Chrome DevTools Protocol.
//!
//! One Chromium instance, one page, held for the lifetime of the whole
//! suite. JavaScript dialogs are captured from the CDP event stream and
//! surfaced through `pending_dialog`/`resolve_dialog`.

use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::page::{
    EventJavascriptDialogOpening, HandleJavaScriptDialogParams,
};
use chromiumoxide::page::Page;
use futures::{FutureExt, Stream, StreamExt};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::config::SuiteConfig;
use crate::driver::{Driver, PendingDialog};
use crate::result::{SuiteError, SuiteResult};
use crate::selector::Selector;

type DialogStream = Pin<Box<dyn Stream<Item = Arc<EventJavascriptDialogOpening>> + Send + Sync>>;

/// Browser session with a real CDP connection
pub struct CdpDriver {
    browser: Browser,
    page: Page,
    #[allow(dead_code)]
    handler: JoinHandle<()>,
    dialogs: DialogStream,
    pending: Option<PendingDialog>,
}

impl CdpDriver {
    /// Launch Chromium and open the page the suite will drive.
    ///
    /// # Errors
    ///
    /// Returns `BrowserLaunch` if Chromium cannot be started.
    pub async fn launch(config: &SuiteConfig) -> SuiteResult<Self> {
        let mut builder = BrowserConfig::builder().window_size(1280, 1024);

        if !config.headless {
            builder = builder.with_head();
        }

        if !config.sandbox {
            builder = builder.no_sandbox();
        }

        if let Some(ref path) = config.chromium_path {
            builder = builder.chrome_executable(path);
        }

        let cdp_config = builder
            .build()
            .map_err(|message| SuiteError::BrowserLaunch { message })?;

        let (browser, mut handler) =
            Browser::launch(cdp_config)
                .await
                .map_err(|e| SuiteError::BrowserLaunch {
                    message: e.to_string(),
                })?;

        // Drive the CDP connection until the browser goes away
        let handle = tokio::spawn(async move {
            while let Some(h) = handler.next().await {
                if h.is_err() {
                    break;
                }
            }
        });

        let page =
            browser
                .new_page("about:blank")
                .await
                .map_err(|e| SuiteError::BrowserLaunch {
                    message: e.to_string(),
                })?;

        let dialogs = page
            .event_listener::<EventJavascriptDialogOpening>()
            .await
            .map_err(|e| SuiteError::Dialog {
                message: e.to_string(),
            })?;

        Ok(Self {
            browser,
            page,
            handler: handle,
            dialogs: Box::pin(dialogs),
            pending: None,
        })
    }

    async fn eval(&self, script: &str) -> SuiteResult<serde_json::Value> {
        let result = self
            .page
            .evaluate(script)
            .await
            .map_err(|e| SuiteError::Evaluation {
                message: e.to_string(),
            })?;
        Ok(result.value().cloned().unwrap_or(serde_json::Value::Null))
    }

    async fn eval_bool(&self, script: &str) -> SuiteResult<bool> {
        Ok(self.eval(script).await?.as_bool().unwrap_or(false))
    }

    // Drain dialog events that arrived since the last call
    fn pump_dialogs(&mut self) {
        while let Some(Some(event)) = self.dialogs.next().now_or_never() {
            debug!(message = %event.message, "javascript dialog opened");
            self.pending = Some(PendingDialog::new(event.message.clone()));
        }
    }
}

#[async_trait]
impl Driver for CdpDriver {
    async fn navigate(&mut self, url: &str) -> SuiteResult<()> {
        debug!(%url, "navigate");
        self.page
            .goto(url)
            .await
            .map_err(|e| SuiteError::Navigation {
                url: url.to_string(),
                message: e.to_string(),
            })?;
        self.page
            .wait_for_navigation()
            .await
            .map_err(|e| SuiteError::Navigation {
                url: url.to_string(),
                message: e.to_string(),
            })?;
        Ok(())
    }

    async fn is_present(&mut self, selector: &Selector) -> SuiteResult<bool> {
        self.eval_bool(&selector.probe_js()).await
    }

    async fn is_visible(&mut self, selector: &Selector) -> SuiteResult<bool> {
        self.eval_bool(&selector.visible_js()).await
    }

    async fn click(&mut self, selector: &Selector) -> SuiteResult<bool> {
        debug!(%selector, "click");
        self.eval_bool(&selector.click_js()).await
    }

    async fn fill(&mut self, selector: &Selector, text: &str) -> SuiteResult<bool> {
        debug!(%selector, %text, "fill");
        self.eval_bool(&selector.fill_js(text)).await
    }

    async fn text(&mut self, selector: &Selector) -> SuiteResult<Option<String>> {
        match self.eval(&selector.text_js()).await? {
            serde_json::Value::String(s) => Ok(Some(s)),
            _ => Ok(None),
        }
    }

    async fn attribute(
        &mut self,
        selector: &Selector,
        name: &str,
    ) -> SuiteResult<Option<String>> {
        match self.eval(&selector.attribute_js(name)).await? {
            serde_json::Value::String(s) => Ok(Some(s)),
            _ => Ok(None),
        }
    }

    async fn title(&mut self) -> SuiteResult<String> {
        match self.eval("document.title").await? {
            serde_json::Value::String(s) => Ok(s),
            _ => Ok(String::new()),
        }
    }

    async fn pending_dialog(&mut self) -> SuiteResult<Option<PendingDialog>> {
        self.pump_dialogs();
        Ok(self.pending.clone())
    }

    async fn resolve_dialog(&mut self, accept: bool) -> SuiteResult<()> {
        self.pump_dialogs();
        if self.pending.is_none() {
            return Err(SuiteError::NoAlertPresent);
        }

        let params = HandleJavaScriptDialogParams::builder()
            .accept(accept)
            .build()
            .map_err(|message| SuiteError::Dialog { message })?;

        self.page
            .execute(params)
            .await
            .map_err(|e| SuiteError::Dialog {
                message: e.to_string(),
            })?;

        self.pending = None;
        Ok(())
    }

    async fn close(&mut self) -> SuiteResult<()> {
        self.browser
            .close()
            .await
            .map_err(|e| SuiteError::Driver {
                message: e.to_string(),
            })?;
        Ok(())
    }
}
