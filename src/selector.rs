//! Element selectors and the JavaScript lookup expressions they compile to.
//!
//! The checks locate elements four ways: by element id, by CSS selector
//! path, by exact anchor text, and by XPath. Every interaction goes through
//! the same lookup expression, so a selector behaves identically whether it
//! is probed, read, clicked, or filled.

use std::fmt;

/// A locator for finding a DOM element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Element id (e.g. "db_path")
    Id(String),
    /// CSS selector (e.g. "button.ui.green.button")
    Css(String),
    /// Exact text of an anchor element (e.g. "New Repository")
    LinkText(String),
    /// XPath expression (e.g. "//div[4]")
    XPath(String),
}

impl Selector {
    /// Create an id selector
    #[must_use]
    pub fn id(value: impl Into<String>) -> Self {
        Self::Id(value.into())
    }

    /// Create a CSS selector
    #[must_use]
    pub fn css(value: impl Into<String>) -> Self {
        Self::Css(value.into())
    }

    /// Create a link-text selector
    #[must_use]
    pub fn link_text(value: impl Into<String>) -> Self {
        Self::LinkText(value.into())
    }

    /// Create an XPath selector
    #[must_use]
    pub fn xpath(value: impl Into<String>) -> Self {
        Self::XPath(value.into())
    }

    /// JavaScript expression evaluating to the matched element or null
    #[must_use]
    pub fn to_lookup(&self) -> String {
        match self {
            Self::Id(v) => format!("document.getElementById({v:?})"),
            Self::Css(v) => format!("document.querySelector({v:?})"),
            Self::LinkText(v) => format!(
                "(Array.from(document.getElementsByTagName('a')).find(el => el.textContent.trim() === {v:?}) || null)"
            ),
            Self::XPath(v) => format!(
                "document.evaluate({v:?}, document, null, XPathResult.FIRST_ORDERED_NODE_TYPE, null).singleNodeValue"
            ),
        }
    }

    /// Expression returning true when the element exists
    #[must_use]
    pub fn probe_js(&self) -> String {
        format!("!!({})", self.to_lookup())
    }

    /// Expression returning true when the element exists and is rendered
    #[must_use]
    pub fn visible_js(&self) -> String {
        format!(
            "(() => {{ const el = {}; return !!el && el.offsetParent !== null; }})()",
            self.to_lookup()
        )
    }

    /// Expression returning the element's rendered text, trimmed, or null
    #[must_use]
    pub fn text_js(&self) -> String {
        format!(
            "(() => {{ const el = {}; if (!el) return null; \
             const t = el.innerText !== undefined ? el.innerText : el.textContent; \
             return t === null ? null : String(t).trim(); }})()",
            self.to_lookup()
        )
    }

    /// Expression reading an attribute, falling back to the DOM property.
    ///
    /// A present element with neither attribute nor property yields the
    /// empty string, matching what the checks assert against.
    #[must_use]
    pub fn attribute_js(&self, name: &str) -> String {
        format!(
            "(() => {{ const el = {}; if (!el) return null; \
             const a = el.getAttribute({name:?}); if (a !== null) return a; \
             const p = el[{name:?}]; \
             return p === undefined || p === null ? '' : String(p); }})()",
            self.to_lookup()
        )
    }

    /// Expression clicking the element; false when it matched nothing
    #[must_use]
    pub fn click_js(&self) -> String {
        format!(
            "(() => {{ const el = {}; if (!el) return false; el.click(); return true; }})()",
            self.to_lookup()
        )
    }

    /// Expression clearing the element and typing `text` into it.
    ///
    /// Fires input and change events so client-side validation sees the
    /// value the same way it would from real keystrokes.
    #[must_use]
    pub fn fill_js(&self, text: &str) -> String {
        format!(
            "(() => {{ const el = {}; if (!el) return false; el.focus(); \
             el.value = {text:?}; \
             el.dispatchEvent(new Event('input', {{ bubbles: true }})); \
             el.dispatchEvent(new Event('change', {{ bubbles: true }})); \
             return true; }})()",
            self.to_lookup()
        )
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(v) => write!(f, "id={v}"),
            Self::Css(v) => write!(f, "css={v}"),
            Self::LinkText(v) => write!(f, "link={v}"),
            Self::XPath(v) => write!(f, "xpath={v}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod lookup_tests {
        use super::*;

        #[test]
        fn test_id_lookup() {
            let lookup = Selector::id("db_path").to_lookup();
            assert!(lookup.contains("getElementById"));
            assert!(lookup.contains("db_path"));
        }

        #[test]
        fn test_css_lookup() {
            let lookup = Selector::css("button.ui.green.button").to_lookup();
            assert!(lookup.contains("querySelector"));
            assert!(lookup.contains("button.ui.green.button"));
        }

        #[test]
        fn test_link_text_lookup() {
            let lookup = Selector::link_text("New Repository").to_lookup();
            assert!(lookup.contains("getElementsByTagName('a')"));
            assert!(lookup.contains("textContent.trim()"));
            assert!(lookup.contains("New Repository"));
        }

        #[test]
        fn test_xpath_lookup() {
            let lookup = Selector::xpath("//div[4]").to_lookup();
            assert!(lookup.contains("document.evaluate"));
            assert!(lookup.contains("FIRST_ORDERED_NODE_TYPE"));
            assert!(lookup.contains("singleNodeValue"));
        }

        #[test]
        fn test_lookup_escapes_quotes() {
            let lookup = Selector::xpath("//div[@id='sqlite_settings']/div").to_lookup();
            assert!(lookup.contains("sqlite_settings"));
            // Rust debug formatting produces a valid JS string literal
            assert!(lookup.contains("\"//div[@id='sqlite_settings']/div\""));
        }
    }

    mod expression_tests {
        use super::*;

        #[test]
        fn test_probe_is_boolean_coercion() {
            let probe = Selector::id("app_name").probe_js();
            assert!(probe.starts_with("!!("));
        }

        #[test]
        fn test_visible_checks_offset_parent() {
            let js = Selector::xpath("//div[4]").visible_js();
            assert!(js.contains("offsetParent"));
        }

        #[test]
        fn test_text_prefers_inner_text() {
            let js = Selector::css("h2").text_js();
            assert!(js.contains("innerText"));
            assert!(js.contains("textContent"));
            assert!(js.contains("trim()"));
        }

        #[test]
        fn test_attribute_falls_back_to_property() {
            let js = Selector::css("button.ui.green.button").attribute_js("value");
            assert!(js.contains("getAttribute(\"value\")"));
            assert!(js.contains("el[\"value\"]"));
            assert!(js.contains("''"));
        }

        #[test]
        fn test_click_returns_false_when_absent() {
            let js = Selector::link_text("Home").click_js();
            assert!(js.contains("if (!el) return false"));
            assert!(js.contains("el.click()"));
        }

        #[test]
        fn test_fill_dispatches_input_events() {
            let js = Selector::id("user_name").fill_js("testuser");
            assert!(js.contains("el.value = \"testuser\""));
            assert!(js.contains("new Event('input'"));
            assert!(js.contains("new Event('change'"));
        }
    }

    mod display_tests {
        use super::*;

        #[test]
        fn test_display_names_the_kind() {
            assert_eq!(Selector::id("email").to_string(), "id=email");
            assert_eq!(Selector::css("h2").to_string(), "css=h2");
            assert_eq!(Selector::link_text("FAQ").to_string(), "link=FAQ");
            assert_eq!(Selector::xpath("//div[4]").to_string(), "xpath=//div[4]");
        }
    }
}
