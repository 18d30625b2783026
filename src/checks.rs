//! The five acceptance checks, plus the login/logout helpers.
//!
//! Each check leaves state behind that the next one depends on: install
//! produces a configured instance, register a user, login a session,
//! create_repo a repository. The ordering lives in
//! [`crate::suite::ordered_checks`], not in the names.

use crate::driver::Driver;
use crate::fixtures;
use crate::result::SuiteResult;
use crate::selector::Selector;
use crate::session::Session;

fn attached_header() -> Selector {
    Selector::css("h3.ui.top.attached.header")
}

fn green_button() -> Selector {
    Selector::css("button.ui.green.button")
}

/// Run the installer: SQLite backend, app name and URL, then submit.
///
/// Ends on the sign-in page.
pub async fn install<D: Driver>(s: &mut Session<D>) -> SuiteResult<()> {
    s.goto("/install").await?;

    s.click(&Selector::css("div.ui.selection.database.type.dropdown"))
        .await?;
    // The dropdown animates open; poll until the SQLite entry is rendered
    let sqlite_option = Selector::xpath("//div[4]");
    s.wait_visible(&sqlite_option).await?;
    s.click(&sqlite_option).await?;

    s.fill(&Selector::id("db_path"), fixtures::DB_PATH).await?;
    s.click(&Selector::xpath("//div[@id='sqlite_settings']/div"))
        .await?;

    s.fill(&Selector::id("app_name"), fixtures::APP_NAME).await?;
    let app_url = s.config().base_url.clone();
    s.fill(&Selector::id("app_url"), &app_url).await?;

    s.click(&Selector::css("button.ui.primary.button")).await?;
    s.expect_text(&attached_header(), fixtures::SIGN_IN).await
}

/// Verify the landing page: headline, subtitle, navigation links, title
pub async fn landing<D: Driver>(s: &mut Session<D>) -> SuiteResult<()> {
    s.goto("").await?;
    s.click(&Selector::link_text("Home")).await?;

    s.expect_text(&Selector::css("h2"), fixtures::LANDING_HEADLINE)
        .await?;
    s.expect_text(&Selector::css("div.ginsubtitle"), fixtures::LANDING_SUBTITLE)
        .await?;
    s.expect_text(&Selector::link_text("FAQ"), "FAQ").await?;
    s.expect_text(&Selector::link_text("Register"), "Register")
        .await?;
    s.expect_text(&Selector::link_text("Sign In"), fixtures::SIGN_IN)
        .await?;
    s.expect_title(fixtures::APP_NAME).await
}

/// Register the test user and land back on the sign-in page
pub async fn register<D: Driver>(s: &mut Session<D>) -> SuiteResult<()> {
    s.goto("").await?;
    s.click(&Selector::link_text("Register")).await?;

    s.expect_text(&attached_header(), fixtures::SIGN_UP).await?;
    s.expect_text(
        &Selector::css("div.ui.piled.yellow.segment"),
        fixtures::REGISTER_NOTICE,
    )
    .await?;
    s.expect_attribute(&green_button(), "value", "").await?;

    s.fill(&Selector::id("user_name"), fixtures::USER_NAME).await?;
    s.fill(&Selector::id("email"), fixtures::EMAIL).await?;
    s.fill(&Selector::id("password"), fixtures::PASSWORD).await?;
    s.fill(&Selector::id("retype"), fixtures::PASSWORD).await?;
    s.fill(&Selector::id("full_name"), fixtures::FULL_NAME).await?;
    s.fill(&Selector::id("affiliation"), fixtures::AFFILIATION)
        .await?;
    s.click(&green_button()).await?;

    s.expect_text(&attached_header(), fixtures::SIGN_IN).await
}

/// Log in as the registered user and verify the dashboard title
pub async fn login_check<D: Driver>(s: &mut Session<D>) -> SuiteResult<()> {
    login(s).await?;
    s.expect_title(fixtures::DASHBOARD_TITLE).await
}

/// Create the first repository and verify its generated files
pub async fn create_repo<D: Driver>(s: &mut Session<D>) -> SuiteResult<()> {
    s.goto("").await?;

    s.click(&Selector::css("i.octicon.octicon-triangle-down"))
        .await?;
    let new_repo = Selector::link_text("New Repository");
    s.expect_text(&new_repo, "New Repository").await?;
    s.click(&new_repo).await?;
    s.expect_title(fixtures::NEW_REPO_TITLE).await?;

    s.fill(&Selector::id("repo_name"), fixtures::REPO_NAME).await?;
    s.fill(&Selector::id("description"), fixtures::REPO_DESCRIPTION)
        .await?;
    s.click(&green_button()).await?;

    s.expect_title(fixtures::REPO_TITLE).await?;
    s.expect_text(&Selector::link_text("LICENSE"), "LICENSE").await?;
    s.expect_text(&Selector::link_text("README.md"), "README.md")
        .await
}

/// Log in with the standard test credentials
pub async fn login<D: Driver>(s: &mut Session<D>) -> SuiteResult<()> {
    s.goto("/user/login").await?;
    s.expect_text(&attached_header(), fixtures::SIGN_IN).await?;
    s.expect_text(&green_button(), fixtures::SIGN_IN).await?;

    s.fill(&Selector::id("user_name"), fixtures::USER_NAME).await?;
    s.fill(&Selector::id("password"), fixtures::PASSWORD).await?;
    s.click(&green_button()).await
}

/// Log out of the current session
pub async fn logout<D: Driver>(s: &mut Session<D>) -> SuiteResult<()> {
    s.goto("/user/logout").await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SuiteConfig;
    use crate::driver::{MockDriver, MockElement};

    fn session(driver: MockDriver) -> Session<MockDriver> {
        let config = SuiteConfig::new("http://gin.test")
            .with_implicit_wait(20)
            .with_poll_interval(5);
        Session::new(driver, config)
    }

    fn sign_in_page() -> MockDriver {
        let mut driver = MockDriver::new();
        driver.insert(
            &Selector::css("h3.ui.top.attached.header"),
            MockElement::new().with_text("Sign In"),
        );
        driver.insert(
            &Selector::css("button.ui.green.button"),
            MockElement::new().with_text("Sign In"),
        );
        driver.insert(&Selector::id("user_name"), MockElement::new());
        driver.insert(&Selector::id("password"), MockElement::new());
        driver
    }

    mod login_tests {
        use super::*;

        #[tokio::test]
        async fn test_login_enters_credentials_and_submits() {
            let mut s = session(sign_in_page());
            login(&mut s).await.unwrap();

            let driver = s.driver();
            assert!(driver.was_called("navigate:http://gin.test/user/login"));
            assert!(driver.was_called("fill:id=user_name=testuser"));
            assert!(driver.was_called("fill:id=password=test"));
            assert!(driver.was_called("click:css=button.ui.green.button"));
        }

        #[tokio::test]
        async fn test_login_fails_on_wrong_header() {
            let mut driver = sign_in_page();
            driver.insert(
                &Selector::css("h3.ui.top.attached.header"),
                MockElement::new().with_text("Sign Up"),
            );
            let mut s = session(driver);

            let err = login(&mut s).await.unwrap_err();
            assert!(err.to_string().contains("Sign In"));
        }

        #[tokio::test]
        async fn test_logout_hits_the_logout_path() {
            let mut s = session(MockDriver::new());
            logout(&mut s).await.unwrap();
            assert!(s
                .driver()
                .was_called("navigate:http://gin.test/user/logout"));
        }
    }

    mod check_tests {
        use super::*;

        #[tokio::test]
        async fn test_landing_asserts_title() {
            let mut driver = MockDriver::new();
            driver.insert(&Selector::link_text("Home"), MockElement::new());
            driver.insert(
                &Selector::css("h2"),
                MockElement::new().with_text(fixtures::LANDING_HEADLINE),
            );
            driver.insert(
                &Selector::css("div.ginsubtitle"),
                MockElement::new().with_text(fixtures::LANDING_SUBTITLE),
            );
            driver.insert(
                &Selector::link_text("FAQ"),
                MockElement::new().with_text("FAQ"),
            );
            driver.insert(
                &Selector::link_text("Register"),
                MockElement::new().with_text("Register"),
            );
            driver.insert(
                &Selector::link_text("Sign In"),
                MockElement::new().with_text("Sign In"),
            );
            driver.set_title("GINTEST");
            let mut s = session(driver);

            landing(&mut s).await.unwrap();
            assert!(s.driver().was_called("navigate:http://gin.test"));
        }

        #[tokio::test]
        async fn test_install_fails_while_dropdown_option_hidden() {
            let mut driver = MockDriver::new();
            driver.insert(
                &Selector::css("div.ui.selection.database.type.dropdown"),
                MockElement::new(),
            );
            // Option exists in the DOM but never becomes visible
            driver.insert(&Selector::xpath("//div[4]"), MockElement::new().hidden());
            let mut s = session(driver);

            let err = install(&mut s).await.unwrap_err();
            assert!(err.to_string().contains("//div[4]"));
        }

        #[tokio::test]
        async fn test_register_requires_exact_notice_text() {
            let mut driver = sign_in_page();
            driver.insert(
                &Selector::link_text("Register"),
                MockElement::new().with_text("Register"),
            );
            driver.insert(
                &Selector::css("h3.ui.top.attached.header"),
                MockElement::new().with_text("Sign Up"),
            );
            driver.insert(
                &Selector::css("div.ui.piled.yellow.segment"),
                MockElement::new().with_text("Please note! Something else entirely"),
            );
            let mut s = session(driver);

            let err = register(&mut s).await.unwrap_err();
            assert!(matches!(err, crate::result::SuiteError::Assertion { .. }));
        }
    }
}
