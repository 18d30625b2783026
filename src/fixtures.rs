//! Literal fixture values and expected page text.
//!
//! The suite assumes a freshly provisioned instance with no prior
//! `testuser` or `testrepo1`; every expectation below is exact, case- and
//! whitespace-sensitive.

/// Application name entered during install; also the expected page title
pub const APP_NAME: &str = "GINTEST";

/// SQLite database path entered during install
pub const DB_PATH: &str = "/data/gogs.db";

/// Username registered and logged in by the suite
pub const USER_NAME: &str = "testuser";

/// Password for the test user
pub const PASSWORD: &str = "test";

/// Email for the test user
pub const EMAIL: &str = "test@test.test";

/// Full name for the test user
pub const FULL_NAME: &str = "test";

/// Affiliation for the test user
pub const AFFILIATION: &str = "tester";

/// Name of the repository the suite creates
pub const REPO_NAME: &str = "testrepo1";

/// Description of the repository the suite creates
pub const REPO_DESCRIPTION: &str = "this is the first test repository";

/// Header shown on the sign-in page
pub const SIGN_IN: &str = "Sign In";

/// Header shown on the registration page
pub const SIGN_UP: &str = "Sign Up";

/// Headline on the landing page
pub const LANDING_HEADLINE: &str = "Modern Research Data Management for Neuroscience";

/// Subtitle on the landing page
pub const LANDING_SUBTITLE: &str = "...inspired by github, flavoured for science";

/// Institutional-email notice on the registration page
pub const REGISTER_NOTICE: &str = "Please note!\nFor Registration we require only username, \
password and email. Please use an institutional email to register. Otherwise you will only be \
able to use a subset of gins functionality and your maximum repository size will be dramatically \
reduced";

/// Page title after logging in
pub const DASHBOARD_TITLE: &str = "test - Dashboard - GINTEST";

/// Page title of the new-repository form
pub const NEW_REPO_TITLE: &str = "New Repository - GINTEST";

/// Page title of the created repository
pub const REPO_TITLE: &str = "testuser/testrepo1: this is the first test repository - GINTEST";
