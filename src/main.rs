//! gin-e2e: run the acceptance suite against a GIN instance.
//!
//! ## Usage
//!
//! ```bash
//! GINURL=http://localhost:3000 gin-e2e
//! gin-e2e --base-url http://localhost:3000 --headed
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gin_e2e::{config, CdpDriver, Session, Suite, SuiteConfig, SuiteReport, SuiteResult};

#[derive(Debug, Parser)]
#[command(
    name = "gin-e2e",
    about = "Acceptance checks for a freshly provisioned GIN instance",
    version
)]
struct Cli {
    /// Base URL of the instance under test
    #[arg(long, env = config::GIN_URL_ENV)]
    base_url: String,

    /// Run the browser with a visible window
    #[arg(long)]
    headed: bool,

    /// Path to the Chromium executable
    #[arg(long)]
    chromium_path: Option<String>,

    /// Disable the Chromium sandbox (containers/CI)
    #[arg(long)]
    no_sandbox: bool,

    /// Implicit wait for element lookups, in milliseconds
    #[arg(long, default_value_t = config::DEFAULT_IMPLICIT_WAIT_MS)]
    wait_ms: u64,

    /// Close the browser when the suite finishes instead of leaving it
    /// connected for inspection
    #[arg(long)]
    close_browser: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(report) => {
            println!("{report}");
            if report.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> SuiteResult<SuiteReport> {
    let mut config = SuiteConfig::new(cli.base_url)
        .with_headless(!cli.headed)
        .with_implicit_wait(cli.wait_ms)
        .with_keep_browser_open(!cli.close_browser);

    if cli.no_sandbox {
        config = config.with_no_sandbox();
    }
    if let Some(path) = cli.chromium_path {
        config = config.with_chromium_path(path);
    }

    let driver = CdpDriver::launch(&config).await?;
    let mut session = Session::new(driver, config.clone());

    let report = Suite::new().run(&mut session).await;

    if !config.keep_browser_open {
        session.close().await?;
    }

    Ok(report)
}
