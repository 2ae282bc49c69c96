//! CLI for the Discussions enabler.
//!
//! Opens a browser on github.com, waits for the user to sign in, then ticks
//! the Discussions checkbox on each target repository.

use clap::{ArgGroup, Parser};
use discussions_enabler::{
    ProcessingResult, RepositorySelection, RunSummary, Runner, RunnerConfig, RunnerError,
    Settings,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use url::Url;

/// Discussions Enabler - Enable GitHub Discussions on a user's repositories.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("targets").required(true).args(["repos", "all"])))]
struct Args {
    /// GitHub username used for discovery and for bare repository names.
    #[arg(long, env = "GITHUB_USER")]
    user: String,

    /// Repositories to process, as `name` or `owner/name`.
    #[arg(long, num_args = 1..)]
    repos: Vec<String>,

    /// Process every repository in the user's repository listing.
    #[arg(long)]
    all: bool,

    /// Report which repositories would change without clicking anything.
    #[arg(long)]
    dry_run: bool,

    /// Path to a TOML settings file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// WebDriver server URL.
    #[arg(long)]
    webdriver_url: Option<Url>,

    /// Run the browser without a window.
    #[arg(long)]
    headless: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);

            if summary.has_failures() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!(error = %e, "Aborting run");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(url) = args.webdriver_url {
        settings = settings.with_webdriver_url(url);
    }
    if args.headless {
        settings = settings.with_headless(true);
    }

    let selection = if args.all {
        RepositorySelection::All
    } else {
        RepositorySelection::Explicit(args.repos)
    };

    let config = RunnerConfig::new(args.user, selection, settings).with_dry_run(args.dry_run);
    Runner::new(config).run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!(
        "  Mode: {}",
        if summary.dry_run { "Dry Run" } else { "Live" }
    );
    if let Some(discovered) = summary.repositories_discovered {
        println!("  Repositories discovered: {discovered}");
    }
    println!(
        "  Repositories processed: {}",
        summary.repositories_processed
    );

    if summary.dry_run {
        println!("  Would enable: {}", summary.would_enable);
    } else {
        println!("  Enabled: {}", summary.enabled);
    }
    println!("  Already enabled: {}", summary.already_enabled);
    println!("  Failed: {}", summary.failed);

    for result in summary.failures() {
        if let ProcessingResult::Failed { repository, error } = result {
            println!("    {repository}: {error}");
        }
    }
}
