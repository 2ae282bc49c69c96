//! Orchestrates login, discovery and feature toggling.

mod config;
mod error;

pub use config::{RepositorySelection, RunnerConfig};
pub use error::RunnerError;

use crate::browser::{BrowserError, BrowserSession, WebDriverSession};
use crate::config::Settings;
use crate::discovery::discover_repositories;
use crate::repository::{normalize_tokens, RepositoryRef};
use crate::summary::{ProcessingResult, RunSummary};
use crate::toggle::enable_feature;
use tracing::{error, info, warn};

/// Repositories a run will process, resolved before the browser opens.
enum Targets {
    Discover,
    Explicit(Vec<RepositoryRef>),
}

/// Drives a complete run over one browsing session.
pub struct Runner {
    config: RunnerConfig,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Executes the full flow on a new WebDriver session.
    ///
    /// Input is validated before the browser is opened. The session is
    /// closed at the end, including when the run aborts.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] for fatal conditions: bad input, no session,
    /// login not detected, failed or empty discovery.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        self.resolve_targets()?;
        let settings = self.config.settings();

        let mut session =
            WebDriverSession::connect(&settings.webdriver_url, settings.headless).await?;
        self.run_and_close(&mut session).await
    }

    /// Executes the full flow on `session`, then closes it.
    ///
    /// The session is closed whether the run succeeds or aborts.
    ///
    /// # Errors
    ///
    /// Same as [`Runner::run`], minus session creation.
    pub async fn run_and_close<S>(&self, session: &mut S) -> Result<RunSummary, RunnerError>
    where
        S: BrowserSession + ?Sized,
    {
        let result = self.run_with_session(session).await;

        if let Err(e) = session.close().await {
            warn!(error = %e, "Failed to close browser session");
        }
        result
    }

    /// Executes the full flow on a caller-owned session.
    ///
    /// The session is left open; closing it is up to the caller.
    ///
    /// # Errors
    ///
    /// Same as [`Runner::run`], minus session creation.
    pub async fn run_with_session<S>(&self, session: &mut S) -> Result<RunSummary, RunnerError>
    where
        S: BrowserSession + ?Sized,
    {
        let targets = self.resolve_targets()?;
        self.execute(session, targets).await
    }

    /// Validates the username and parses explicit repositories.
    fn resolve_targets(&self) -> Result<Targets, RunnerError> {
        let username = self.config.username().trim();
        if username.is_empty() {
            return Err(RunnerError::MissingUsername);
        }

        match self.config.selection() {
            RepositorySelection::All => Ok(Targets::Discover),
            RepositorySelection::Explicit(tokens) if tokens.is_empty() => {
                Err(RunnerError::NoRepositoriesSpecified)
            }
            RepositorySelection::Explicit(tokens) => {
                Ok(Targets::Explicit(normalize_tokens(tokens, username)?))
            }
        }
    }

    async fn execute<S>(&self, session: &mut S, targets: Targets) -> Result<RunSummary, RunnerError>
    where
        S: BrowserSession + ?Sized,
    {
        let settings = self.config.settings();
        let username = self.config.username().trim();
        let dry_run = self.config.dry_run();
        let mut summary = RunSummary::new(dry_run);

        wait_for_login(session, settings).await?;

        let repositories = match targets {
            Targets::Discover => {
                let repositories = discover_repositories(session, settings, username).await?;
                summary.repositories_discovered = Some(repositories.len());
                if repositories.is_empty() {
                    return Err(RunnerError::NoRepositoriesDiscovered {
                        username: username.to_string(),
                    });
                }
                info!(count = repositories.len(), user = %username, "Found repositories");
                repositories
            }
            Targets::Explicit(repositories) => repositories,
        };

        let total = repositories.len();
        for (index, repository) in repositories.into_iter().enumerate() {
            info!(repo = %repository, "Processing repository [{}/{}]", index + 1, total);

            let outcome = enable_feature(session, settings, &repository, dry_run).await;
            let result = match outcome {
                Ok(status) => ProcessingResult::Success { repository, status },
                Err(e) => {
                    error!(
                        repo = %repository,
                        error = %e,
                        "Failed to enable Discussions"
                    );
                    ProcessingResult::Failed {
                        repository,
                        error: e.to_string(),
                    }
                }
            };
            summary.record_result(result);

            tokio::time::sleep(settings.timeouts.repository_delay()).await;
        }

        Ok(summary)
    }
}

/// Opens the front page and waits for the user to sign in.
async fn wait_for_login<S>(session: &mut S, settings: &Settings) -> Result<(), RunnerError>
where
    S: BrowserSession + ?Sized,
{
    info!(
        timeout_secs = settings.timeouts.login_timeout_secs,
        "Opening GitHub and waiting for login"
    );
    session.navigate(&settings.base_url).await?;

    match session
        .wait_for(&settings.selectors.signed_in, settings.timeouts.login_timeout())
        .await
    {
        Ok(()) => {
            info!("Login detected");
            Ok(())
        }
        Err(BrowserError::Timeout { .. }) => Err(RunnerError::LoginNotDetected {
            timeout_secs: settings.timeouts.login_timeout_secs,
        }),
        Err(e) => Err(e.into()),
    }
}
